use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::spec::TransferRowError;

////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

/// Canonical form of `path` when it exists, otherwise its absolute,
/// lexically normalized form. Relative paths resolve the way the OS resolves
/// them for the file operation itself.
pub(crate) fn derive_report_path(path: &Path) -> PathBuf {
    if let Ok(path_canonical) = fs::canonicalize(path) {
        return path_canonical;
    }
    let path_absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_lexically(&path_absolute)
}

/// Drop `.` and fold `..` into the preceding component without touching disk.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut path_out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !path_out.pop() {
                    path_out.push(component);
                }
            }
            _ => path_out.push(component),
        }
    }
    path_out
}

/// True when both paths name the same file, hard links included.
pub(crate) fn is_same_file(path_file_src: &Path, path_file_dst: &Path) -> bool {
    let (Ok(stat_src), Ok(stat_dst)) = (fs::metadata(path_file_src), fs::metadata(path_file_dst))
    else {
        return false;
    };
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        (stat_src.dev(), stat_src.ino()) == (stat_dst.dev(), stat_dst.ino())
    }
    #[cfg(not(unix))]
    {
        let _ = (stat_src, stat_dst);
        match (fs::canonicalize(path_file_src), fs::canonicalize(path_file_dst)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// Map an IO error on the destination side to a row error.
pub(crate) fn convert_io_error(path_dst: &Path, e: io::Error) -> TransferRowError {
    match e.kind() {
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
            TransferRowError::DestinationUnwritable {
                path: path_dst.to_path_buf(),
                message: e.to_string(),
            }
        }
        _ => TransferRowError::Io {
            path: path_dst.to_path_buf(),
            message: e.to_string(),
        },
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileOperations

pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    fs::copy(path_file_src, path_file_dst)?;
    #[cfg(target_os = "linux")]
    {
        apply_metadata_linux(path_file_src, path_file_dst)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        apply_file_times(path_file_src, path_file_dst)?;
    }
    Ok(())
}

/// Rename `path_file_src` onto `path_file_dst`; fall back to copy + remove
/// when rename is refused (e.g. across filesystems).
pub(crate) fn move_file(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    match fs::rename(path_file_src, path_file_dst) {
        Ok(()) => Ok(()),
        Err(e_rename) => {
            tracing::debug!(
                src = %path_file_src.display(),
                error = %e_rename,
                "rename failed; falling back to copy and remove"
            );
            copy_then_remove_source(path_file_src, path_file_dst, |path| fs::remove_file(path))
        }
    }
}

/// Copy, then remove the source with `fn_remove`. A failed removal deletes the
/// fresh copy again so a skipped row leaves only the source behind.
fn copy_then_remove_source<F>(
    path_file_src: &Path,
    path_file_dst: &Path,
    fn_remove: F,
) -> Result<(), io::Error>
where
    F: FnOnce(&Path) -> Result<(), io::Error>,
{
    copy_file_with_metadata(path_file_src, path_file_dst)?;
    if let Err(e_remove) = fn_remove(path_file_src) {
        if let Err(e_rollback) = fs::remove_file(path_file_dst) {
            tracing::warn!(
                dst = %path_file_dst.display(),
                error = %e_rollback,
                "failed to remove copy after source removal failed"
            );
        }
        return Err(io::Error::new(
            e_remove.kind(),
            format!("Source could not be removed, copy rolled back: {e_remove}"),
        ));
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn apply_metadata_linux(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    let stat_src = fs::metadata(path_file_src)?;
    fs::set_permissions(path_file_dst, stat_src.permissions())?;
    apply_file_times(path_file_src, path_file_dst)?;

    copy_xattrs_linux(path_file_src, path_file_dst);
    Ok(())
}

fn apply_file_times(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;
    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let Ok(iter_xattr_names) = xattr::list(path_file_src) else {
        return;
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        // Unsupported namespaces on the destination filesystem are not fatal.
        let _ = xattr::set(path_file_dst, &name, &raw_value);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
