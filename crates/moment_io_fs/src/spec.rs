//! Transfer specification models and per-row error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// How manifest directories are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumTransferPathMode {
    /// Join manifest directories onto [`SpecTransferOptions::path_dir_base`].
    Relative,
    /// Use manifest directories as given.
    Absolute,
}

/// What happens to the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumTransferMode {
    /// Copy bytes and metadata; source is kept.
    Copy,
    /// Move the file; source is removed.
    Move,
}

impl EnumTransferMode {
    /// Past-tense verb for status messages.
    pub fn verb_past(self) -> &'static str {
        match self {
            Self::Copy => "Copied",
            Self::Move => "Moved",
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `transfer_manifest`.
#[derive(Debug, Clone)]
pub struct SpecTransferOptions {
    /// Base directory for relative manifest paths.
    pub path_dir_base: PathBuf,
    /// Relative vs absolute path handling.
    pub rule_path: EnumTransferPathMode,
    /// Copy vs move.
    pub rule_transfer: EnumTransferMode,
    /// Do not mutate filesystem; classify rows as a real run would.
    pub if_dry_run: bool,
}

impl Default for SpecTransferOptions {
    fn default() -> Self {
        Self {
            path_dir_base: PathBuf::from("."),
            rule_path: EnumTransferPathMode::Relative,
            rule_transfer: EnumTransferMode::Copy,
            if_dry_run: false,
        }
    }
}

/// Resolved directories and file paths for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTransferPaths {
    pub path_dir_src: PathBuf,
    pub path_dir_dst: PathBuf,
    pub path_file_src: PathBuf,
    pub path_file_dst: PathBuf,
}

/// Result of one successful (or dry-run) row transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTransferOutcome {
    /// Canonical source path, taken before any mutation.
    pub path_file_src: PathBuf,
    /// Destination file path.
    pub path_file_dst: PathBuf,
    /// Destination directory was missing (and created unless dry-run).
    pub if_created_dir_dst: bool,
}

/// Recoverable per-row failure. The row is recorded as skipped and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferRowError {
    /// Source path is not an existing regular file.
    SourceFileMissing(PathBuf),
    /// Destination directory/file cannot be created or written.
    DestinationUnwritable {
        /// Offending destination path.
        path: PathBuf,
        /// User-facing error text.
        message: String,
    },
    /// Destination resolves to the source file itself.
    SourceIsDestination(PathBuf),
    /// Any other IO failure during copy/move.
    Io {
        /// Path being written when the failure occurred.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl fmt::Display for TransferRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceFileMissing(path) => {
                write!(f, "Source file not found: {}", path.display())
            }
            Self::DestinationUnwritable { path, message } => {
                write!(f, "Destination not writable {}: {message}", path.display())
            }
            Self::SourceIsDestination(path) => {
                write!(f, "Source and destination are the same file: {}", path.display())
            }
            Self::Io { path, message } => {
                write!(f, "Transfer failed for {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for TransferRowError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
