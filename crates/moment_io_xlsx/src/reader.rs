//! Workbook reader that converts worksheet rows into a transfer manifest.

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use moment_manifest::{
    ReadManifestError, SpecManifest, SpecTransferInstruction, derive_cell_reference,
    parse_row_identifier,
};
use tracing::{debug, info};

use crate::conf::N_NCOLS_MANIFEST;
use crate::spec::SpecManifestReadOptions;
use crate::util::{convert_cell_value, validate_manifest_extension};

/// Read the manifest at `path_file` into a row-keyed [`SpecManifest`].
///
/// The path must be an existing workbook with a supported extension, and the
/// sheet named in `spec_read_options` must exist. Rows are read from columns
/// A-C (file name, source directory, destination directory), starting at the
/// first used row of the sheet, or the row after it when a header is present.
///
/// The workbook is closed before this function returns.
pub fn read_manifest<P>(
    path_file: P,
    spec_read_options: &SpecManifestReadOptions,
) -> Result<SpecManifest, ReadManifestError>
where
    P: AsRef<Path>,
{
    let path_file = path_file.as_ref();
    if path_file.is_dir() {
        return Err(ReadManifestError::ManifestIsDirectory(
            path_file.to_path_buf(),
        ));
    }
    if !path_file.is_file() {
        return Err(ReadManifestError::ManifestNotFound(path_file.to_path_buf()));
    }
    validate_manifest_extension(path_file)?;

    let range_sheet = {
        let mut workbook: Xlsx<_> =
            open_workbook(path_file).map_err(|e: calamine::XlsxError| ReadManifestError::InvalidManifestFormat {
                path: path_file.to_path_buf(),
                message: e.to_string(),
            })?;

        let l_sheet_names = workbook.sheet_names();
        if !l_sheet_names.contains(&spec_read_options.sheet_name) {
            return Err(ReadManifestError::SheetNotFound {
                sheet: spec_read_options.sheet_name.clone(),
                sheets_available: l_sheet_names,
            });
        }

        workbook
            .worksheet_range(&spec_read_options.sheet_name)
            .map_err(|e| ReadManifestError::InvalidManifestFormat {
                path: path_file.to_path_buf(),
                message: e.to_string(),
            })?
    };

    let manifest = extract_manifest_rows(&range_sheet, spec_read_options.if_has_header)?;
    info!(
        path = %path_file.display(),
        sheet = %spec_read_options.sheet_name,
        n_rows = manifest.len(),
        "manifest read"
    );
    Ok(manifest)
}

/// Extract instructions from an in-memory worksheet range.
///
/// Fully blank rows are ignored. A partially filled row fails with
/// [`ReadManifestError::IncompleteRow`].
pub fn extract_manifest_rows(
    range_sheet: &Range<Data>,
    if_has_header: bool,
) -> Result<SpecManifest, ReadManifestError> {
    let mut manifest = SpecManifest::new();
    let (Some((n_row_used_first, _)), Some((n_row_used_last, _))) =
        (range_sheet.start(), range_sheet.end())
    else {
        debug!("sheet is empty");
        return Ok(manifest);
    };

    let n_row_first = if if_has_header {
        n_row_used_first + 1
    } else {
        n_row_used_first
    };

    for n_row in n_row_first..=n_row_used_last {
        let l_cells = (0..N_NCOLS_MANIFEST)
            .map(|n_col| {
                range_sheet
                    .get_value((n_row, n_col))
                    .and_then(convert_cell_value)
            })
            .collect::<Vec<_>>();
        if l_cells.iter().all(Option::is_none) {
            debug!(n_row = n_row + 1, "blank row ignored");
            continue;
        }

        let row_id = parse_row_identifier(&derive_cell_reference(n_row, 0))?;
        let mut iter_cells = l_cells.into_iter().map(Option::unwrap_or_default);
        let name_file = iter_cells.next().unwrap_or_default();
        let dir_source = iter_cells.next().unwrap_or_default();
        let dir_destination = iter_cells.next().unwrap_or_default();

        let instruction =
            SpecTransferInstruction::new(row_id, name_file, dir_source, dir_destination)?;
        debug!(
            row_id = instruction.row_id(),
            file = instruction.name_file(),
            "row read"
        );
        manifest.insert(instruction)?;
    }

    Ok(manifest)
}
