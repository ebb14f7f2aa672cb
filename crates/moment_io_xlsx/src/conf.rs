//! Manifest reader constants.

/// Sheet read when none is given.
pub const C_SHEET_NAME_DEFAULT: &str = "Sheet1";
/// Columns read per row: file name, source directory, destination directory.
pub const N_NCOLS_MANIFEST: u32 = 3;
/// Workbook extensions accepted as manifests (lowercase, without dot).
pub const TUP_MANIFEST_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xltx", "xltm"];
