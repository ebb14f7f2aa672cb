//! `moment_io_xlsx` v1:
//! Rust-side manifest reader for spreadsheet workbooks.
//!
//! - `conf`   : constants and defaults
//! - `spec`   : read options
//! - `util`   : pure helper functions
//! - `reader` : workbook to manifest extraction
pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;

pub use conf::{C_SHEET_NAME_DEFAULT, N_NCOLS_MANIFEST, TUP_MANIFEST_EXTENSIONS};
pub use reader::{extract_manifest_rows, read_manifest};
pub use spec::SpecManifestReadOptions;
pub use util::{convert_cell_value, validate_manifest_extension};
