//! Manifest read options.

use crate::conf::C_SHEET_NAME_DEFAULT;

/// Input options for [`crate::reader::read_manifest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecManifestReadOptions {
    /// Worksheet to read.
    pub sheet_name: String,
    /// First used row is a header and is not read as data.
    pub if_has_header: bool,
}

impl Default for SpecManifestReadOptions {
    fn default() -> Self {
        Self {
            sheet_name: C_SHEET_NAME_DEFAULT.to_string(),
            if_has_header: true,
        }
    }
}
