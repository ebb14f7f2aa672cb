//! Stateless helper utilities used by the manifest reader.

use std::path::Path;

use calamine::Data;
use moment_manifest::ReadManifestError;

use crate::conf::TUP_MANIFEST_EXTENSIONS;

////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Largest float magnitude rendered as an integer without loss.
const N_FLOAT_INTEGRAL_MAX: f64 = 9_007_199_254_740_992.0;

/// Normalize one cell to trimmed text; blank and error cells become `None`.
pub fn convert_cell_value(value: &Data) -> Option<String> {
    let c_value = match value {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Int(n) => n.to_string(),
        Data::Float(x) => {
            if x.is_finite() && x.fract() == 0.0 && x.abs() <= N_FLOAT_INTEGRAL_MAX {
                (*x as i64).to_string()
            } else {
                x.to_string()
            }
        }
        other => other.to_string().trim().to_string(),
    };
    if c_value.is_empty() {
        return None;
    }
    Some(c_value)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathValidation

/// Reject paths whose extension is not a supported workbook format.
pub fn validate_manifest_extension(path: &Path) -> Result<(), ReadManifestError> {
    let c_ext = path
        .extension()
        .map(|v| v.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if TUP_MANIFEST_EXTENSIONS.contains(&c_ext.as_str()) {
        return Ok(());
    }
    Err(ReadManifestError::InvalidManifestFormat {
        path: path.to_path_buf(),
        message: format!(
            "Invalid file extension. Supported formats are: .{}",
            TUP_MANIFEST_EXTENSIONS.join(", .")
        ),
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
