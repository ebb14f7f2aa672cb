//! Cell-reference helpers and the row-identifier grammar.

use std::sync::LazyLock;

use regex::Regex;

use crate::spec::ReadManifestError;

/// `[<sheet>!][$]<COLUMN>[$]<ROW>` where `<ROW>` has no leading zero and ends the label.
static RE_ROW_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.+!)?\$?[A-Z]+\$?([1-9][0-9]*)$").expect("row identifier pattern is valid")
});

/// Convert a zero-based column index into spreadsheet letters (`0 -> A`, `26 -> AA`).
pub fn derive_column_letters(n_col: u32) -> String {
    let mut l_chars = Vec::new();
    let mut n_rest = n_col as u64 + 1;
    while n_rest > 0 {
        let n_rem = ((n_rest - 1) % 26) as u8;
        l_chars.push((b'A' + n_rem) as char);
        n_rest = (n_rest - 1) / 26;
    }
    l_chars.iter().rev().collect()
}

/// Build the A1-style reference of a zero-based `(row, col)` position.
pub fn derive_cell_reference(n_row: u32, n_col: u32) -> String {
    format!("{}{}", derive_column_letters(n_col), n_row as u64 + 1)
}

/// Extract the row id (trailing row number) from a structural cell label.
pub fn parse_row_identifier(label: &str) -> Result<String, ReadManifestError> {
    RE_ROW_IDENTIFIER
        .captures(label.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ReadManifestError::MalformedRowIdentifier(label.to_string()))
}
