//! Manifest models and top-level error types.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////
// #region Constants

/// Column label of the file-name cell.
pub const C_COLUMN_FILE: &str = "file";
/// Column label of the source-directory cell.
pub const C_COLUMN_SOURCE: &str = "source";
/// Column label of the destination-directory cell.
pub const C_COLUMN_DESTINATION: &str = "destination";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Instruction

/// One manifest row: move/copy `name_file` from `dir_source` to `dir_destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTransferInstruction {
    row_id: String,
    name_file: String,
    dir_source: PathBuf,
    dir_destination: PathBuf,
}

impl SpecTransferInstruction {
    /// Build an instruction, rejecting blank cells.
    pub fn new(
        row_id: impl Into<String>,
        name_file: impl Into<String>,
        dir_source: impl Into<PathBuf>,
        dir_destination: impl Into<PathBuf>,
    ) -> Result<Self, ReadManifestError> {
        let row_id = row_id.into();
        let name_file = name_file.into();
        let dir_source = dir_source.into();
        let dir_destination = dir_destination.into();

        for (column, b_is_empty) in [
            (C_COLUMN_FILE, name_file.trim().is_empty()),
            (C_COLUMN_SOURCE, dir_source.as_os_str().is_empty()),
            (C_COLUMN_DESTINATION, dir_destination.as_os_str().is_empty()),
        ] {
            if b_is_empty {
                return Err(ReadManifestError::IncompleteRow { row_id, column });
            }
        }

        Ok(Self {
            row_id,
            name_file,
            dir_source,
            dir_destination,
        })
    }

    pub fn row_id(&self) -> &str {
        &self.row_id
    }

    pub fn name_file(&self) -> &str {
        &self.name_file
    }

    pub fn dir_source(&self) -> &Path {
        &self.dir_source
    }

    pub fn dir_destination(&self) -> &Path {
        &self.dir_destination
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Manifest

/// Row-keyed set of instructions, iterated in insertion (sheet) order.
#[derive(Debug, Clone, Default)]
pub struct SpecManifest {
    l_instructions: Vec<SpecTransferInstruction>,
    dict_row_index: HashMap<String, usize>,
}

impl SpecManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one instruction. A row id seen before is an error; entries are never overwritten.
    pub fn insert(&mut self, instruction: SpecTransferInstruction) -> Result<(), ReadManifestError> {
        if self.dict_row_index.contains_key(instruction.row_id()) {
            return Err(ReadManifestError::DuplicateRowIdentifier(
                instruction.row_id.clone(),
            ));
        }
        self.dict_row_index
            .insert(instruction.row_id.clone(), self.l_instructions.len());
        self.l_instructions.push(instruction);
        Ok(())
    }

    pub fn get(&self, row_id: &str) -> Option<&SpecTransferInstruction> {
        self.dict_row_index
            .get(row_id)
            .map(|n_idx| &self.l_instructions[*n_idx])
    }

    pub fn contains(&self, row_id: &str) -> bool {
        self.dict_row_index.contains_key(row_id)
    }

    pub fn len(&self) -> usize {
        self.l_instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.l_instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpecTransferInstruction> {
        self.l_instructions.iter()
    }
}

impl<'a> IntoIterator for &'a SpecManifest {
    type Item = &'a SpecTransferInstruction;
    type IntoIter = std::slice::Iter<'a, SpecTransferInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Fatal manifest errors. Any of these aborts a run before the filesystem is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadManifestError {
    /// Manifest path does not exist.
    ManifestNotFound(PathBuf),
    /// Manifest path is a directory, not a workbook.
    ManifestIsDirectory(PathBuf),
    /// Unsupported extension or unreadable workbook.
    InvalidManifestFormat {
        /// Manifest path.
        path: PathBuf,
        /// Parser or validation message.
        message: String,
    },
    /// Requested worksheet does not exist.
    SheetNotFound {
        /// Requested sheet name.
        sheet: String,
        /// Sheet names present in the workbook.
        sheets_available: Vec<String>,
    },
    /// Structural row label does not end in a row number.
    MalformedRowIdentifier(String),
    /// Two rows produced the same row id.
    DuplicateRowIdentifier(String),
    /// Row has some but not all of its cells filled.
    IncompleteRow {
        /// Row id of the offending row.
        row_id: String,
        /// First blank column.
        column: &'static str,
    },
}

impl fmt::Display for ReadManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManifestNotFound(path) => {
                write!(f, "Manifest file not found: {}", path.display())
            }
            Self::ManifestIsDirectory(path) => {
                write!(
                    f,
                    "Given path is a folder, not a manifest file: {}",
                    path.display()
                )
            }
            Self::InvalidManifestFormat { path, message } => {
                write!(f, "Invalid manifest {}: {message}", path.display())
            }
            Self::SheetNotFound {
                sheet,
                sheets_available,
            } => write!(
                f,
                "Sheet {sheet:?} not found (available: {})",
                sheets_available.join(", ")
            ),
            Self::MalformedRowIdentifier(label) => {
                write!(f, "Malformed row identifier in cell label {label:?}")
            }
            Self::DuplicateRowIdentifier(row_id) => {
                write!(f, "Duplicate row identifier: {row_id}")
            }
            Self::IncompleteRow { row_id, column } => {
                write!(f, "Row {row_id} has an empty {column} cell")
            }
        }
    }
}

impl std::error::Error for ReadManifestError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(row_id: &str, name_file: &str) -> SpecTransferInstruction {
        SpecTransferInstruction::new(row_id, name_file, "in", "out").expect("valid instruction")
    }

    #[test]
    fn instruction_rejects_blank_cells() {
        let err = SpecTransferInstruction::new("4", "a.txt", "", "out").expect_err("must fail");
        assert_eq!(
            err,
            ReadManifestError::IncompleteRow {
                row_id: "4".to_string(),
                column: C_COLUMN_SOURCE,
            }
        );

        let err = SpecTransferInstruction::new("5", "  ", "in", "out").expect_err("must fail");
        assert!(matches!(
            err,
            ReadManifestError::IncompleteRow { column: C_COLUMN_FILE, .. }
        ));
    }

    #[test]
    fn manifest_keeps_insertion_order() {
        let mut manifest = SpecManifest::new();
        manifest.insert(instruction("10", "c.txt")).expect("insert");
        manifest.insert(instruction("2", "a.txt")).expect("insert");
        manifest.insert(instruction("3", "b.txt")).expect("insert");

        let l_row_ids = manifest.iter().map(|v| v.row_id()).collect::<Vec<_>>();
        assert_eq!(l_row_ids, vec!["10", "2", "3"]);
        assert_eq!(manifest.get("2").map(|v| v.name_file()), Some("a.txt"));
        assert!(manifest.get("4").is_none());
    }

    #[test]
    fn manifest_rejects_duplicate_row_id() {
        let mut manifest = SpecManifest::new();
        manifest.insert(instruction("2", "a.txt")).expect("insert");

        let err = manifest
            .insert(instruction("2", "b.txt"))
            .expect_err("duplicate must fail");
        assert_eq!(err, ReadManifestError::DuplicateRowIdentifier("2".to_string()));
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.get("2").map(|v| v.name_file()), Some("a.txt"));
    }
}
