//! `moment_manifest` v1:
//! Transfer manifest model shared by the reader and the executor.
//!
//! - `spec` : instruction/manifest models and fatal manifest errors
//! - `util` : cell-reference and row-identifier grammar

pub mod spec;
pub mod util;

pub use spec::{ReadManifestError, SpecManifest, SpecTransferInstruction};
pub use util::{derive_cell_reference, derive_column_letters, parse_row_identifier};
