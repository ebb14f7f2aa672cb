//! `moment_io_fs` v1:
//! Rust-side manifest transfer engine.
//!
//! - `transfer` : per-row path resolution and copy/move orchestration
//! - `spec`     : enums/options/errors
//! - `report`   : run-time status report model
//! - `util`     : shared helper functions

pub mod report;
pub mod spec;
pub mod transfer;
mod util;

pub use report::{ReportTransfer, ReportTransferBuilder, SpecTransferRecord};
pub use spec::{
    EnumTransferMode, EnumTransferPathMode, SpecTransferOptions, SpecTransferOutcome,
    SpecTransferPaths, TransferRowError,
};
pub use transfer::{
    execute_transfer, resolve_transfer_paths, transfer_instruction, transfer_manifest,
};
