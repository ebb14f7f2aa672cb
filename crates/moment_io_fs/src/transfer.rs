//! Manifest-driven copy/move orchestration.

use std::fs;

use moment_manifest::{SpecManifest, SpecTransferInstruction};
use tracing::{debug, info, warn};

use crate::report::{ReportTransfer, ReportTransferBuilder};
use crate::spec::{
    EnumTransferMode, EnumTransferPathMode, SpecTransferOptions, SpecTransferOutcome,
    SpecTransferPaths, TransferRowError,
};
use crate::util::{
    convert_io_error, copy_file_with_metadata, derive_report_path, is_same_file, move_file,
};

/// Transfer every row of `manifest` according to `spec_options`.
///
/// Rows are processed sequentially in manifest order. This function never
/// fails: each row either lands in [`ReportTransfer::succeeded`] or, with its
/// [`TransferRowError`], in [`ReportTransfer::skipped`], and the next row is
/// processed regardless.
pub fn transfer_manifest(
    manifest: &SpecManifest,
    spec_options: &SpecTransferOptions,
) -> ReportTransfer {
    let mut builder_report = ReportTransferBuilder::default();

    info!(
        n_rows = manifest.len(),
        mode = ?spec_options.rule_transfer,
        paths = ?spec_options.rule_path,
        dry_run = spec_options.if_dry_run,
        "transfer started"
    );

    for instruction in manifest {
        let spec_paths = resolve_transfer_paths(instruction, spec_options);
        match execute_transfer(&spec_paths, spec_options) {
            Ok(outcome) => {
                builder_report.add_succeeded(instruction.row_id(), outcome.path_file_src);
            }
            Err(e) => {
                warn!(row_id = instruction.row_id(), "skipped: {e}");
                builder_report.add_skipped(
                    instruction.row_id(),
                    derive_report_path(&spec_paths.path_file_src),
                    e,
                );
            }
        }
    }

    let report = builder_report.build();
    info!("{report}");
    report
}

/// Resolve and transfer a single instruction.
pub fn transfer_instruction(
    instruction: &SpecTransferInstruction,
    spec_options: &SpecTransferOptions,
) -> Result<SpecTransferOutcome, TransferRowError> {
    execute_transfer(&resolve_transfer_paths(instruction, spec_options), spec_options)
}

/// Compose source/destination directories and file paths for one row.
pub fn resolve_transfer_paths(
    instruction: &SpecTransferInstruction,
    spec_options: &SpecTransferOptions,
) -> SpecTransferPaths {
    let (path_dir_src, path_dir_dst) = match spec_options.rule_path {
        EnumTransferPathMode::Relative => (
            spec_options.path_dir_base.join(instruction.dir_source()),
            spec_options.path_dir_base.join(instruction.dir_destination()),
        ),
        EnumTransferPathMode::Absolute => (
            instruction.dir_source().to_path_buf(),
            instruction.dir_destination().to_path_buf(),
        ),
    };
    let path_file_src = path_dir_src.join(instruction.name_file());
    let path_file_dst = path_dir_dst.join(instruction.name_file());

    SpecTransferPaths {
        path_dir_src,
        path_dir_dst,
        path_file_src,
        path_file_dst,
    }
}

/// Run the existence checks and, unless dry-run, the copy/move for resolved paths.
///
/// Every check that decides between success and skip is evaluated in dry-run
/// as well; only directory creation and the file operation are suppressed.
pub fn execute_transfer(
    spec_paths: &SpecTransferPaths,
    spec_options: &SpecTransferOptions,
) -> Result<SpecTransferOutcome, TransferRowError> {
    let SpecTransferPaths {
        path_dir_dst,
        path_file_src,
        path_file_dst,
        ..
    } = spec_paths;

    if !path_file_src.is_file() {
        return Err(TransferRowError::SourceFileMissing(path_file_src.clone()));
    }
    let path_file_src_resolved = derive_report_path(path_file_src);
    debug!(src = %path_file_src_resolved.display(), "source file exists");

    let if_dir_dst_missing = !path_dir_dst.exists();
    if !if_dir_dst_missing && !path_dir_dst.is_dir() {
        return Err(TransferRowError::DestinationUnwritable {
            path: path_dir_dst.clone(),
            message: "Destination exists and is not a directory".to_string(),
        });
    }
    if path_file_dst.is_dir() {
        return Err(TransferRowError::DestinationUnwritable {
            path: path_file_dst.clone(),
            message: "Destination file path is a directory".to_string(),
        });
    }
    if is_same_file(path_file_src, path_file_dst) {
        return Err(TransferRowError::SourceIsDestination(
            path_file_src_resolved,
        ));
    }

    let outcome = SpecTransferOutcome {
        path_file_src: path_file_src_resolved,
        path_file_dst: path_file_dst.clone(),
        if_created_dir_dst: if_dir_dst_missing,
    };

    if spec_options.if_dry_run {
        debug!(
            src = %outcome.path_file_src.display(),
            dst = %path_file_dst.display(),
            "dry run; filesystem left untouched"
        );
        return Ok(outcome);
    }

    if if_dir_dst_missing {
        fs::create_dir_all(path_dir_dst).map_err(|e| TransferRowError::DestinationUnwritable {
            path: path_dir_dst.clone(),
            message: e.to_string(),
        })?;
        info!(dir = %derive_report_path(path_dir_dst).display(), "created directory");
    }

    let res_transfer = match spec_options.rule_transfer {
        EnumTransferMode::Copy => copy_file_with_metadata(path_file_src, path_file_dst),
        EnumTransferMode::Move => move_file(path_file_src, path_file_dst),
    };
    res_transfer.map_err(|e| convert_io_error(path_file_dst, e))?;

    info!(
        src = %outcome.path_file_src.display(),
        dst = %path_file_dst.display(),
        "{}",
        spec_options.rule_transfer.verb_past()
    );
    Ok(outcome)
}
