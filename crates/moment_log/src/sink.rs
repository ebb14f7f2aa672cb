//! Persistent status log: one line per row plus a summary block, appended per run.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use moment_io_fs::{ReportTransfer, SpecTransferRecord};

use crate::spec::LoggingError;

fn write_status_line(buf: &mut String, status: &str, record: &SpecTransferRecord) {
    let _ = writeln!(
        buf,
        "Status: {status} - Row: {} - File: {}",
        record.row_id,
        record.path_file_src.display()
    );
}

/// Render one run: skipped rows, then succeeded rows, then the summary block.
pub fn format_status_log(report: &ReportTransfer) -> String {
    let mut buf = String::new();
    for record in &report.skipped {
        write_status_line(&mut buf, "Skipped", record);
    }
    for record in &report.succeeded {
        write_status_line(&mut buf, "Succeeded", record);
    }
    let _ = write!(
        buf,
        "\nSkipped: {}\nSucceeded: {}\nTotal: {}\n\n",
        report.cnt_skipped(),
        report.cnt_succeeded(),
        report.cnt_total()
    );
    buf
}

/// Append the run to `path_file_log`, creating the file when absent.
pub fn append_status_log<P>(path_file_log: P, report: &ReportTransfer) -> Result<(), LoggingError>
where
    P: AsRef<Path>,
{
    let path_file_log = path_file_log.as_ref();
    let to_error = |e: std::io::Error| LoggingError::StatusLogWrite {
        path: path_file_log.to_path_buf(),
        message: e.to_string(),
    };

    let mut file_log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path_file_log)
        .map_err(to_error)?;
    file_log
        .write_all(format_status_log(report).as_bytes())
        .map_err(to_error)?;
    tracing::debug!(path = %path_file_log.display(), "status log appended");
    Ok(())
}
