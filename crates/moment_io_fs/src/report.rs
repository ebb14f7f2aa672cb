//! Transfer report models and append-only report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::spec::TransferRowError;

/// One reported row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTransferRecord {
    /// Manifest row id.
    pub row_id: String,
    /// Resolved source file path.
    pub path_file_src: PathBuf,
    /// Reason the row was skipped; `None` for succeeded rows.
    pub error: Option<TransferRowError>,
}

/// Outcome of one `transfer_manifest` run.
#[derive(Debug, Default, Clone)]
pub struct ReportTransfer {
    /// Rows transferred (or that would be, in dry-run), in run order.
    pub succeeded: Vec<SpecTransferRecord>,
    /// Rows skipped, in run order.
    pub skipped: Vec<SpecTransferRecord>,
}

impl ReportTransfer {
    pub fn cnt_succeeded(&self) -> usize {
        self.succeeded.len()
    }

    pub fn cnt_skipped(&self) -> usize {
        self.skipped.len()
    }

    pub fn cnt_total(&self) -> usize {
        self.succeeded.len() + self.skipped.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_succeeded".to_string(), self.cnt_succeeded() as u64);
        dict_counts.insert("cnt_skipped".to_string(), self.cnt_skipped() as u64);
        dict_counts.insert("cnt_total".to_string(), self.cnt_total() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} succeeded={} skipped={} total={}",
            dict_counts["cnt_succeeded"], dict_counts["cnt_skipped"], dict_counts["cnt_total"]
        )
    }
}

impl fmt::Display for ReportTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[TRANSFER]"))
    }
}

/// Append-only accumulator owned by one run.
#[derive(Debug, Default)]
pub struct ReportTransferBuilder {
    succeeded: Vec<SpecTransferRecord>,
    skipped: Vec<SpecTransferRecord>,
}

impl ReportTransferBuilder {
    /// Record a transferred row.
    pub fn add_succeeded(&mut self, row_id: impl Into<String>, path_file_src: PathBuf) {
        self.succeeded.push(SpecTransferRecord {
            row_id: row_id.into(),
            path_file_src,
            error: None,
        });
    }

    /// Record a skipped row with its reason.
    pub fn add_skipped(
        &mut self,
        row_id: impl Into<String>,
        path_file_src: PathBuf,
        error: TransferRowError,
    ) {
        self.skipped.push(SpecTransferRecord {
            row_id: row_id.into(),
            path_file_src,
            error: Some(error),
        });
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportTransfer {
        ReportTransfer {
            succeeded: self.succeeded,
            skipped: self.skipped,
        }
    }
}
