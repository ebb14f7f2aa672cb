//! `moment_log` v1:
//! Logging for manifest transfer runs.
//!
//! - `spec`       : logging config and errors
//! - `subscriber` : global tracing subscriber install
//! - `sink`       : persistent per-run status log

pub mod sink;
pub mod spec;
pub mod subscriber;

pub use sink::{append_status_log, format_status_log};
pub use spec::{C_STATUS_LOG_FILE_DEFAULT, LoggingError, SpecLoggingConfig};
pub use subscriber::init_tracing;
