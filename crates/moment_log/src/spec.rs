//! Logging configuration and error types.

use std::fmt;
use std::path::PathBuf;

/// Status log file name, relative to the working directory of the run.
pub const C_STATUS_LOG_FILE_DEFAULT: &str = "log.txt";

/// Default filter directive when `RUST_LOG` is unset.
const C_LEVEL_DEFAULT: &str = "warn";
/// Filter directive used for verbose runs when `RUST_LOG` is unset.
const C_LEVEL_VERBOSE: &str = "debug";

/// Tracing subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLoggingConfig {
    /// `EnvFilter` directive applied when `RUST_LOG` is not set.
    pub level: String,
    /// Include the event target (module path) in each line.
    pub if_with_target: bool,
}

impl SpecLoggingConfig {
    /// Config for the CLI verbosity switch.
    pub fn from_verbose(if_verbose: bool) -> Self {
        Self {
            level: if if_verbose {
                C_LEVEL_VERBOSE.to_string()
            } else {
                C_LEVEL_DEFAULT.to_string()
            },
            ..Self::default()
        }
    }
}

impl Default for SpecLoggingConfig {
    fn default() -> Self {
        Self {
            level: C_LEVEL_DEFAULT.to_string(),
            if_with_target: false,
        }
    }
}

#[derive(Debug)]
pub enum LoggingError {
    /// A global subscriber is already installed, or the filter is invalid.
    SubscriberInit(String),
    /// Status log could not be opened or written.
    StatusLogWrite {
        /// Status log path.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubscriberInit(msg) => {
                write!(f, "Failed to install tracing subscriber: {msg}")
            }
            Self::StatusLogWrite { path, message } => {
                write!(f, "Failed to write status log {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for LoggingError {}

#[cfg(test)]
mod tests {
    use super::SpecLoggingConfig;

    #[test]
    fn verbose_switch_selects_level() {
        assert_eq!(SpecLoggingConfig::from_verbose(false).level, "warn");
        assert_eq!(SpecLoggingConfig::from_verbose(true).level, "debug");
        assert_eq!(SpecLoggingConfig::default(), SpecLoggingConfig::from_verbose(false));
    }
}
