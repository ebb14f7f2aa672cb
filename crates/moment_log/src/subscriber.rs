//! Global tracing subscriber installation.

use tracing_subscriber::{EnvFilter, fmt};

use crate::spec::{LoggingError, SpecLoggingConfig};

/// Install the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over [`SpecLoggingConfig::level`]. Returns
/// [`LoggingError::SubscriberInit`] when a subscriber is already installed.
pub fn init_tracing(spec_config: &SpecLoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&spec_config.level))
        .map_err(|e| LoggingError::SubscriberInit(e.to_string()))?;

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(spec_config.if_with_target)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| LoggingError::SubscriberInit(e.to_string()))
}
