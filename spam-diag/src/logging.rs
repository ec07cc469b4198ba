//! Tracing setup shared by the diagnostic binaries
//!
//! Reports go to stdout; log events go to stderr so the two never mix.

use crate::error::{DiagError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| DiagError::Config(format!("Invalid log level '{}': {}", default_level, e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| DiagError::Config(format!("Failed to set tracing subscriber: {}", e)))
}
