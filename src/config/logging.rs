//! Logging setup
//!
//! Events go to stderr so command output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT_LOGGING: Once = Once::new();

/// Install the global subscriber once
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used as the filter.
pub fn init_logging(default_level: &str) {
    INIT_LOGGING.call_once(|| {
        let filter = match std::env::var("RUST_LOG") {
            Ok(value) if !value.trim().is_empty() => EnvFilter::from_default_env(),
            _ => EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        // A subscriber installed by an embedding program takes precedence.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();

        tracing::debug!("fintrack logging initialized");
    });
}
