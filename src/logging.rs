//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries answers only.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ConfigError;

/// Install the global subscriber.
///
/// `log_level` takes precedence over `RUST_LOG`; with neither set the
/// filter is `warn`.
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> Result<(), ConfigError> {
    let default_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let filter_str = log_level.unwrap_or(&default_level);

    let env_filter = EnvFilter::try_new(filter_str)
        .map_err(|e| ConfigError::InvalidLogFilter(format!("{filter_str}: {e}")))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && std::env::var_os("NO_COLOR").is_none());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    Ok(())
}
