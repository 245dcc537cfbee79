use crate::config::LoggerConfig;
use crate::error::{Result, TelemetryError};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Filter from `RUST_LOG` when set, otherwise from the configured level
///
/// # Errors
///
/// Fails when the configured level is not a valid level name.
pub fn build_filter(config: &LoggerConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = config.level_filter()?;
    Ok(EnvFilter::default().add_directive(level.into()))
}

/// Install the global subscriber. Output goes to stderr so stdout stays
/// free for command results.
///
/// # Errors
///
/// Fails on an invalid level or when a global subscriber is already set.
pub fn init_logging(config: &LoggerConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_timer(ChronoUtc::rfc_3339()),
            )
            .try_init()
    };

    installed.map_err(|e| TelemetryError::TracingError(e.to_string()))?;
    tracing::debug!(level = %config.log_level, json = config.json, "Logging initialized");
    Ok(())
}
