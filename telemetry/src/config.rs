// Logger configuration
use crate::error::{Result, TelemetryError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub log_level: String,
    /// One JSON object per line instead of human-readable output
    pub json: bool,
    pub show_target: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
            show_target: false,
        }
    }
}

impl LoggerConfig {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_target(mut self, show_target: bool) -> Self {
        self.show_target = show_target;
        self
    }

    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidLevel`] for anything but
    /// off/error/warn/info/debug/trace.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| TelemetryError::InvalidLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let config = LoggerConfig::default();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::INFO);
        assert!(!config.json);
    }

    #[test]
    fn test_level_parsing() {
        let config = LoggerConfig::default().with_level("debug");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::DEBUG);

        let config = LoggerConfig::default().with_level("chatty");
        assert!(matches!(
            config.level_filter(),
            Err(TelemetryError::InvalidLevel(level)) if level == "chatty"
        ));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert!(config.json);
        assert_eq!(config.log_level, "info");
    }
}
