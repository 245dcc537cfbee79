use error_common::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Tracing initialization failed: {0}")]
    TracingError(String),
}

impl From<TelemetryError> for TransportError {
    fn from(err: TelemetryError) -> Self {
        TransportError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_config_error() {
        let err = TransportError::from(TelemetryError::InvalidLevel("loud".to_string()));
        assert!(matches!(err, TransportError::ConfigError(ref msg) if msg.contains("loud")));
        assert_eq!(err.code(), "CONFIG_2001");
    }
}
