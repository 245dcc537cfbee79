use thiserror::Error;

/// Workspace-wide error enum
#[derive(Error, Debug)]
pub enum TransportError {
    /// User supplied simulation options were rejected
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A caller broke a documented precondition (e.g. invalid defaults)
    #[error("Precondition violated: {0}")]
    PreconditionError(String),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed payloads
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TransportError {
    /// Stable code for API responses and log correlation
    pub fn code(&self) -> &'static str {
        use crate::codes;

        match self {
            TransportError::ValidationError(_) => codes::validation::INVALID_INPUT,
            TransportError::PreconditionError(_) => codes::internal::PRECONDITION_VIOLATION,
            TransportError::ConfigError(_) => codes::configuration::LOAD_FAILED,
            TransportError::SerializationError(_) => codes::validation::INVALID_FORMAT,
            TransportError::IoError(_) | TransportError::Other(_) => codes::internal::UNEXPECTED,
        }
    }

    /// Whether the caller can fix this by changing its input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TransportError::ValidationError(_) | TransportError::SerializationError(_)
        )
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::SerializationError(err.to_string())
    }
}

/// Result type alias for Transport Engine operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Logging function for errors
pub fn log_error(context: &str, error: &TransportError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "Transport engine error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            TransportError::ValidationError("bad".into()).code(),
            "VALIDATION_1000"
        );
        assert_eq!(
            TransportError::PreconditionError("defaults".into()).code(),
            "INTERNAL_9001"
        );
    }

    #[test]
    fn test_json_errors_are_user_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TransportError::from(err);
        assert!(err.is_user_error());
        assert!(matches!(err, TransportError::SerializationError(_)));
    }

    #[test]
    fn test_precondition_is_not_user_error() {
        assert!(!TransportError::PreconditionError("x".into()).is_user_error());
    }
}
