use crate::fields::OptionField;
use crate::validation::ValidationErrorList;
use error_common::TransportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptionsError {
    /// User input rejected; carries every violation found
    #[error("Simulation options rejected: {0}")]
    Invalid(ValidationErrorList),

    /// The defaults handed to the validator break the contract themselves
    #[error("Default simulation options are invalid: {0}")]
    Precondition(ValidationErrorList),

    #[error("Raw options must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Unknown {field} literal: {value:?}")]
    UnknownLiteral { field: OptionField, value: String },

    #[error("Options payload parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Validator settings file not found: {}", .0.display())]
    SettingsNotFound(PathBuf),

    #[error("Validator settings could not be loaded: {0}")]
    Settings(#[from] figment::Error),
}

impl From<OptionsError> for TransportError {
    fn from(err: OptionsError) -> Self {
        match err {
            OptionsError::Invalid(_) | OptionsError::UnknownLiteral { .. } => {
                TransportError::ValidationError(err.to_string())
            }
            OptionsError::Precondition(_) => TransportError::PreconditionError(err.to_string()),
            OptionsError::NotAnObject(_) | OptionsError::Parse(_) => {
                TransportError::SerializationError(err.to_string())
            }
            OptionsError::Io { path, source } => TransportError::IoError(std::io::Error::new(
                source.kind(),
                format!("{}: {source}", path.display()),
            )),
            OptionsError::SettingsNotFound(_) | OptionsError::Settings(_) => {
                TransportError::ConfigError(err.to_string())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OptionsError>;
