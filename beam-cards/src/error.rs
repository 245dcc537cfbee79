use error_common::TransportError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("{card} value {value} does not fit an 8-column field")]
    ValueTooWide { card: &'static str, value: String },
}

impl From<CardError> for TransportError {
    fn from(err: CardError) -> Self {
        TransportError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
