use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Unknown day: '{0}'")]
    UnknownDay(String),
    #[error("Ambiguous day: '{key}' matches {matches:?}")]
    AmbiguousDay { key: String, matches: Vec<&'static str> },
    #[error("failed to serialize availability: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("serialized availability is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
