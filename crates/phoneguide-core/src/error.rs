use thiserror::Error;

/// Top-level error type for the PhoneGuide system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define their
/// own error types and implement `From<SubsystemError> for GuideError` so
/// that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GuideError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for GuideError {
    fn from(err: toml::de::Error) -> Self {
        GuideError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GuideError {
    fn from(err: toml::ser::Error) -> Self {
        GuideError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for GuideError {
    fn from(err: serde_json::Error) -> Self {
        GuideError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for PhoneGuide operations.
pub type Result<T> = std::result::Result<T, GuideError>;
