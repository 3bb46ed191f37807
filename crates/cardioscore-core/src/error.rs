//! Error types for cardioscore

/// Result type alias using cardioscore's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for cardioscore operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input field was absent from the request
    #[error("Missing field: '{0}'")]
    MissingField(&'static str),

    /// Model artifact is malformed or unreadable
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Artifact schema disagrees with the compiled-in feature contract
    #[error("schema error: {0}")]
    Schema(String),

    /// Inference failed inside the classifier
    #[error("inference error: {0}")]
    Inference(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }
}
