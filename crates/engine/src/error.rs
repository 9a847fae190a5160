use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while validating questionnaire input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Answer vector has the wrong number of items
    #[error("Invalid answer count: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// An answer is outside the {1, 2, 3} domain
    #[error("Invalid answer at index {index}: {value} (expected 1, 2 or 3)")]
    InvalidValue { index: usize, value: i64 },

    /// Stored summary or line key could not be parsed
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl EngineError {
    /// Create an invalid key error
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into())
    }
}
