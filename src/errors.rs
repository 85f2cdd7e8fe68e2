use thiserror::Error;

/// Error type that captures common bookkeeping failures.
#[derive(Debug, Error)]
pub enum BooksError {
    /// Input rejected before any state change was applied.
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("index {index} is out of range for {collection} ({len} entries)")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl BooksError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True when the failure came from the persistence layer rather than
    /// from the caller's input.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Serde(_))
    }
}
