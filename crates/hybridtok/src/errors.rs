//! # Error Types

/// Errors from hybridtok operations.
#[derive(Debug, thiserror::Error)]
pub enum HybridTokError {
    /// A persisted vocabulary document is missing fields or is inconsistent.
    #[error("malformed vocabulary document: {0}")]
    MalformedPersistence(String),

    /// A codec operation was called before a vocabulary was built or loaded.
    #[error("vocabulary not built; build or load a vocabulary first")]
    VocabularyNotBuilt,

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl HybridTokError {
    /// Build a [`HybridTokError::MalformedPersistence`] from any message.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedPersistence(msg.into())
    }
}

/// Result type for hybridtok operations.
pub type HTResult<T> = core::result::Result<T, HybridTokError>;
