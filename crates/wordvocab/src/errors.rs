//! # Error Types

/// Errors from wordvocab operations.
#[derive(Debug, thiserror::Error)]
pub enum WordVocabError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// A persisted vocabulary record could not be parsed.
    #[error("malformed record {key:?}: {reason}")]
    MalformedRecord {
        /// The store key of the record.
        key: &'static str,

        /// What was wrong with it.
        reason: String,
    },

    /// An option value was rejected.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error from a key-value store backend.
    #[error("store error: {0}")]
    Store(String),
}

/// Result type for wordvocab operations.
pub type WVResult<T> = core::result::Result<T, WordVocabError>;
