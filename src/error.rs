use thiserror::Error;

/// Main error type for the guess engine
///
/// A guess that matches nothing is not an error; it comes back as an
/// unmatched [`ResolutionResult`](crate::ResolutionResult).
#[derive(Error, Debug)]
pub enum EngineError {
    /// Candidate with an empty or whitespace-only title
    #[error("Candidate at rank {rank} has no title")]
    MissingTitle { rank: u32 },

    /// Candidate with rank 0
    #[error("Candidate '{title}' has invalid rank 0")]
    InvalidRank { title: String },

    /// Two candidates sharing a rank in one list
    #[error("Duplicate rank {rank} in candidate list")]
    DuplicateRank { rank: u32 },

    /// Category not present in the candidate source
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Candidate source errors
    #[error("Candidate source '{source_name}' error: {message}")]
    Source { source_name: String, message: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Whether retrying the failed operation could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, EngineError::Source { .. } | EngineError::Io(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EngineError>;
