//! Error types for comment-ranker

use thiserror::Error;

use crate::types::CommentId;

/// Main error type for comment-ranker
#[derive(Debug, Error)]
pub enum RankerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Malformed comment record
    #[error("Validation error: {0}")]
    Validation(String),

    /// Two records share the same id
    #[error("Duplicate comment id: {0}")]
    DuplicateComment(CommentId),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    /// Group info carries no representative comments
    #[error("Group info has no repness entries")]
    MissingRepness,

    /// A representative comment has no group vote totals
    #[error("No group votes for comment {0}")]
    MissingGroupVotes(CommentId),

    /// Embed configuration error
    #[error("Embed error: {0}")]
    Embed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown export format
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<RankerError>,
    },
}

impl RankerError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        RankerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for RankerError {
    fn from(err: toml::de::Error) -> Self {
        RankerError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for RankerError {
    fn from(err: toml::ser::Error) -> Self {
        RankerError::Toml(err.to_string())
    }
}

/// Result type alias for comment-ranker
pub type Result<T> = std::result::Result<T, RankerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RankerError::CommentNotFound(CommentId(42));
        assert_eq!(err.to_string(), "Comment not found: 42");
    }

    #[test]
    fn test_error_with_context() {
        let err = RankerError::Validation("A is not a number".to_string());
        let err = err.with_context("Failed to load comments.json");
        assert!(err.to_string().contains("Failed to load comments.json"));
        assert!(err.to_string().contains("A is not a number"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RankerError = io_err.into();
        assert!(matches!(err, RankerError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: RankerError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, RankerError::Toml(_)));
    }
}
