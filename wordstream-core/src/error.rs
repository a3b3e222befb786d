//! Error types for the word stream pipeline

use thiserror::Error;

/// Errors raised while pulling, segmenting or tagging text
#[derive(Error, Debug)]
pub enum StreamError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream sentence source failed
    #[error("upstream source error: {reason}")]
    Upstream {
        /// The reason reported by the source
        reason: String,
    },

    /// The segmentation service failed
    #[error("segmentation failed: {reason}")]
    Segmentation {
        /// The reason reported by the segmenter
        reason: String,
    },

    /// The tagging service failed
    #[error("tagging failed: {reason}")]
    Tagging {
        /// The reason reported by the tagger
        reason: String,
    },

    /// Tagger output cannot be paired with the segmented words
    #[error("tagger returned {tags} tags for {words} words")]
    TagCountMismatch {
        /// Number of segmented words
        words: usize,
        /// Number of tags returned
        tags: usize,
    },

    /// Invalid lexicon contents
    #[error("invalid lexicon: {0}")]
    Lexicon(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for StreamError {
    fn from(err: toml::de::Error) -> Self {
        StreamError::Config(err.to_string())
    }
}

/// Result type for word stream operations
pub type Result<T> = std::result::Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_count_mismatch_display() {
        let err = StreamError::TagCountMismatch { words: 3, tags: 2 };
        assert_eq!(err.to_string(), "tagger returned 2 tags for 3 words");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StreamError = io_error.into();
        assert!(matches!(err, StreamError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: StreamError = parse_err.into();
        assert!(err.to_string().starts_with("invalid configuration:"));
    }
}
