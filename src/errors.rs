//! Error types for codemix operations.
//!
//! The evaluator itself is pure computation, so the taxonomy is narrow:
//! precondition violations (empty corpus, empty utterance), loader format
//! errors, configuration errors and I/O failures at the edges.
//!
//! # Error Codes
//!
//! - E001: I/O errors
//! - E010: Corpus format errors
//! - E020: Configuration errors
//! - E030-E031: Evaluator precondition violations
//!
//! # Example
//!
//! ```rust
//! use codemix::errors::CodemixError;
//!
//! let err = CodemixError::parse("missing tag field", Some("train.conll".into()), 3);
//! assert!(err.is_user_fixable());
//! assert_eq!(err.code(), "E010");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, CodemixError>;

#[derive(Debug, Error)]
pub enum CodemixError {
    /// A corpus with no utterances was handed to the evaluator.
    #[error("cannot evaluate an empty corpus")]
    EmptyCorpus,

    /// An utterance with no tokens was handed to the evaluator.
    #[error("utterance {index} is empty")]
    EmptyUtterance { index: usize },

    /// Malformed line in a tagged corpus file.
    #[error("{}line {line}: {message}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        line: usize,
        message: String,
    },

    /// Invalid or unreadable configuration.
    #[error("{}{message}", display_path(.path))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!("{}: ", p.display()))
        .unwrap_or_default()
}

impl CodemixError {
    pub fn parse(message: impl Into<String>, path: Option<PathBuf>, line: usize) -> Self {
        Self::Parse {
            path,
            line,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            path,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E001",
            Self::Parse { .. } => "E010",
            Self::Config { .. } => "E020",
            Self::EmptyCorpus => "E030",
            Self::EmptyUtterance { .. } => "E031",
        }
    }

    /// Whether the user can fix this error by changing their input.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }

    /// Finds the innermost `CodemixError` under any context layers.
    pub fn find_in(err: &anyhow::Error) -> Option<&Self> {
        err.chain().find_map(|cause| cause.downcast_ref::<Self>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_includes_path_and_line() {
        let err = CodemixError::parse("missing tag field", Some("dev.conll".into()), 7);
        assert_eq!(err.to_string(), "dev.conll: line 7: missing tag field");
    }

    #[test]
    fn test_parse_error_without_path() {
        let err = CodemixError::parse("missing tag field", None, 2);
        assert_eq!(err.to_string(), "line 2: missing tag field");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CodemixError::EmptyCorpus.code(), "E030");
        assert_eq!(CodemixError::EmptyUtterance { index: 0 }.code(), "E031");
        assert_eq!(CodemixError::config("bad", None).code(), "E020");
    }

    #[test]
    fn test_io_errors_are_not_user_fixable() {
        let err = CodemixError::io(
            "missing.conll",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_user_fixable());
        assert!(CodemixError::EmptyCorpus.is_user_fixable());
    }

    #[test]
    fn test_find_in_context_chain() {
        let err = anyhow::Error::new(CodemixError::EmptyCorpus).context("Failed to score dev.conll");
        assert_eq!(CodemixError::find_in(&err).map(CodemixError::code), Some("E030"));
        assert!(CodemixError::find_in(&anyhow::anyhow!("plain")).is_none());
    }
}
