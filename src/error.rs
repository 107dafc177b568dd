//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// A poem used more distinct rhyme endings than there are scheme letters.
    #[error("Rhyme scheme exhausted: more than {limit} distinct rhyme endings in one poem")]
    AlphabetExhausted {
        /// Number of letters available to the labeler.
        limit: usize,
    },

    /// A poem line exceeded the configured maximum length.
    #[error("Line {line} is {length} bytes long, the maximum is {max}")]
    LineTooLong {
        /// 1-indexed line number in the poem.
        line: usize,
        /// Length of the offending line in bytes.
        length: usize,
        /// Configured maximum line length.
        max: usize,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn io_error_keeps_path() {
        let err = Error::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            PathBuf::from("poem.txt"),
        );
        match &err {
            Error::Io { path: Some(p), .. } => assert_eq!(p, &PathBuf::from("poem.txt")),
            _ => panic!("Expected Io error with path"),
        }
        assert!(err.to_string().contains("poem.txt"));
    }

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("bad value", "Use a positive integer");
        match err {
            Error::Config { hint, .. } => assert!(hint.contains("positive")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn alphabet_exhausted_mentions_limit() {
        let err = Error::AlphabetExhausted { limit: 26 };
        assert!(err.to_string().contains("26"));
    }
}
