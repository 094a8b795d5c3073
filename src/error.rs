//! Application error types.
//!
//! Loading and configuration failures are reported through [`Error`].
//! Reference-level failures never abort a lookup; they live in
//! [`crate::reference::error`].

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
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// File parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Canonical text is structurally invalid (wrong book count, gaps, duplicates)
    #[error("Invalid canonical text: {0}")]
    Source(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Create a canonical-text validation error
    pub fn source_text(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_carries_hint() {
        let err = Error::config("Bible file not found", "Set SCRIPREF_BIBLE_PATH");
        assert_eq!(
            err.to_string(),
            "Configuration error: Bible file not found. Set SCRIPREF_BIBLE_PATH"
        );
    }

    #[test]
    fn io_error_keeps_path() {
        let err = Error::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            std::path::PathBuf::from("/tmp/bible.xml"),
        );
        match err {
            Error::Io { path: Some(p), .. } => assert!(p.ends_with("bible.xml")),
            _ => panic!("Expected Io error with path"),
        }
    }

    #[test]
    fn source_error_names_the_problem() {
        let err = Error::source_text("expected 66 books, found 1");
        assert!(matches!(err, Error::Source(_)));
        assert_eq!(err.to_string(), "Invalid canonical text: expected 66 books, found 1");
    }
}
