//! Errors raised while obtaining the raw word list.
//!
//! None of these reach callers of [`crate::WordEngine::init`]: a failed source is
//! logged and replaced by the offline fallback list.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read word list from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("word source answered with status {status}")]
    Status { status: u16 },

    #[error("malformed word list: {reason}")]
    Malformed { reason: String },

    #[error("word source unavailable")]
    Unavailable,
}

impl SourceError {
    /// Short tag for log lines
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Io { .. } => "io",
            SourceError::Status { .. } => "status",
            SourceError::Malformed { .. } => "malformed",
            SourceError::Unavailable => "unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = SourceError::Status { status: 404 };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.kind(), "status");

        let err = SourceError::Io {
            path: "words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("words.txt"));
        assert!(msg.contains("missing"));
    }
}
