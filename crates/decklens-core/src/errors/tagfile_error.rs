//! Tag-file persistence errors.
//!
//! Unparseable lines inside the file are never errors; they pass through
//! merges verbatim. Only I/O around the full-read/atomic-rewrite cycle
//! can fail.

use super::error_code::{self, DecklensErrorCode};

/// Errors that can occur while reading or rewriting the tag catalog.
#[derive(Debug, thiserror::Error)]
pub enum TagFileError {
    #[error("Failed to read tag file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rewrite tag file {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DecklensErrorCode for TagFileError {
    fn error_code(&self) -> &'static str {
        error_code::TAGFILE_ERROR
    }
}
