//! Report export errors.

use super::error_code::{self, DecklensErrorCode};

/// Errors that can occur while writing report artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DecklensErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
