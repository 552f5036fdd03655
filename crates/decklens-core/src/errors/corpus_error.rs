//! Corpus ingestion errors.
//!
//! These are the input-missing failures: they halt the run before any
//! persisted state is touched. Per-record problems are warnings, not
//! errors; see `PipelineReport`.

use super::error_code::{self, DecklensErrorCode};

/// Errors that can occur while loading the deck corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Deck metadata table not found: {path}")]
    MetadataNotFound { path: String },

    #[error("Deck metadata table {path} is empty")]
    EmptyMetadata { path: String },

    #[error("Deck metadata table {path} has no {column} column")]
    MissingColumn { path: String, column: String },

    #[error("Deck list directory not found: {path}")]
    DeckDirNotFound { path: String },

    #[error("No deck list files found under {path}")]
    EmptyCorpus { path: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DecklensErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        error_code::CORPUS_ERROR
    }
}
