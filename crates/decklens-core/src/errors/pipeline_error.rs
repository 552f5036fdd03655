//! Pipeline errors and non-fatal warning collection.

use super::error_code::DecklensErrorCode;
use super::{ConfigError, CorpusError, ExportError, TagFileError};

/// Errors that abort a batch run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Tag file error: {0}")]
    TagFile(#[from] TagFileError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl DecklensErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Corpus(e) => e.error_code(),
            Self::TagFile(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }
}

/// A recovered per-record failure, retained so the run summary can report
/// every skip with enough context to be diagnosable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunWarning {
    /// Deck the record belonged to, when known.
    pub deck_id: Option<String>,
    /// Source file, when known.
    pub file: Option<String>,
    /// Offending line content, when applicable.
    pub line: Option<String>,
    pub message: String,
}

impl RunWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            deck_id: None,
            file: None,
            line: None,
            message: message.into(),
        }
    }

    pub fn with_deck(mut self, deck_id: impl Into<String>) -> Self {
        self.deck_id = Some(deck_id.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }
}

/// Outcome of a phase that completes despite per-record failures.
/// Allows partial results to be produced from the valid subset of the
/// corpus.
#[derive(Debug, Default)]
pub struct PipelineReport<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal warnings collected during the phase.
    pub warnings: Vec<RunWarning>,
}

impl<T: Default> PipelineReport<T> {
    /// Create a new warning-free report.
    pub fn new(data: T) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    /// Record a non-fatal warning.
    pub fn add_warning(&mut self, warning: RunWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
