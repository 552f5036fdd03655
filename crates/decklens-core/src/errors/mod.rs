//! Error handling for Decklens.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod corpus_error;
pub mod error_code;
pub mod export_error;
pub mod pipeline_error;
pub mod tagfile_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use error_code::DecklensErrorCode;
pub use export_error::ExportError;
pub use pipeline_error::{PipelineError, PipelineReport, RunWarning};
pub use tagfile_error::TagFileError;
