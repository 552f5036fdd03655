//! # decklens-reports
//!
//! Human- and spreadsheet-facing artifacts derived from the aggregation
//! results: ranked CSV exports, normalized per-deck card lists, per-tier
//! membership lists, and the plaintext weight-curve diagnostic.

pub mod decklists;
pub mod rankings;
pub mod tier_lists;
pub mod weight_curve;

use std::path::Path;

use decklens_core::errors::ExportError;

/// Write one report artifact under the output directory.
pub(crate) fn write_artifact(dir: &Path, name: &str, content: &str) -> Result<(), ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDirFailed {
        path: dir.display().to_string(),
        source,
    })?;
    let path = dir.join(name);
    std::fs::write(&path, content).map_err(|source| ExportError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote report artifact");
    Ok(())
}
