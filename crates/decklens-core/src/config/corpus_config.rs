//! Corpus ingestion configuration.

use serde::{Deserialize, Serialize};

/// Configuration for corpus loading and export thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorpusConfig {
    /// Minimum appearances for the reliable-average CSV export. Default: 3.
    pub min_reliable_appearances: Option<u32>,
    /// Extension of raw deck export files. Default: "txt".
    pub deck_file_extension: Option<String>,
}

impl CorpusConfig {
    pub fn effective_min_reliable_appearances(&self) -> u32 {
        self.min_reliable_appearances.unwrap_or(3)
    }

    pub fn effective_deck_file_extension(&self) -> &str {
        self.deck_file_extension.as_deref().unwrap_or("txt")
    }
}
