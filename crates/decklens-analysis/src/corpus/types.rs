//! Corpus input types.

use decklens_core::types::deck::MatchRecord;

/// One row of the deck metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckMetadata {
    /// Stable key: the final path segment of the deck URL.
    pub deck_id: String,
    /// Deck or pilot name; synthesized when the table has no name column.
    pub name: String,
    /// Source URL the deck id was derived from.
    pub url: String,
    pub record: MatchRecord,
}
