//! Deck records: one submitted card list plus its tournament result.

use serde::{Deserialize, Serialize};

use super::card::CardOccurrence;
use super::collections::{FxHashMap, FxHashSet};

/// Win/loss/draw record for one deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchRecord {
    pub fn new(wins: u32, losses: u32, draws: u32) -> Self {
        Self {
            wins,
            losses,
            draws,
        }
    }

    /// Total games played.
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Win rate with a draw worth a quarter of a win.
    ///
    /// `None` when the deck has no recorded games; callers decide between
    /// excluding the deck and assigning the neutral rate.
    pub fn win_rate(&self) -> Option<f64> {
        let total = self.total_games();
        if total == 0 {
            return None;
        }
        Some((self.wins as f64 + 0.25 * self.draws as f64) / total as f64)
    }
}

/// One deck's identity, match record, and normalized maindeck.
///
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct DeckRecord {
    /// Stable key derived from the deck's source URL (final path segment).
    pub deck_id: String,
    /// Human-readable deck or pilot name from the metadata table.
    pub name: String,
    pub record: MatchRecord,
    /// Maindeck occurrences in source order.
    pub cards: Vec<CardOccurrence>,
}

impl DeckRecord {
    /// Distinct base names in this deck, each present once regardless of
    /// how many copies the deck runs.
    pub fn distinct_base_names(&self) -> FxHashSet<&str> {
        self.cards.iter().map(|c| c.base_name.as_str()).collect()
    }

    /// Per-base-name copy counts within this deck.
    pub fn copy_counts(&self) -> FxHashMap<&str, u32> {
        let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.base_name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
