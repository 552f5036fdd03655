//! Corpus-wide usage aggregation and percentile tiers.

pub mod tiers;

pub use tiers::UsageTier;

use decklens_core::types::collections::FxHashMap;
use decklens_core::types::deck::DeckRecord;

/// Corpus-wide usage statistics, keyed by base card name.
#[derive(Debug, Default)]
pub struct UsageStats {
    /// Number of decks processed.
    pub total_decks: usize,
    /// Per base name: number of distinct decks containing the card at
    /// least once (copies within one deck never add more than 1).
    pub appearance_counts: FxHashMap<String, u32>,
    /// Per base name: maximum per-deck copy count observed anywhere in
    /// the corpus.
    pub max_copies: FxHashMap<String, u32>,
}

impl UsageStats {
    /// Aggregate the whole corpus. An empty corpus is a defined empty
    /// result, not an error.
    pub fn aggregate(decks: &[DeckRecord]) -> Self {
        let mut stats = Self {
            total_decks: decks.len(),
            ..Self::default()
        };

        for deck in decks {
            for (base_name, copies) in deck.copy_counts() {
                *stats
                    .appearance_counts
                    .entry(base_name.to_string())
                    .or_insert(0) += 1;
                let max = stats.max_copies.entry(base_name.to_string()).or_insert(0);
                *max = (*max).max(copies);
            }
        }

        stats
    }

    /// Decks containing the card; 0 for unknown names.
    pub fn appearance_count(&self, base_name: &str) -> u32 {
        self.appearance_counts.get(base_name).copied().unwrap_or(0)
    }

    /// Display quantity for the card: the maximum per-deck copy count,
    /// defaulting to 1 for unknown names.
    pub fn display_quantity(&self, base_name: &str) -> u32 {
        self.max_copies.get(base_name).copied().unwrap_or(1).max(1)
    }

    /// Every tier the card qualifies for, highest first.
    pub fn tiers_for(&self, base_name: &str) -> Vec<UsageTier> {
        let count = self.appearance_count(base_name);
        UsageTier::ALL
            .iter()
            .copied()
            .filter(|tier| count >= tier.threshold(self.total_decks))
            .collect()
    }

    /// The single highest tier, for exclusive labeling.
    pub fn highest_tier(&self, base_name: &str) -> Option<UsageTier> {
        self.tiers_for(base_name).into_iter().next()
    }

    /// Sorted member names of a tier.
    pub fn tier_members(&self, tier: UsageTier) -> Vec<&str> {
        let threshold = tier.threshold(self.total_decks);
        let mut members: Vec<&str> = self
            .appearance_counts
            .iter()
            .filter(|(_, &count)| count >= threshold)
            .map(|(name, _)| name.as_str())
            .collect();
        members.sort_unstable();
        members
    }
}
