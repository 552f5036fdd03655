//! The per-card power fold over the corpus.

use decklens_core::config::ZeroGamesPolicy;
use decklens_core::types::collections::FxHashMap;
use decklens_core::types::deck::DeckRecord;
use decklens_core::types::stats::CardStat;

use super::weight::{WeightParams, NEUTRAL_WIN_RATE};

/// Outcome of the power aggregation pass.
#[derive(Debug, Default)]
pub struct PowerStats {
    /// Per base name statistics. No zero-appearance entries exist.
    pub cards: FxHashMap<String, CardStat>,
    /// Decks that contributed weight.
    pub decks_weighted: usize,
    /// Decks excluded for having no recorded games.
    pub decks_excluded: usize,
}

impl PowerStats {
    pub fn stat(&self, base_name: &str) -> Option<&CardStat> {
        self.cards.get(base_name)
    }
}

/// Fold the corpus into per-card power statistics.
///
/// Each distinct base name in a deck receives the deck's weight exactly
/// once regardless of copy count, so the fold is a commutative sum and
/// deck iteration order cannot affect the result beyond floating-point
/// summation order.
pub fn aggregate_power(
    decks: &[DeckRecord],
    params: WeightParams,
    policy: ZeroGamesPolicy,
) -> PowerStats {
    let mut stats = PowerStats::default();

    for deck in decks {
        let win_rate = match deck.record.win_rate() {
            Some(rate) => rate,
            None => match policy {
                ZeroGamesPolicy::Exclude => {
                    tracing::warn!(
                        deck_id = %deck.deck_id,
                        "deck has no recorded games, excluded from power weighting"
                    );
                    stats.decks_excluded += 1;
                    continue;
                }
                ZeroGamesPolicy::Neutral => NEUTRAL_WIN_RATE,
            },
        };

        let weight = params.weight(win_rate);
        tracing::debug!(
            deck_id = %deck.deck_id,
            win_rate,
            weight,
            "weighted deck"
        );

        for base_name in deck.distinct_base_names() {
            stats
                .cards
                .entry(base_name.to_string())
                .or_default()
                .record_deck(weight);
        }
        stats.decks_weighted += 1;
    }

    stats
}
