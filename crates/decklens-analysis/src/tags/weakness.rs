//! Potential traps and bad cards: the weak end of the power ranking.

use decklens_core::config::TagConfig;
use decklens_core::types::collections::FxHashSet;

use crate::power::PowerStats;

use super::ranking;

/// Potential traps: among cards appearing in strictly more than
/// `trap_deck_fraction` of decks (by count, not tier logic), the bottom
/// `trap_bottom_count` by average power: commonly played but
/// statistically weak.
pub fn trap_assignments(
    power: &PowerStats,
    total_decks: usize,
    config: &TagConfig,
) -> Vec<String> {
    let exclude_digits = ranking::excludes_digit_names(config.effective_trap_population());
    let threshold = total_decks as f64 * config.effective_trap_deck_fraction();

    let mut common: Vec<_> = ranking::ranked_ascending(power, exclude_digits)
        .into_iter()
        .filter(|(_, stat)| (stat.appearance_count as f64) > threshold)
        .collect();
    common.truncate(config.effective_trap_bottom_count());
    common.into_iter().map(|(name, _)| name.to_string()).collect()
}

/// Bad cards: the weakest `min(bad_card_fraction of the ranking,
/// bad_card_cap)` cards that are not already potential traps.
pub fn bad_card_assignments(
    power: &PowerStats,
    traps: &FxHashSet<String>,
    config: &TagConfig,
) -> Vec<String> {
    let exclude_digits = ranking::excludes_digit_names(config.effective_trap_population());
    let ranked = ranking::ranked_ascending(power, exclude_digits);

    let take = ((ranked.len() as f64 * config.effective_bad_card_fraction()) as usize)
        .min(config.effective_bad_card_cap());

    ranked
        .into_iter()
        .filter(|(name, _)| !traps.contains(*name))
        .take(take)
        .map(|(name, _)| name.to_string())
        .collect()
}
