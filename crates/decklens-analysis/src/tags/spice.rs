//! Spice tags for the top slice of the power ranking.

use decklens_core::config::TagConfig;
use decklens_core::types::tags::Tag;

use crate::power::PowerStats;

use super::ranking;

/// Spice assignments: the top `spice_top_fraction` of the eligible
/// ranking (names ending in a digit excluded), bucketed by how many
/// decks actually play the card.
pub fn spice_assignments(power: &PowerStats, config: &TagConfig) -> Vec<(String, Tag)> {
    let ranked = ranking::ranked_descending(power, true);
    let cutoff = ((ranked.len() as f64 * config.effective_spice_top_fraction()) as usize)
        .min(ranked.len());

    ranked[..cutoff]
        .iter()
        .map(|(name, stat)| {
            let tag = if stat.appearance_count < config.effective_spice_high_below() {
                Tag::HighSpice
            } else if stat.appearance_count <= config.effective_spice_medium_up_to() {
                Tag::MediumSpice
            } else {
                Tag::LowSpice
            };
            (name.to_string(), tag)
        })
        .collect()
}
