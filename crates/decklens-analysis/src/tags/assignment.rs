//! Assembly of all newly computed tags for one run.

use decklens_core::config::TagConfig;
use decklens_core::types::collections::{FxHashMap, FxHashSet};
use decklens_core::types::tags::{Tag, TagAssignment};

use crate::power::PowerStats;
use crate::usage::UsageStats;

use super::{spice, weakness};

/// All assignments of one run, keyed by card name.
#[derive(Debug, Default)]
pub struct TagAssignments {
    map: FxHashMap<String, TagAssignment>,
}

impl TagAssignments {
    fn add(&mut self, card_name: &str, quantity: u32, tag: Tag) {
        self.map
            .entry(card_name.to_string())
            .or_insert_with(|| TagAssignment::new(card_name, quantity))
            .push_tag(tag);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, card_name: &str) -> Option<&TagAssignment> {
        self.map.get(card_name)
    }

    /// Assignments sorted by card name, for deterministic output.
    pub fn into_sorted(self) -> Vec<TagAssignment> {
        let mut assignments: Vec<TagAssignment> = self.map.into_values().collect();
        assignments.sort_by(|a, b| a.card_name.cmp(&b.card_name));
        assignments
    }
}

/// Compute every tag assignment for the run.
///
/// The vocabularies overlap deliberately: a card can be core by usage and
/// low_spice by power at the same time. Within one card, each tag appears
/// at most once.
pub fn compute_assignments(
    usage: &UsageStats,
    power: &PowerStats,
    config: &TagConfig,
) -> TagAssignments {
    let mut out = TagAssignments::default();

    // Usage tags: exclusive, highest tier wins.
    for base_name in usage.appearance_counts.keys() {
        if let Some(tier) = usage.highest_tier(base_name) {
            out.add(base_name, usage.display_quantity(base_name), tier.tag());
        }
    }

    // Spice: the strong end of the power ranking.
    for (name, tag) in spice::spice_assignments(power, config) {
        out.add(&name, usage.display_quantity(&name), tag);
    }

    // Potential traps, then bad cards excluding them.
    let traps = weakness::trap_assignments(power, usage.total_decks, config);
    let trap_set: FxHashSet<String> = traps.iter().cloned().collect();
    for name in &traps {
        out.add(name, usage.display_quantity(name), Tag::PotentialTrap);
    }
    for name in weakness::bad_card_assignments(power, &trap_set, config) {
        out.add(&name, usage.display_quantity(&name), Tag::BadCard);
    }

    tracing::info!(
        cards_tagged = out.len(),
        traps = traps.len(),
        "computed tag assignments"
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use decklens_core::types::card::CardOccurrence;
    use decklens_core::types::deck::{DeckRecord, MatchRecord};
    use decklens_core::config::ZeroGamesPolicy;

    use crate::power::{aggregate_power, WeightParams};

    fn deck(id: &str, record: MatchRecord, names: &[&str]) -> DeckRecord {
        DeckRecord {
            deck_id: id.to_string(),
            name: id.to_string(),
            record,
            cards: names
                .iter()
                .map(|n| CardOccurrence::single(*n))
                .collect(),
        }
    }

    #[test]
    fn test_staple_gets_core_tag_with_quantity() {
        let decks = vec![
            deck("a", MatchRecord::new(5, 0, 0), &["Sol Ring", "Rare Gem"]),
            deck("b", MatchRecord::new(3, 2, 0), &["Sol Ring"]),
            deck("c", MatchRecord::new(0, 5, 0), &["Sol Ring"]),
        ];
        let usage = UsageStats::aggregate(&decks);
        let power = aggregate_power(&decks, WeightParams::default(), ZeroGamesPolicy::Exclude);
        let assignments = compute_assignments(&usage, &power, &TagConfig::default());

        let sol_ring = assignments.get("Sol Ring").unwrap();
        assert!(sol_ring.tags.contains(&Tag::Core));
        assert!(!sol_ring.tags.contains(&Tag::Essential));
        assert_eq!(sol_ring.quantity, 1);
    }

    #[test]
    fn test_tags_overlap_across_vocabularies() {
        // One deck, one card: Sol Ring is core by usage, gets no spice tag
        // (the top slice of a 1-card ranking is empty, floor(1*0.2)=0),
        // and still lands in the trap bottom slice; the vocabularies are
        // independent.
        let decks = vec![deck("a", MatchRecord::new(5, 0, 0), &["Sol Ring"])];
        let usage = UsageStats::aggregate(&decks);
        let power = aggregate_power(&decks, WeightParams::default(), ZeroGamesPolicy::Exclude);
        let assignments = compute_assignments(&usage, &power, &TagConfig::default());
        assert_eq!(
            assignments.get("Sol Ring").unwrap().tags.as_slice(),
            &[Tag::Core, Tag::PotentialTrap]
        );
    }

    #[test]
    fn test_into_sorted_orders_by_name() {
        let mut assignments = TagAssignments::default();
        assignments.add("Zephyr", 1, Tag::Core);
        assignments.add("Anvil", 1, Tag::Core);
        let sorted = assignments.into_sorted();
        assert_eq!(sorted[0].card_name, "Anvil");
        assert_eq!(sorted[1].card_name, "Zephyr");
    }

    #[test]
    fn test_duplicate_tag_not_added_twice() {
        let mut assignments = TagAssignments::default();
        assignments.add("Sol Ring", 1, Tag::Core);
        assignments.add("Sol Ring", 1, Tag::Core);
        assert_eq!(assignments.get("Sol Ring").unwrap().tags.len(), 1);
    }
}
