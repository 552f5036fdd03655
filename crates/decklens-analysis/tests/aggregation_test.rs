//! Integration tests: normalize → aggregate → assign over in-memory decks.

use decklens_analysis::normalizer::normalize_deck;
use decklens_analysis::power::{aggregate_power, WeightParams};
use decklens_analysis::tags::compute_assignments;
use decklens_analysis::usage::{UsageStats, UsageTier};
use decklens_core::config::{TagConfig, ZeroGamesPolicy};
use decklens_core::types::deck::{DeckRecord, MatchRecord};
use decklens_core::types::tags::Tag;

fn deck_from_export(deck_id: &str, record: MatchRecord, export: &str) -> DeckRecord {
    let normalized = normalize_deck(export);
    DeckRecord {
        deck_id: deck_id.to_string(),
        name: deck_id.to_string(),
        record,
        cards: normalized.cards,
    }
}

/// Three decks all running Sol Ring, records 5-0, 3-2, and 0-5.
fn staple_corpus() -> Vec<DeckRecord> {
    vec![
        deck_from_export("a", MatchRecord::new(5, 0, 0), "1 Sol Ring\n"),
        deck_from_export("b", MatchRecord::new(3, 2, 0), "1 Sol Ring\n"),
        deck_from_export("c", MatchRecord::new(0, 5, 0), "1 Sol Ring\n"),
    ]
}

#[test]
fn test_staple_statistics_across_corpus() {
    let decks = staple_corpus();
    let usage = UsageStats::aggregate(&decks);
    assert_eq!(usage.appearance_count("Sol Ring"), 3);
    assert_eq!(usage.highest_tier("Sol Ring"), Some(UsageTier::Full));

    let params = WeightParams::default();
    let power = aggregate_power(&decks, params, ZeroGamesPolicy::Exclude);
    let stat = power.stat("Sol Ring").unwrap();
    let expected = params.weight(1.0) + params.weight(0.6) + params.weight(0.0);
    assert!((stat.power_sum - expected).abs() < 1e-12);
    assert_eq!(stat.average_power(), stat.power_sum / 3.0);
}

#[test]
fn test_commander_export_normalizes_to_103_occurrences() {
    let mut export = String::from("Commander\n1 Winota, Joiner of Forces (IKO) 216\n\n");
    for i in 0..98 {
        export.push_str(&format!("1 Filler Card {}\n", (b'A' + (i % 26)) as char));
    }
    export.push_str("4 Forest (IKO) 274\nSIDEBOARD:\n1 Shock\n");

    let normalized = normalize_deck(&export);
    // 1 commander card + 98 singletons + 4 numbered Forests.
    assert_eq!(normalized.cards.len(), 103);
    let names: Vec<String> = normalized.cards.iter().map(|c| c.display_name()).collect();
    for forest in ["Forest1", "Forest2", "Forest3", "Forest4"] {
        assert!(names.contains(&forest.to_string()), "missing {forest}");
    }
    assert!(!names.contains(&"Shock".to_string()));
}

#[test]
fn test_assignments_from_mixed_corpus() {
    // Sol Ring everywhere; Rare Gem only in the strongest deck.
    let decks = vec![
        deck_from_export("a", MatchRecord::new(5, 0, 0), "1 Sol Ring\n1 Rare Gem\n"),
        deck_from_export("b", MatchRecord::new(3, 2, 0), "1 Sol Ring\n"),
        deck_from_export("c", MatchRecord::new(0, 5, 0), "1 Sol Ring\n"),
        deck_from_export("d", MatchRecord::new(2, 3, 0), "1 Sol Ring\n"),
        deck_from_export("e", MatchRecord::new(1, 4, 0), "1 Sol Ring\n"),
    ]; // 5 decks
    let usage = UsageStats::aggregate(&decks);
    let power = aggregate_power(&decks, WeightParams::default(), ZeroGamesPolicy::Exclude);
    let assignments = compute_assignments(&usage, &power, &TagConfig::default());

    let sol_ring = assignments.get("Sol Ring").unwrap();
    assert!(sol_ring.tags.contains(&Tag::Core));

    // Rare Gem: 1 of 5 decks, no usage tier, and with only two ranked
    // cards the spice top slice is empty.
    let rare_gem = assignments.get("Rare Gem");
    if let Some(assignment) = rare_gem {
        assert!(!assignment.tags.contains(&Tag::Core));
        assert!(!assignment.tags.contains(&Tag::HighSpice));
    }
}

#[test]
fn test_aggregation_order_independence() {
    let mut decks = staple_corpus();
    let usage_forward = UsageStats::aggregate(&decks);
    let power_forward =
        aggregate_power(&decks, WeightParams::default(), ZeroGamesPolicy::Exclude);

    decks.reverse();
    let usage_backward = UsageStats::aggregate(&decks);
    let power_backward =
        aggregate_power(&decks, WeightParams::default(), ZeroGamesPolicy::Exclude);

    assert_eq!(
        usage_forward.appearance_count("Sol Ring"),
        usage_backward.appearance_count("Sol Ring")
    );
    let f = power_forward.stat("Sol Ring").unwrap();
    let b = power_backward.stat("Sol Ring").unwrap();
    assert!((f.power_sum - b.power_sum).abs() < 1e-12);
}
