//! Average-power rankings over the aggregated card map.
//!
//! Ties always break by card name so slicing a ranking is deterministic.

use std::cmp::Ordering;

use decklens_core::config::TrapPopulation;
use decklens_core::types::card::ends_in_digit;
use decklens_core::types::stats::CardStat;

use crate::power::PowerStats;

/// One ranked entry: base name plus its aggregated stat.
pub type RankedCard<'a> = (&'a str, &'a CardStat);

/// Cards ranked by average power, descending. Names ending in a digit
/// (numbered duplicate slots) are excluded when `exclude_digit_names`.
pub fn ranked_descending(power: &PowerStats, exclude_digit_names: bool) -> Vec<RankedCard<'_>> {
    let mut ranked = collect(power, exclude_digit_names);
    ranked.sort_by(|a, b| compare_average(b, a).then_with(|| a.0.cmp(b.0)));
    ranked
}

/// Cards ranked by average power, ascending (weakest first).
pub fn ranked_ascending(power: &PowerStats, exclude_digit_names: bool) -> Vec<RankedCard<'_>> {
    let mut ranked = collect(power, exclude_digit_names);
    ranked.sort_by(|a, b| compare_average(a, b).then_with(|| a.0.cmp(b.0)));
    ranked
}

/// Whether a trap/bad-card population setting excludes digit-suffixed names.
pub fn excludes_digit_names(population: TrapPopulation) -> bool {
    matches!(population, TrapPopulation::Eligible)
}

fn collect(power: &PowerStats, exclude_digit_names: bool) -> Vec<RankedCard<'_>> {
    power
        .cards
        .iter()
        .filter(|(name, _)| !exclude_digit_names || !ends_in_digit(name))
        .map(|(name, stat)| (name.as_str(), stat))
        .collect()
}

fn compare_average(a: &RankedCard<'_>, b: &RankedCard<'_>) -> Ordering {
    a.1.average_power()
        .partial_cmp(&b.1.average_power())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use decklens_core::types::collections::FxHashMap;

    fn stats(entries: &[(&str, u32, f64)]) -> PowerStats {
        let mut cards: FxHashMap<String, CardStat> = FxHashMap::default();
        for (name, count, sum) in entries {
            cards.insert(
                name.to_string(),
                CardStat {
                    appearance_count: *count,
                    power_sum: *sum,
                },
            );
        }
        PowerStats {
            cards,
            decks_weighted: 0,
            decks_excluded: 0,
        }
    }

    #[test]
    fn test_descending_order_with_name_tie_break() {
        let power = stats(&[("B", 1, 0.5), ("A", 1, 0.5), ("C", 1, 0.9)]);
        let ranked = ranked_descending(&power, false);
        let names: Vec<&str> = ranked.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_ascending_is_reverse_of_descending_for_distinct_values() {
        let power = stats(&[("A", 1, 0.1), ("B", 1, 0.5), ("C", 1, 0.9)]);
        let asc: Vec<&str> = ranked_ascending(&power, false).iter().map(|(n, _)| *n).collect();
        assert_eq!(asc, ["A", "B", "C"]);
    }

    #[test]
    fn test_digit_suffixed_names_excluded() {
        let power = stats(&[("Mountain4", 1, 0.9), ("Sol Ring", 1, 0.5)]);
        let ranked = ranked_descending(&power, true);
        let names: Vec<&str> = ranked.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["Sol Ring"]);
    }
}
