//! Tag-assignment configuration.

use serde::{Deserialize, Serialize};

/// Population ranked for potential-trap and bad-card detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrapPopulation {
    /// The suffix-filtered ranking population (names ending in a digit
    /// excluded), the same universe the spice ranking sees.
    #[default]
    Eligible,
    /// Every aggregated base name.
    Full,
}

/// Configuration for the tag-assignment thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TagConfig {
    /// Fraction of the power ranking awarded spice tags. Default: 0.20.
    pub spice_top_fraction: Option<f64>,
    /// Appearance count below which a spice card is high_spice. Default: 3.
    pub spice_high_below: Option<u32>,
    /// Appearance count up to which a spice card is medium_spice
    /// (inclusive); above it the card is low_spice. Default: 10.
    pub spice_medium_up_to: Option<u32>,
    /// Deck fraction a card must exceed (strictly) to count as commonly
    /// played for trap detection. Default: 0.20.
    pub trap_deck_fraction: Option<f64>,
    /// Number of weakest commonly-played cards tagged potential_trap.
    /// Default: 20.
    pub trap_bottom_count: Option<u32>,
    /// Fraction of the ranking eligible for bad_card. Default: 0.20.
    pub bad_card_fraction: Option<f64>,
    /// Hard cap on bad_card tags per run. Default: 30.
    pub bad_card_cap: Option<u32>,
    /// Population ranked for trap/bad-card detection. Default: eligible.
    pub trap_population: Option<TrapPopulation>,
}

impl TagConfig {
    pub fn effective_spice_top_fraction(&self) -> f64 {
        self.spice_top_fraction.unwrap_or(0.20)
    }

    pub fn effective_spice_high_below(&self) -> u32 {
        self.spice_high_below.unwrap_or(3)
    }

    pub fn effective_spice_medium_up_to(&self) -> u32 {
        self.spice_medium_up_to.unwrap_or(10)
    }

    pub fn effective_trap_deck_fraction(&self) -> f64 {
        self.trap_deck_fraction.unwrap_or(0.20)
    }

    pub fn effective_trap_bottom_count(&self) -> usize {
        self.trap_bottom_count.unwrap_or(20) as usize
    }

    pub fn effective_bad_card_fraction(&self) -> f64 {
        self.bad_card_fraction.unwrap_or(0.20)
    }

    pub fn effective_bad_card_cap(&self) -> usize {
        self.bad_card_cap.unwrap_or(30) as usize
    }

    pub fn effective_trap_population(&self) -> TrapPopulation {
        self.trap_population.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = TagConfig::default();
        assert_eq!(cfg.effective_spice_top_fraction(), 0.20);
        assert_eq!(cfg.effective_spice_high_below(), 3);
        assert_eq!(cfg.effective_spice_medium_up_to(), 10);
        assert_eq!(cfg.effective_trap_bottom_count(), 20);
        assert_eq!(cfg.effective_bad_card_cap(), 30);
        assert_eq!(cfg.effective_trap_population(), TrapPopulation::Eligible);
    }
}
