//! Power-weight configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy for decks with zero recorded games.
///
/// The two behaviors are mutually exclusive and always explicit; the
/// engine never mixes them within a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroGamesPolicy {
    /// Exclude the deck from power weighting entirely.
    #[default]
    Exclude,
    /// Include the deck at the neutral win rate 0.25.
    Neutral,
}

impl ZeroGamesPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Neutral => "neutral",
        }
    }
}

impl FromStr for ZeroGamesPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exclude" => Ok(Self::Exclude),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!(
                "unknown zero-games policy '{other}' (expected 'exclude' or 'neutral')"
            )),
        }
    }
}

/// Configuration for the win-rate weighting transform.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeightConfig {
    /// Win rate that maps to weight zero. Default: 0.25
    /// (break-even for a 4-player pod).
    pub center: Option<f64>,
    /// Power-law exponent. Default: 2.0.
    pub power: Option<f64>,
    /// Handling of decks with zero recorded games. Default: exclude.
    pub zero_games_policy: Option<ZeroGamesPolicy>,
}

impl WeightConfig {
    /// Returns the effective weight-zero win rate, defaulting to 0.25.
    pub fn effective_center(&self) -> f64 {
        self.center.unwrap_or(0.25)
    }

    /// Returns the effective power-law exponent, defaulting to 2.0.
    pub fn effective_power(&self) -> f64 {
        self.power.unwrap_or(2.0)
    }

    /// Returns the effective zero-games policy, defaulting to exclude.
    pub fn effective_zero_games_policy(&self) -> ZeroGamesPolicy {
        self.zero_games_policy.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = WeightConfig::default();
        assert_eq!(cfg.effective_center(), 0.25);
        assert_eq!(cfg.effective_power(), 2.0);
        assert_eq!(
            cfg.effective_zero_games_policy(),
            ZeroGamesPolicy::Exclude
        );
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "neutral".parse::<ZeroGamesPolicy>().unwrap(),
            ZeroGamesPolicy::Neutral
        );
        assert_eq!(
            "EXCLUDE".parse::<ZeroGamesPolicy>().unwrap(),
            ZeroGamesPolicy::Exclude
        );
        assert!("sometimes".parse::<ZeroGamesPolicy>().is_err());
    }
}
