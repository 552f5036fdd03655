//! Top-level Decklens configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CorpusConfig, TagConfig, WeightConfig, ZeroGamesPolicy};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DECKLENS_*`)
/// 3. Project config (`decklens.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DecklensConfig {
    pub corpus: CorpusConfig,
    pub weight: WeightConfig,
    pub tags: TagConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub weight_center: Option<f64>,
    pub weight_power: Option<f64>,
    pub zero_games_policy: Option<ZeroGamesPolicy>,
}

impl DecklensConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("decklens.toml");
        if project_config_path.exists() {
            config = Self::from_toml_file(&project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DecklensConfig) -> Result<(), ConfigError> {
        if let Some(center) = config.weight.center {
            if !(0.0..=1.0).contains(&center) {
                return Err(ConfigError::ValidationFailed {
                    field: "weight.center".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(power) = config.weight.power {
            if power <= 0.0 || !power.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "weight.power".to_string(),
                    message: "must be a finite value greater than 0".to_string(),
                });
            }
        }
        for (field, value) in [
            ("tags.spice_top_fraction", config.tags.spice_top_fraction),
            ("tags.trap_deck_fraction", config.tags.trap_deck_fraction),
            ("tags.bad_card_fraction", config.tags.bad_card_fraction),
        ] {
            if let Some(fraction) = value {
                if !(0.0..=1.0).contains(&fraction) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `DECKLENS_WEIGHT_CENTER`, `DECKLENS_TAGS_TRAP_BOTTOM_COUNT`, etc.
    fn apply_env_overrides(config: &mut DecklensConfig) {
        if let Ok(val) = std::env::var("DECKLENS_WEIGHT_CENTER") {
            if let Ok(v) = val.parse::<f64>() {
                config.weight.center = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECKLENS_WEIGHT_POWER") {
            if let Ok(v) = val.parse::<f64>() {
                config.weight.power = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECKLENS_WEIGHT_ZERO_GAMES_POLICY") {
            if let Ok(v) = val.parse::<ZeroGamesPolicy>() {
                config.weight.zero_games_policy = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECKLENS_TAGS_SPICE_TOP_FRACTION") {
            if let Ok(v) = val.parse::<f64>() {
                config.tags.spice_top_fraction = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECKLENS_TAGS_TRAP_BOTTOM_COUNT") {
            if let Ok(v) = val.parse::<u32>() {
                config.tags.trap_bottom_count = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECKLENS_CORPUS_MIN_RELIABLE_APPEARANCES") {
            if let Ok(v) = val.parse::<u32>() {
                config.corpus.min_reliable_appearances = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut DecklensConfig, cli: &CliOverrides) {
        if let Some(v) = cli.weight_center {
            config.weight.center = Some(v);
        }
        if let Some(v) = cli.weight_power {
            config.weight.power = Some(v);
        }
        if let Some(v) = cli.zero_games_policy {
            config.weight.zero_games_policy = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
