//! Configuration system for Decklens.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod corpus_config;
pub mod decklens_config;
pub mod tag_config;
pub mod weight_config;

pub use corpus_config::CorpusConfig;
pub use decklens_config::{CliOverrides, DecklensConfig};
pub use tag_config::{TagConfig, TrapPopulation};
pub use weight_config::{WeightConfig, ZeroGamesPolicy};
