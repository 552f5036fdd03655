//! Decklens: deck-corpus analytics for one archetype.
//!
//! Ingests deck lists and per-deck match records, computes usage tiers
//! and win-rate-weighted power scores, and maintains the merged card tag
//! catalog.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use decklens_cli::pipeline::{self, RunOptions};
use decklens_core::config::{CliOverrides, ZeroGamesPolicy};
use decklens_core::errors::DecklensErrorCode;

#[derive(Parser, Debug)]
#[command(name = "decklens", version, about = "Deck-corpus usage and power analytics")]
struct Cli {
    /// Directory containing raw deck export files.
    #[arg(long, default_value = "deck_lists")]
    input_dir: PathBuf,

    /// Deck metadata table (CSV with name, URL, and win/loss/draw columns).
    #[arg(long, default_value = "edh16_scrape.csv")]
    metadata: PathBuf,

    /// Output directory for normalized decklists and reports.
    #[arg(long, default_value = "decklens_out")]
    output_dir: PathBuf,

    /// Persisted tag catalog, created on first run.
    #[arg(long, default_value = "tagged_cards.txt")]
    tag_file: PathBuf,

    /// Project root to resolve decklens.toml from.
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Override the win rate that maps to weight zero.
    #[arg(long)]
    center: Option<f64>,

    /// Override the power-law exponent.
    #[arg(long)]
    power: Option<f64>,

    /// Override the zero-games policy (exclude | neutral).
    #[arg(long)]
    zero_games: Option<ZeroGamesPolicy>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    decklens_core::logging::init_tracing("info");

    let options = RunOptions {
        input_dir: cli.input_dir,
        metadata: cli.metadata,
        output_dir: cli.output_dir,
        tag_file: cli.tag_file,
        project_root: cli.project_root,
        overrides: CliOverrides {
            weight_center: cli.center,
            weight_power: cli.power,
            zero_games_policy: cli.zero_games,
        },
    };

    match pipeline::run(&options) {
        Ok(summary) => {
            tracing::info!(
                decks = summary.decks_loaded,
                cards_tagged = summary.cards_tagged,
                tags_appended = summary.tags_appended,
                warnings = summary.warnings,
                "run complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
