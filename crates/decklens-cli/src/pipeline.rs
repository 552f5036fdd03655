//! Batch pipeline orchestration.
//!
//! Strict forward flow: corpus → normalize → usage & power aggregation →
//! tag assignment → tag-file merge → reports. The tag file is only
//! rewritten after the full merge computation succeeds, so a failed run
//! never corrupts persisted state.

use std::path::{Path, PathBuf};

use serde::Serialize;

use decklens_analysis::corpus::{self, RawDeck};
use decklens_analysis::normalizer;
use decklens_analysis::power::{aggregate_power, PowerStats, WeightParams};
use decklens_analysis::tags::compute_assignments;
use decklens_analysis::usage::UsageStats;
use decklens_core::config::{CliOverrides, DecklensConfig};
use decklens_core::errors::{PipelineError, RunWarning};
use decklens_core::types::deck::DeckRecord;
use decklens_storage::tagfile;

/// File name of the machine-readable run summary.
pub const SUMMARY_FILE: &str = "run_summary.json";

/// Inputs of one batch run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory containing raw deck export files.
    pub input_dir: PathBuf,
    /// Deck metadata table.
    pub metadata: PathBuf,
    /// Output directory for normalized decklists and reports.
    pub output_dir: PathBuf,
    /// Persisted tag catalog, created on first run.
    pub tag_file: PathBuf,
    /// Project root to resolve `decklens.toml` from.
    pub project_root: PathBuf,
    /// Highest-priority config overrides.
    pub overrides: CliOverrides,
}

/// Counters reported at the end of a run.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub decks_in_metadata: usize,
    pub decks_loaded: usize,
    pub decks_weighted: usize,
    pub decks_excluded: usize,
    pub cards_tracked: usize,
    pub cards_tagged: usize,
    pub tags_appended: usize,
    pub cards_added_to_catalog: usize,
    pub warnings: usize,
}

/// A normalized deck together with its source file name.
struct ProcessedDeck {
    record: DeckRecord,
    file_name: String,
}

/// Run the whole batch pipeline.
pub fn run(options: &RunOptions) -> Result<RunSummary, PipelineError> {
    let config = DecklensConfig::load(&options.project_root, Some(&options.overrides))?;
    let mut warnings: Vec<RunWarning> = Vec::new();
    let mut summary = RunSummary::default();

    // Corpus: metadata table joined to raw deck exports.
    let metadata_report = corpus::read_metadata(&options.metadata)?;
    warnings.extend(metadata_report.warnings);
    summary.decks_in_metadata = metadata_report.data.len();

    let files = corpus::discover_deck_files(
        &options.input_dir,
        config.corpus.effective_deck_file_extension(),
    )?;
    let corpus_report = corpus::load_corpus(metadata_report.data, &files);
    warnings.extend(corpus_report.warnings);

    // Normalization.
    let decks = normalize_corpus(corpus_report.data, &mut warnings);
    summary.decks_loaded = decks.len();
    tracing::info!(decks = decks.len(), "corpus normalized");

    let records: Vec<DeckRecord> = decks.iter().map(|d| d.record.clone()).collect();

    // Aggregation.
    let usage = UsageStats::aggregate(&records);
    let params = WeightParams::from_config(&config.weight);
    let power: PowerStats = aggregate_power(
        &records,
        params,
        config.weight.effective_zero_games_policy(),
    );
    summary.decks_weighted = power.decks_weighted;
    summary.decks_excluded = power.decks_excluded;
    summary.cards_tracked = power.cards.len();
    tracing::info!(
        cards = power.cards.len(),
        weighted = power.decks_weighted,
        excluded = power.decks_excluded,
        "power aggregation complete"
    );

    // Tag assignment and the one persisted-state mutation of the run.
    let assignments = compute_assignments(&usage, &power, &config.tags).into_sorted();
    summary.cards_tagged = assignments.len();

    let existing = tagfile::read_tag_file(&options.tag_file)?;
    let outcome = tagfile::merge_tag_file(&existing, &assignments);
    tagfile::write_tag_file(&options.tag_file, &outcome.content)?;
    summary.tags_appended = outcome.tags_appended;
    summary.cards_added_to_catalog = outcome.cards_added;
    tracing::info!(
        tags_appended = outcome.tags_appended,
        cards_added = outcome.cards_added,
        path = %options.tag_file.display(),
        "tag catalog merged"
    );

    // Reports.
    write_reports(options, &config, &decks, &usage, &power, params)?;

    summary.warnings = warnings.len();
    for warning in &warnings {
        tracing::warn!(
            deck_id = warning.deck_id.as_deref().unwrap_or("-"),
            file = warning.file.as_deref().unwrap_or("-"),
            line = warning.line.as_deref().unwrap_or("-"),
            "{}",
            warning.message
        );
    }

    write_summary(&options.output_dir, &summary)?;

    Ok(summary)
}

/// Normalize every loaded deck, recording per-line problems as warnings.
fn normalize_corpus(raw_decks: Vec<RawDeck>, warnings: &mut Vec<RunWarning>) -> Vec<ProcessedDeck> {
    let mut decks = Vec::with_capacity(raw_decks.len());

    for raw in raw_decks {
        let normalized = normalizer::normalize_deck(&raw.raw_text);
        let file_name = raw
            .source_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&raw.metadata.deck_id)
            .to_string();

        for line in &normalized.summary.unparseable_lines {
            warnings.push(
                RunWarning::new("could not parse deck line")
                    .with_deck(raw.metadata.deck_id.clone())
                    .with_file(file_name.clone())
                    .with_line(line.clone()),
            );
        }
        tracing::debug!(
            deck_id = %raw.metadata.deck_id,
            cards = normalized.summary.cards_emitted,
            terminated_by = normalized.summary.terminated_by.as_deref().unwrap_or("-"),
            "normalized deck"
        );

        decks.push(ProcessedDeck {
            record: DeckRecord {
                deck_id: raw.metadata.deck_id,
                name: raw.metadata.name,
                record: raw.metadata.record,
                cards: normalized.cards,
            },
            file_name,
        });
    }

    decks
}

fn write_reports(
    options: &RunOptions,
    config: &DecklensConfig,
    decks: &[ProcessedDeck],
    usage: &UsageStats,
    power: &PowerStats,
    params: WeightParams,
) -> Result<(), PipelineError> {
    let out = &options.output_dir;

    let named: Vec<(String, &DeckRecord)> = decks
        .iter()
        .map(|d| (d.file_name.clone(), &d.record))
        .collect();
    decklens_reports::decklists::write_decklists(&out.join("processed_decklists"), &named)?;
    decklens_reports::tier_lists::write_tier_lists(out, usage)?;
    decklens_reports::rankings::write_rankings(
        out,
        power,
        config.corpus.effective_min_reliable_appearances(),
    )?;
    decklens_reports::weight_curve::write_curve(out, params)?;
    Ok(())
}

fn write_summary(dir: &Path, summary: &RunSummary) -> Result<(), PipelineError> {
    let rendered = serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string());
    std::fs::create_dir_all(dir).map_err(|source| {
        decklens_core::errors::ExportError::CreateDirFailed {
            path: dir.display().to_string(),
            source,
        }
    })?;
    let path = dir.join(SUMMARY_FILE);
    std::fs::write(&path, rendered).map_err(|source| {
        decklens_core::errors::ExportError::WriteFailed {
            path: path.display().to_string(),
            source,
        }
    })?;
    Ok(())
}
