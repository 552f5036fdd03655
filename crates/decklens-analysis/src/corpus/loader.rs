//! Corpus assembly: metadata rows joined to their raw deck exports.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use decklens_core::errors::{CorpusError, PipelineReport, RunWarning};

use super::types::DeckMetadata;

/// A deck's metadata joined to its raw export text.
#[derive(Debug, Clone)]
pub struct RawDeck {
    pub metadata: DeckMetadata,
    pub source_file: PathBuf,
    pub raw_text: String,
}

/// Discover deck export files under `input_dir`, sorted for deterministic
/// processing order.
pub fn discover_deck_files(
    input_dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, CorpusError> {
    if !input_dir.is_dir() {
        return Err(CorpusError::DeckDirNotFound {
            path: input_dir.display().to_string(),
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(CorpusError::EmptyCorpus {
            path: input_dir.display().to_string(),
        });
    }
    Ok(files)
}

/// Find the export file whose name contains the deck id as a substring.
pub fn find_deck_file<'a>(files: &'a [PathBuf], deck_id: &str) -> Option<&'a Path> {
    files
        .iter()
        .find(|path| {
            path.file_name()
                .and_then(OsStr::to_str)
                .is_some_and(|name| name.contains(deck_id))
        })
        .map(PathBuf::as_path)
}

/// Join each metadata row to its export file and read the raw text.
///
/// Rows without a matching or readable file are skipped with a warning;
/// the rest of the corpus proceeds.
pub fn load_corpus(
    metadata: Vec<DeckMetadata>,
    files: &[PathBuf],
) -> PipelineReport<Vec<RawDeck>> {
    let mut report = PipelineReport::new(Vec::new());

    for deck in metadata {
        let Some(path) = find_deck_file(files, &deck.deck_id) else {
            report.add_warning(
                RunWarning::new("no deck list file found for deck id")
                    .with_deck(deck.deck_id.clone()),
            );
            continue;
        };

        match std::fs::read_to_string(path) {
            Ok(raw_text) => {
                tracing::debug!(deck_id = %deck.deck_id, path = %path.display(), "loaded deck export");
                report.data.push(RawDeck {
                    metadata: deck,
                    source_file: path.to_path_buf(),
                    raw_text,
                });
            }
            Err(e) => {
                report.add_warning(
                    RunWarning::new(format!("failed to read deck export: {e}"))
                        .with_deck(deck.deck_id.clone())
                        .with_file(path.display().to_string()),
                );
            }
        }
    }

    report
}
