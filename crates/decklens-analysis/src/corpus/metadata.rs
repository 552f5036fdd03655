//! Deck metadata table parsing.
//!
//! Headered, comma-delimited, double-quoted fields allowed. Column lookup
//! is case-insensitive with candidate fallbacks so exports from different
//! scrapers load unchanged.

use std::path::Path;

use decklens_core::errors::{CorpusError, PipelineReport, RunWarning};
use decklens_core::types::deck::MatchRecord;

use super::types::DeckMetadata;

/// Candidate names for the deck-name column, in preference order.
const NAME_COLUMNS: &[&str] = &["name", "title", "deck", "deckname", "commander"];

/// Candidate names for the deck-URL column, in preference order.
const URL_COLUMNS: &[&str] = &["url", "weblink"];

/// Read and parse the metadata table from disk.
pub fn read_metadata(path: &Path) -> Result<PipelineReport<Vec<DeckMetadata>>, CorpusError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::MetadataNotFound {
                path: path.display().to_string(),
            }
        } else {
            CorpusError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    })?;
    parse_metadata(&content, path)
}

/// Parse the metadata table content.
///
/// A missing URL column is fatal (nothing can be joined to deck files);
/// every per-row problem is a warning and the row is skipped or zeroed.
pub fn parse_metadata(
    content: &str,
    source: &Path,
) -> Result<PipelineReport<Vec<DeckMetadata>>, CorpusError> {
    let path = source.display().to_string();
    let mut lines = content.lines();
    let header_line = lines.next().filter(|l| !l.trim().is_empty()).ok_or(
        CorpusError::EmptyMetadata { path: path.clone() },
    )?;

    let headers: Vec<String> = split_record(header_line)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let url_idx =
        find_column(&headers, URL_COLUMNS).ok_or_else(|| CorpusError::MissingColumn {
            path: path.clone(),
            column: URL_COLUMNS.join("/"),
        })?;
    let name_idx = find_column(&headers, NAME_COLUMNS);
    let wins_idx = find_column(&headers, &["wins"]);
    let losses_idx = find_column(&headers, &["losses"]);
    let draws_idx = find_column(&headers, &["draws"]);

    let mut report = PipelineReport::new(Vec::new());

    if wins_idx.is_none() || losses_idx.is_none() {
        report.add_warning(
            RunWarning::new("no wins/losses columns; all records treated as zero games")
                .with_file(path.clone()),
        );
    }

    for (row_number, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_record(line);

        let url = fields.get(url_idx).map(String::as_str).unwrap_or("").trim();
        let deck_id = match extract_deck_id(url) {
            Some(id) => id.to_string(),
            None => {
                report.add_warning(
                    RunWarning::new(format!("could not derive deck id from URL '{url}'"))
                        .with_file(path.clone())
                        .with_line(line.to_string()),
                );
                continue;
            }
        };

        let name = name_idx
            .and_then(|idx| fields.get(idx))
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Deck_{row_number}"));

        let mut parse_count = |idx: Option<usize>, column: &str| -> u32 {
            let raw = idx.and_then(|i| fields.get(i)).map(String::as_str).unwrap_or("");
            match parse_game_count(raw) {
                Some(v) => v,
                None => {
                    report.add_warning(
                        RunWarning::new(format!("unparseable {column} value '{raw}', treated as 0"))
                            .with_deck(deck_id.clone())
                            .with_file(path.clone()),
                    );
                    0
                }
            }
        };

        let record = MatchRecord::new(
            parse_count(wins_idx, "wins"),
            parse_count(losses_idx, "losses"),
            parse_count(draws_idx, "draws"),
        );

        report.data.push(DeckMetadata {
            deck_id,
            name,
            url: url.to_string(),
            record,
        });
    }

    Ok(report)
}

/// Stable deck key: the final path segment of the deck URL.
/// `None` when the URL has no path separator or ends in one.
pub fn extract_deck_id(url: &str) -> Option<&str> {
    let (_, segment) = url.trim_end_matches('/').rsplit_once('/')?;
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Parse a wins/losses/draws cell. Empty cells and the "Unknown" sentinel
/// are 0; anything else must be a plain non-negative integer.
fn parse_game_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
        return Some(0);
    }
    trimmed.parse::<u32>().ok()
}

/// Case-insensitive column lookup with candidate fallbacks.
fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for candidate in candidates {
        if let Some(idx) = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(candidate))
        {
            return Some(idx);
        }
    }
    None
}

/// Split one delimited record, honoring double-quoted fields with `""`
/// escapes.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
