//! Whole-deck normalization pass.

use decklens_core::types::card::CardOccurrence;
use decklens_core::types::collections::FxHashMap;

use super::line::{classify_line, LineClass};

/// Result of normalizing one raw deck export.
#[derive(Debug, Default)]
pub struct NormalizedDeck {
    /// Maindeck occurrences in source order.
    pub cards: Vec<CardOccurrence>,
    pub summary: NormalizeSummary,
}

/// Per-deck normalization diagnostics.
#[derive(Debug, Default, Clone)]
pub struct NormalizeSummary {
    /// Occurrences emitted.
    pub cards_emitted: usize,
    /// Blank, comment, and header lines skipped.
    pub lines_skipped: usize,
    /// Lines the grammar could not parse, verbatim.
    pub unparseable_lines: Vec<String>,
    /// The marker line that terminated processing, if any.
    pub terminated_by: Option<String>,
}

/// Normalize the raw lines of one deck export into maindeck occurrences.
///
/// Processing stops permanently at the first sideboard/stickers marker;
/// lines after it are never parsed. Copy indices continue across repeated
/// count>1 lines of the same name within one deck, while a count of
/// exactly 1 always emits the bare name.
pub fn normalize_deck(raw_text: &str) -> NormalizedDeck {
    let mut out = NormalizedDeck::default();
    // Numbered copies emitted so far, per raw name.
    let mut copy_counts: FxHashMap<String, u32> = FxHashMap::default();

    for raw_line in raw_text.lines() {
        match classify_line(raw_line) {
            LineClass::Skip | LineClass::Header => out.summary.lines_skipped += 1,
            LineClass::SectionBreak => {
                out.summary.terminated_by = Some(raw_line.trim().to_string());
                break;
            }
            LineClass::Unparseable => {
                out.summary
                    .unparseable_lines
                    .push(raw_line.trim().to_string());
            }
            LineClass::Card { count, name } => {
                if count > 1 {
                    let emitted = copy_counts.entry(name.clone()).or_insert(0);
                    for _ in 0..count {
                        *emitted += 1;
                        out.cards.push(CardOccurrence::numbered(name.clone(), *emitted));
                    }
                } else if count == 1 {
                    out.cards.push(CardOccurrence::single(name));
                }
                // A count of 0 emits nothing.
            }
        }
    }

    out.summary.cards_emitted = out.cards.len();
    out
}
