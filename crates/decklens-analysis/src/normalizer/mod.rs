//! Deck-export normalization: raw export text to ordered card occurrences.
//!
//! The entry point of the pipeline: classify each line, emit occurrences
//! for the maindeck, and stop permanently at the first sideboard or
//! stickers marker.

pub mod line;
pub mod pass;

pub use line::{classify_line, LineClass};
pub use pass::{normalize_deck, NormalizeSummary, NormalizedDeck};
