//! Corpus ingestion: the deck metadata table joined to raw deck exports.

pub mod loader;
pub mod metadata;
pub mod types;

pub use loader::{discover_deck_files, find_deck_file, load_corpus, RawDeck};
pub use metadata::{extract_deck_id, parse_metadata, read_metadata};
pub use types::DeckMetadata;
