//! Normalized per-deck card-list files: one display name per line, no
//! header, one file per deck named after its source export file.

use std::path::Path;

use decklens_core::errors::ExportError;
use decklens_core::types::deck::DeckRecord;

/// Render one normalized decklist.
pub fn render_decklist(deck: &DeckRecord) -> String {
    let mut out = String::new();
    for card in &deck.cards {
        out.push_str(&card.display_name());
        out.push('\n');
    }
    out
}

/// Write each deck's normalized list into `dir`. `decks` pairs the
/// output file name (taken from the source export) with the deck.
pub fn write_decklists(dir: &Path, decks: &[(String, &DeckRecord)]) -> Result<(), ExportError> {
    for (file_name, deck) in decks {
        crate::write_artifact(dir, file_name, &render_decklist(deck))?;
    }
    tracing::info!(count = decks.len(), dir = %dir.display(), "wrote normalized decklists");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use decklens_core::types::card::CardOccurrence;
    use decklens_core::types::deck::MatchRecord;

    fn deck() -> DeckRecord {
        DeckRecord {
            deck_id: "abc".to_string(),
            name: "test".to_string(),
            record: MatchRecord::default(),
            cards: vec![
                CardOccurrence::single("Sol Ring"),
                CardOccurrence::numbered("Mountain", 1),
                CardOccurrence::numbered("Mountain", 2),
            ],
        }
    }

    #[test]
    fn test_render_one_line_per_occurrence() {
        assert_eq!(render_decklist(&deck()), "Sol Ring\nMountain1\nMountain2\n");
    }

    #[test]
    fn test_write_named_after_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let deck = deck();
        write_decklists(dir.path(), &[("001_abc.txt".to_string(), &deck)]).unwrap();
        let content = std::fs::read_to_string(dir.path().join("001_abc.txt")).unwrap();
        assert_eq!(content, "Sol Ring\nMountain1\nMountain2\n");
    }
}
