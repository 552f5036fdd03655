//! The add-only, idempotent tag-file merge.
//!
//! Existing tags and quantities always survive; tags are only appended,
//! never replaced or removed. Lines that defeat the parse pass through
//! verbatim. Blank lines are preserved as separators. After a merge every
//! parseable card name appears exactly once.

use decklens_core::types::collections::FxHashMap;
use decklens_core::types::tags::TagAssignment;

use super::line::{format_tag_line, parse_tag_line, TagLine};

/// One entry of the merged file.
#[derive(Debug)]
enum FileEntry {
    Parsed(TagLine),
    /// A line the grammar could not parse, kept unchanged.
    Verbatim(String),
    /// A blank separator line.
    Blank,
}

/// Result of a merge: the new file content plus change counters.
#[derive(Debug)]
pub struct MergeOutcome {
    /// The full rewritten file content.
    pub content: String,
    /// Tags appended to cards already in the file.
    pub tags_appended: usize,
    /// Cards added as new lines.
    pub cards_added: usize,
    /// Lines preserved verbatim because they did not parse.
    pub verbatim_lines: usize,
}

/// Merge newly computed assignments into the existing file content.
///
/// Running the merge twice with identical assignments yields identical
/// content: appending skips tags that are already present, and cards
/// added by the first pass are found by the second.
pub fn merge_tag_file(existing: &str, assignments: &[TagAssignment]) -> MergeOutcome {
    let mut entries: Vec<FileEntry> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut verbatim_lines = 0usize;

    for raw in existing.lines() {
        if raw.trim().is_empty() {
            entries.push(FileEntry::Blank);
            continue;
        }
        match parse_tag_line(raw) {
            Some(line) => match index.get(&line.card_name) {
                Some(&first_idx) => {
                    // Duplicate card line: fold its tags into the first
                    // occurrence so the rewrite keeps each card once.
                    if let FileEntry::Parsed(first) = &mut entries[first_idx] {
                        for tag in &line.tags {
                            first.add_tag(tag);
                        }
                    }
                }
                None => {
                    index.insert(line.card_name.clone(), entries.len());
                    entries.push(FileEntry::Parsed(line));
                }
            },
            None => {
                tracing::warn!(line = raw, "unparseable tag line preserved verbatim");
                verbatim_lines += 1;
                entries.push(FileEntry::Verbatim(raw.to_string()));
            }
        }
    }

    let mut tags_appended = 0usize;
    let mut cards_added = 0usize;

    for assignment in assignments {
        match index.get(&assignment.card_name) {
            Some(&idx) => {
                if let FileEntry::Parsed(line) = &mut entries[idx] {
                    for tag in &assignment.tags {
                        if line.add_tag(tag.token()) {
                            tags_appended += 1;
                        }
                    }
                }
            }
            None => {
                let line = TagLine {
                    quantity: Some(assignment.quantity),
                    card_name: assignment.card_name.clone(),
                    tags: assignment.tags.iter().map(|t| t.token().to_string()).collect(),
                };
                index.insert(assignment.card_name.clone(), entries.len());
                entries.push(FileEntry::Parsed(line));
                cards_added += 1;
            }
        }
    }

    let mut content = String::new();
    for entry in &entries {
        match entry {
            FileEntry::Blank => content.push('\n'),
            FileEntry::Verbatim(raw) => {
                content.push_str(raw);
                content.push('\n');
            }
            FileEntry::Parsed(line) => {
                content.push_str(&format_tag_line(line));
                content.push('\n');
            }
        }
    }

    MergeOutcome {
        content,
        tags_appended,
        cards_added,
        verbatim_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decklens_core::types::tags::Tag;
    use smallvec::smallvec;

    fn assignment(name: &str, quantity: u32, tags: &[Tag]) -> TagAssignment {
        TagAssignment {
            card_name: name.to_string(),
            quantity,
            tags: tags.iter().copied().collect(),
        }
    }

    #[test]
    fn test_new_file_contains_exactly_the_assignments() {
        let outcome = merge_tag_file("", &[assignment("Sol Ring", 1, &[Tag::Core])]);
        assert_eq!(outcome.content, "1 Sol Ring #1_core\n");
        assert_eq!(outcome.cards_added, 1);
        assert_eq!(outcome.tags_appended, 0);
    }

    #[test]
    fn test_existing_card_gains_tag_keeps_quantity_and_tags() {
        let existing = "4 Mountain #3_common\n";
        let outcome = merge_tag_file(existing, &[assignment("Mountain", 1, &[Tag::BadCard])]);
        assert_eq!(outcome.content, "4 Mountain #3_common #bad_card\n");
        assert_eq!(outcome.tags_appended, 1);
        assert_eq!(outcome.cards_added, 0);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let assignments = vec![
            assignment("Sol Ring", 1, &[Tag::Core, Tag::LowSpice]),
            assignment("Rare Gem", 1, &[Tag::HighSpice]),
        ];
        let first = merge_tag_file("Mountain #3_common\n\n# legacy note\n", &assignments);
        let second = merge_tag_file(&first.content, &assignments);
        assert_eq!(first.content, second.content);
        assert_eq!(second.tags_appended, 0);
        assert_eq!(second.cards_added, 0);
    }

    #[test]
    fn test_no_existing_tag_is_ever_lost() {
        let existing = "1 Sol Ring #1_core #custom_note\n2 Skullclamp #high_spice\n";
        let outcome = merge_tag_file(
            existing,
            &[assignment("Sol Ring", 1, &[Tag::LowSpice])],
        );
        let merged = outcome.content;
        for token in ["#1_core", "#custom_note", "#high_spice"] {
            assert!(merged.contains(token), "lost {token}");
        }
        assert!(merged.contains("2 Skullclamp"));
    }

    #[test]
    fn test_malformed_lines_preserved_verbatim() {
        let existing = "#orphan_tag only\n1 Sol Ring #1_core\n";
        let outcome = merge_tag_file(existing, &[]);
        assert!(outcome.content.starts_with("#orphan_tag only\n"));
        assert_eq!(outcome.verbatim_lines, 1);
    }

    #[test]
    fn test_blank_separators_preserved() {
        let existing = "1 Sol Ring #1_core\n\n1 Mountain #3_common\n";
        let outcome = merge_tag_file(existing, &[]);
        assert_eq!(outcome.content, existing);
    }

    #[test]
    fn test_duplicate_card_lines_collapse_to_one() {
        let existing = "1 Sol Ring #1_core\n1 Sol Ring #low_spice\n";
        let outcome = merge_tag_file(existing, &[]);
        assert_eq!(outcome.content, "1 Sol Ring #1_core #low_spice\n");
    }

    #[test]
    fn test_new_card_uses_assignment_quantity() {
        let outcome = merge_tag_file("", &[assignment("Mountain", 4, &[Tag::Common])]);
        assert_eq!(outcome.content, "4 Mountain #3_common\n");
    }

    #[test]
    fn test_legacy_line_without_quantity_keeps_its_shape() {
        let existing = "Sol Ring #1_core\n";
        let outcome = merge_tag_file(existing, &[assignment("Sol Ring", 1, &[Tag::LowSpice])]);
        assert_eq!(outcome.content, "Sol Ring #1_core #low_spice\n");
    }

    #[test]
    fn test_assignment_with_multiple_tags_appends_in_order() {
        let line: TagAssignment = TagAssignment {
            card_name: "Sol Ring".to_string(),
            quantity: 1,
            tags: smallvec![Tag::Core, Tag::LowSpice],
        };
        let outcome = merge_tag_file("", &[line]);
        assert_eq!(outcome.content, "1 Sol Ring #1_core #low_spice\n");
    }
}
