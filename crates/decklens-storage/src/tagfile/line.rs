//! Tag-file line grammar: one shared parse/format pair.
//!
//! A line is `<quantity> <card name> <tag> [<tag> ...]`. The quantity is
//! present iff the leading token is a plain integer; the card name is
//! every token between the quantity and the first tag token (tokens
//! beginning with `#`); everything from the first tag token on is kept as
//! tags. `format_tag_line(parse_tag_line(s)) == s` for every well-formed
//! line, so read and write paths cannot drift apart.

use smallvec::SmallVec;

use decklens_core::types::tags::TAG_MARKER;

/// One parsed line of the tag file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine {
    /// Leading copy count; absent in legacy lines (treated as 1).
    pub quantity: Option<u32>,
    pub card_name: String,
    /// Tag tokens in file order, markers included. Foreign tokens are
    /// preserved; the engine only ever appends tokens from its closed
    /// vocabulary.
    pub tags: SmallVec<[String; 4]>,
}

impl TagLine {
    /// The quantity, defaulting to 1 when absent.
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    pub fn has_tag(&self, token: &str) -> bool {
        self.tags.iter().any(|t| t == token)
    }

    /// Append a tag token unless already present. Returns whether it was
    /// added, the property that makes merging idempotent.
    pub fn add_tag(&mut self, token: &str) -> bool {
        if self.has_tag(token) {
            return false;
        }
        self.tags.push(token.to_string());
        true
    }
}

/// Parse one non-blank line.
///
/// `None` when no card name can be recovered (the line is only a
/// quantity, only tags, or a quantity that overflows); callers preserve
/// such lines verbatim rather than dropping them.
pub fn parse_tag_line(line: &str) -> Option<TagLine> {
    let mut tokens = line.split_whitespace().peekable();

    let quantity = match tokens.peek() {
        Some(first) if is_plain_integer(first) => {
            let parsed = first.parse::<u32>().ok()?;
            tokens.next();
            Some(parsed)
        }
        _ => None,
    };

    let mut name_tokens: Vec<&str> = Vec::new();
    let mut tags: SmallVec<[String; 4]> = SmallVec::new();
    for token in tokens {
        if !tags.is_empty() || token.starts_with(TAG_MARKER) {
            tags.push(token.to_string());
        } else {
            name_tokens.push(token);
        }
    }

    if name_tokens.is_empty() {
        return None;
    }

    Some(TagLine {
        quantity,
        card_name: name_tokens.join(" "),
        tags,
    })
}

/// Format a parsed line back to its persisted form.
pub fn format_tag_line(line: &TagLine) -> String {
    let mut out = String::new();
    if let Some(quantity) = line.quantity {
        out.push_str(&quantity.to_string());
        out.push(' ');
    }
    out.push_str(&line.card_name);
    for tag in &line.tags {
        out.push(' ');
        out.push_str(tag);
    }
    out
}

fn is_plain_integer(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_full_line() {
        let line = parse_tag_line("1 Sol Ring #1_core #low_spice").unwrap();
        assert_eq!(line.quantity, Some(1));
        assert_eq!(line.card_name, "Sol Ring");
        assert_eq!(line.tags.as_slice(), ["#1_core", "#low_spice"]);
    }

    #[test]
    fn test_parse_line_without_quantity() {
        let line = parse_tag_line("Sol Ring #high_spice").unwrap();
        assert_eq!(line.quantity, None);
        assert_eq!(line.effective_quantity(), 1);
        assert_eq!(line.card_name, "Sol Ring");
    }

    #[test]
    fn test_parse_line_without_tags() {
        let line = parse_tag_line("4 Mountain").unwrap();
        assert_eq!(line.quantity, Some(4));
        assert_eq!(line.card_name, "Mountain");
        assert!(line.tags.is_empty());
    }

    #[test]
    fn test_parse_bare_name() {
        let line = parse_tag_line("Winota, Joiner of Forces").unwrap();
        assert_eq!(line.quantity, None);
        assert_eq!(line.card_name, "Winota, Joiner of Forces");
    }

    #[test]
    fn test_unrecoverable_lines_are_none() {
        assert!(parse_tag_line("#1_core").is_none());
        assert!(parse_tag_line("3").is_none());
        assert!(parse_tag_line("3 #high_spice").is_none());
        assert!(parse_tag_line("99999999999999 Sol Ring").is_none());
    }

    #[test]
    fn test_format_round_trip() {
        for well_formed in [
            "1 Sol Ring #1_core",
            "4 Mountain",
            "Sol Ring #high_spice #potential_trap",
            "2 Winota, Joiner of Forces #2_essential",
        ] {
            let parsed = parse_tag_line(well_formed).unwrap();
            assert_eq!(format_tag_line(&parsed), well_formed);
        }
    }

    #[test]
    fn test_add_tag_is_idempotent() {
        let mut line = parse_tag_line("1 Sol Ring #1_core").unwrap();
        assert!(!line.add_tag("#1_core"));
        assert!(line.add_tag("#low_spice"));
        assert!(!line.add_tag("#low_spice"));
        assert_eq!(line.tags.len(), 2);
    }

    proptest! {
        /// Any single-space-separated quantity/name/tags line survives a
        /// parse/format round trip byte for byte.
        #[test]
        fn prop_round_trip(
            quantity in proptest::option::of(0u32..10_000),
            name_words in proptest::collection::vec("[A-Za-z][a-z]{0,8}", 1..4),
            tags in proptest::collection::vec("#[a-z_]{1,12}", 0..4),
        ) {
            let mut parts: Vec<String> = Vec::new();
            if let Some(q) = quantity {
                parts.push(q.to_string());
            }
            parts.push(name_words.join(" "));
            parts.extend(tags.iter().cloned());
            let line = parts.join(" ");

            let parsed = parse_tag_line(&line).unwrap();
            prop_assert_eq!(format_tag_line(&parsed), line);
        }
    }
}
