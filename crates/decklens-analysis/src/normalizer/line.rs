//! Line grammar for raw deck exports.
//!
//! One line is: an optional leading integer count (default 1), the card
//! name, then optional parenthesized set/collector metadata which is
//! discarded.

/// Classification of one raw export line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A maindeck card entry: copy count plus name (metadata stripped).
    Card { count: u32, name: String },
    /// Blank or comment line, skipped silently.
    Skip,
    /// A recognized non-card label (commander/companion/maindeck), skipped
    /// silently.
    Header,
    /// Start of a sideboard or stickers section; terminates the deck.
    SectionBreak,
    /// A non-header line the grammar cannot parse; reported and skipped.
    Unparseable,
}

/// Classify a single raw line.
pub fn classify_line(raw: &str) -> LineClass {
    let line = raw.trim();
    if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
        return LineClass::Skip;
    }
    if is_section_break(line) {
        return LineClass::SectionBreak;
    }

    if let Some((count_token, rest)) = split_leading_count(line) {
        // A leading integer commits the line to the card grammar: a count
        // that fails to parse is malformed, not a header.
        return match (count_token.parse::<u32>(), card_name(rest)) {
            (Ok(count), Some(name)) => LineClass::Card {
                count,
                name: name.to_string(),
            },
            _ => LineClass::Unparseable,
        };
    }

    if is_known_header(line) {
        return LineClass::Header;
    }
    // A lone number is a count with no card name.
    if line.chars().all(|c| c.is_ascii_digit()) {
        return LineClass::Unparseable;
    }

    // Count omitted: the whole line (minus metadata) names a single copy.
    match card_name(line) {
        Some(name) => LineClass::Card {
            count: 1,
            name: name.to_string(),
        },
        None => LineClass::Unparseable,
    }
}

/// Sideboard and stickers markers end the maindeck permanently.
fn is_section_break(line: &str) -> bool {
    let upper = line.to_uppercase();
    upper == "SIDEBOARD"
        || upper.starts_with("SIDEBOARD:")
        || upper == "STICKERS"
        || upper.starts_with("STICKERS:")
}

/// Labels that appear in exports but never name a card on their own line.
fn is_known_header(line: &str) -> bool {
    let upper = line.to_uppercase();
    ["COMMANDER", "COMPANION", "MAINDECK"]
        .iter()
        .any(|keyword| upper.contains(keyword))
}

/// Split off a leading whitespace-delimited all-digit token, if present.
fn split_leading_count(line: &str) -> Option<(&str, &str)> {
    let (first, rest) = line.split_once(char::is_whitespace)?;
    if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
        Some((first, rest.trim_start()))
    } else {
        None
    }
}

/// The card name: everything up to the first parenthesized metadata group.
fn card_name(rest: &str) -> Option<&str> {
    let name = match rest.find('(') {
        Some(idx) => rest[..idx].trim(),
        None => rest.trim(),
    };
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
