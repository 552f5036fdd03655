//! The closed tag vocabulary of the persisted card catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Marker character introducing a tag token in the persisted file.
pub const TAG_MARKER: char = '#';

/// A catalog tag. A card may carry several at once; the merge step only
/// ever appends tokens from this vocabulary, but preserves any foreign
/// token already present in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Present in 100% of decks.
    Core,
    /// Present in at least 95% of decks.
    Essential,
    /// Present in at least 90% of decks.
    Common,
    /// Top of the power ranking, seen in fewer than 3 decks.
    HighSpice,
    /// Top of the power ranking, seen in 3 to 10 decks.
    MediumSpice,
    /// Top of the power ranking, seen in more than 10 decks.
    LowSpice,
    /// Commonly played but statistically weak.
    PotentialTrap,
    /// Bottom of the power ranking.
    BadCard,
}

impl Tag {
    /// Token spelling as persisted, marker included.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Core => "#1_core",
            Self::Essential => "#2_essential",
            Self::Common => "#3_common",
            Self::HighSpice => "#high_spice",
            Self::MediumSpice => "#medium_spice",
            Self::LowSpice => "#low_spice",
            Self::PotentialTrap => "#potential_trap",
            Self::BadCard => "#bad_card",
        }
    }

    /// Parse a persisted token back into a tag.
    ///
    /// Unknown tokens are `None`: they survive merges verbatim but are
    /// never produced by this engine.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            "#1_core" => Some(Self::Core),
            "#2_essential" => Some(Self::Essential),
            "#3_common" => Some(Self::Common),
            "#high_spice" => Some(Self::HighSpice),
            "#medium_spice" => Some(Self::MediumSpice),
            "#low_spice" => Some(Self::LowSpice),
            "#potential_trap" => Some(Self::PotentialTrap),
            "#bad_card" => Some(Self::BadCard),
            _ => None,
        }
    }

    /// True for any token-shaped string (starts with the tag marker).
    pub fn is_tag_token(token: &str) -> bool {
        token.starts_with(TAG_MARKER)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One card's newly computed tags plus its display quantity: the unit of
/// work handed to the tag-file merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAssignment {
    pub card_name: String,
    /// Max copies observed in any single deck; 1 when unknown.
    pub quantity: u32,
    /// Tags in assignment order, each at most once.
    pub tags: SmallVec<[Tag; 4]>,
}

impl TagAssignment {
    pub fn new(card_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            card_name: card_name.into(),
            quantity,
            tags: SmallVec::new(),
        }
    }

    /// Append a tag unless already present.
    pub fn push_tag(&mut self, tag: Tag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}
