//! Usage-frequency tiers.

use std::fmt;

use decklens_core::types::tags::Tag;

/// A usage-frequency bucket relative to the corpus size.
///
/// A card may qualify for several tiers at once; exclusive labeling picks
/// the highest (100% > 95% > 90%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageTier {
    /// Present in every deck.
    Full,
    /// Present in at least 95% of decks.
    AtLeast95,
    /// Present in at least 90% of decks.
    AtLeast90,
}

impl UsageTier {
    /// All tiers, highest first.
    pub const ALL: [UsageTier; 3] = [Self::Full, Self::AtLeast95, Self::AtLeast90];

    /// Appearance count required to qualify, using integer floor division
    /// rather than rounding.
    pub fn threshold(&self, total_decks: usize) -> u32 {
        let threshold = match self {
            Self::Full => total_decks,
            Self::AtLeast95 => total_decks * 95 / 100,
            Self::AtLeast90 => total_decks * 90 / 100,
        };
        threshold as u32
    }

    /// Tier name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Full => "100%",
            Self::AtLeast95 => ">=95%",
            Self::AtLeast90 => ">=90%",
        }
    }

    /// The catalog tag this tier awards.
    pub fn tag(&self) -> Tag {
        match self {
            Self::Full => Tag::Core,
            Self::AtLeast95 => Tag::Essential,
            Self::AtLeast90 => Tag::Common,
        }
    }
}

impl fmt::Display for UsageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
