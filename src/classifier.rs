//! Length-banded strength classification.
//!
//! Each band owns a disjoint length range and its own requirements. A
//! password that falls in a band but misses one of its rules is
//! unacceptable; it never drops to a lower band.

use crate::category::{SymbolCategory, contains_character_categories};
use crate::rules::{
    contains_acceptable_sequences, contains_forbidden_characters, contains_upper_among_lowercase,
};
use crate::strength::Strength;

const LETTERS_AND_NUMBERS: &[SymbolCategory] = &[
    SymbolCategory::Uppercase,
    SymbolCategory::Lowercase,
    SymbolCategory::Number,
];

/// Requirements a password must meet to be classified as `strength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandRule {
    pub strength: Strength,
    pub min_len: usize,
    /// Inclusive upper bound, `None` for open-ended bands.
    pub max_len: Option<usize>,
    pub categories: &'static [SymbolCategory],
    pub upper_among_lowercase: bool,
    pub acceptable_sequences: bool,
}

impl BandRule {
    pub fn covers_length(&self, len: usize) -> bool {
        len >= self.min_len && self.max_len.is_none_or(|max| len <= max)
    }

    /// Checks every rule of the band. Forbidden characters are not considered
    /// here; [`calculate_strength`] rejects them first.
    pub fn matches(&self, text: &str) -> bool {
        self.covers_length(text.chars().count())
            && contains_character_categories(self.categories, text)
            && (!self.upper_among_lowercase || contains_upper_among_lowercase(text))
            && (!self.acceptable_sequences || contains_acceptable_sequences(text))
    }
}

pub const STRONG: BandRule = BandRule {
    strength: Strength::Strong,
    min_len: 11,
    max_len: None,
    categories: &SymbolCategory::ALL,
    upper_among_lowercase: true,
    acceptable_sequences: true,
};

pub const FAIR: BandRule = BandRule {
    strength: Strength::Fair,
    min_len: 9,
    max_len: Some(10),
    categories: LETTERS_AND_NUMBERS,
    upper_among_lowercase: true,
    acceptable_sequences: false,
};

pub const WEAK: BandRule = BandRule {
    strength: Strength::Weak,
    min_len: 6,
    max_len: Some(8),
    categories: LETTERS_AND_NUMBERS,
    upper_among_lowercase: false,
    acceptable_sequences: false,
};

/// Bands in precedence order.
pub const RULES: [BandRule; 3] = [STRONG, FAIR, WEAK];

/// Returns the band whose length range contains `len`, if any.
pub fn band_for_length(len: usize) -> Option<&'static BandRule> {
    RULES.iter().find(|band| band.covers_length(len))
}

/// 11+ characters, all four categories, an uppercase among lowercase and no
/// run longer than five.
pub fn is_strong(text: &str) -> bool {
    STRONG.matches(text)
}

/// 9-10 characters, uppercase, lowercase and number, and an uppercase among
/// lowercase.
pub fn is_fair(text: &str) -> bool {
    FAIR.matches(text)
}

/// 6-8 characters with uppercase, lowercase and number.
pub fn is_weak(text: &str) -> bool {
    WEAK.matches(text)
}

/// Classifies `text` into a [`Strength`].
pub fn calculate_strength(text: &str) -> Strength {
    let strength = if contains_forbidden_characters(text) {
        Strength::Unacceptable
    } else {
        RULES
            .iter()
            .find(|band| band.matches(text))
            .map(|band| band.strength)
            .unwrap_or(Strength::Unacceptable)
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(length = text.chars().count(), %strength, "password classified");

    strength
}
