//! Structural rules: forbidden characters, uppercase placement and
//! same-category runs.

use crate::category::SymbolCategory;

/// Longest run of same-category characters a strong password may contain.
pub const MAX_SEQUENCE_LEN: usize = 5;

/// Returns `true` if `text` contains a character outside the allowed
/// alphabet. The empty string contains none.
pub fn contains_forbidden_characters(text: &str) -> bool {
    text.chars().any(|c| SymbolCategory::of(c).is_none())
}

/// Distinct forbidden characters of `text`, in order of first appearance.
pub fn forbidden_characters(text: &str) -> Vec<char> {
    let mut found = Vec::new();
    for c in text.chars() {
        if SymbolCategory::of(c).is_none() && !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

/// Returns `true` if some uppercase character has a lowercase character
/// somewhere before it and somewhere after it.
///
/// Capitalised words (`Hello`) and trailing capitals (`hellO`) do not count.
pub fn contains_upper_among_lowercase(text: &str) -> bool {
    let mut seen_lower = false;
    let mut armed = false;

    for c in text.chars() {
        match SymbolCategory::of(c) {
            Some(SymbolCategory::Lowercase) if armed => return true,
            Some(SymbolCategory::Lowercase) => seen_lower = true,
            Some(SymbolCategory::Uppercase) if seen_lower => armed = true,
            _ => {}
        }
    }
    false
}

/// Returns `true` if no category forms a run longer than
/// [`MAX_SEQUENCE_LEN`].
pub fn contains_acceptable_sequences(text: &str) -> bool {
    longest_run(text).is_none_or(|(_, len)| len <= MAX_SEQUENCE_LEN)
}

/// Category and length of the longest same-category run in `text`.
///
/// Uncategorized characters break runs without starting one. On ties the
/// earliest run wins.
pub fn longest_run(text: &str) -> Option<(SymbolCategory, usize)> {
    let mut longest: Option<(SymbolCategory, usize)> = None;
    let mut current: Option<(SymbolCategory, usize)> = None;

    for c in text.chars() {
        current = match (SymbolCategory::of(c), current) {
            (Some(category), Some((prev, len))) if category == prev => Some((category, len + 1)),
            (Some(category), _) => Some((category, 1)),
            (None, _) => None,
        };

        if let Some((_, len)) = current {
            if longest.is_none_or(|(_, best)| len > best) {
                longest = current;
            }
        }
    }
    longest
}
