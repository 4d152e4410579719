//! Symbol categories and the composition checks built on them.
//!
//! The four categories are disjoint. A character that belongs to none of them
//! is forbidden.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Characters accepted as special symbols.
pub const SPECIAL_SYMBOLS: [char; 6] = ['-', '_', '+', '*', '?', '!'];

/// A class of characters a password is composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// `A`-`Z`
    Uppercase,
    /// `a`-`z`
    Lowercase,
    /// `0`-`9`
    Number,
    /// `- _ + * ? !`
    SpecialSymbol,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown symbol category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl SymbolCategory {
    pub const ALL: [SymbolCategory; 4] = [
        SymbolCategory::Uppercase,
        SymbolCategory::Lowercase,
        SymbolCategory::Number,
        SymbolCategory::SpecialSymbol,
    ];

    /// Returns the category of `c`, or `None` if `c` is forbidden.
    pub fn of(c: char) -> Option<SymbolCategory> {
        match c {
            'A'..='Z' => Some(SymbolCategory::Uppercase),
            'a'..='z' => Some(SymbolCategory::Lowercase),
            '0'..='9' => Some(SymbolCategory::Number),
            c if SPECIAL_SYMBOLS.contains(&c) => Some(SymbolCategory::SpecialSymbol),
            _ => None,
        }
    }

    pub fn matches(self, c: char) -> bool {
        Self::of(c) == Some(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolCategory::Uppercase => "uppercase",
            SymbolCategory::Lowercase => "lowercase",
            SymbolCategory::Number => "number",
            SymbolCategory::SpecialSymbol => "special symbol",
        }
    }
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uppercase" => Ok(SymbolCategory::Uppercase),
            "lowercase" => Ok(SymbolCategory::Lowercase),
            "number" => Ok(SymbolCategory::Number),
            "special symbol" | "special-symbol" | "special_symbol" => {
                Ok(SymbolCategory::SpecialSymbol)
            }
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Returns `true` if `text` contains at least one character of `category`.
pub fn contains_category(category: SymbolCategory, text: &str) -> bool {
    text.chars().any(|c| category.matches(c))
}

/// Returns `true` if `text` contains at least one character of every given
/// category. An empty slice is always satisfied.
pub fn contains_character_categories(categories: &[SymbolCategory], text: &str) -> bool {
    categories
        .iter()
        .all(|&category| contains_category(category, text))
}

/// Returns the categories from `categories` that `text` lacks.
pub fn missing_categories(categories: &[SymbolCategory], text: &str) -> Vec<SymbolCategory> {
    categories
        .iter()
        .copied()
        .filter(|&category| !contains_category(category, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_category_detects_each() {
        assert!(contains_category(SymbolCategory::Lowercase, "HElLO"));
        assert!(contains_category(SymbolCategory::Uppercase, "hellO"));
        assert!(contains_category(SymbolCategory::Number, "h3llo"));
        assert!(contains_category(SymbolCategory::SpecialSymbol, "hello!"));
    }

    #[test]
    fn test_contains_category_reports_missing() {
        assert!(!contains_category(SymbolCategory::Lowercase, "1234"));
        assert!(!contains_category(SymbolCategory::Uppercase, "hello"));
        assert!(!contains_category(SymbolCategory::Number, "Hello"));
        assert!(!contains_category(SymbolCategory::SpecialSymbol, "Hell0"));
    }

    #[test]
    fn test_plus_and_minus_are_special_symbols() {
        assert!(contains_category(SymbolCategory::SpecialSymbol, "+"));
        assert!(contains_category(SymbolCategory::SpecialSymbol, "-"));
    }

    #[test]
    fn test_zero_is_a_number_not_lowercase() {
        assert!(contains_category(SymbolCategory::Number, "0"));
        assert!(!contains_category(SymbolCategory::Lowercase, "0"));
    }

    #[test]
    fn test_foreign_characters_match_no_category() {
        for c in ['$', ' ', 'é', 'Ř', '٣', '\n', '@'] {
            assert_eq!(SymbolCategory::of(c), None, "{:?} should be uncategorized", c);
            for category in SymbolCategory::ALL {
                assert!(!category.matches(c));
            }
        }
    }

    #[test]
    fn test_categories_are_disjoint_over_ascii() {
        for c in (0u8..=127).map(char::from) {
            let hits = SymbolCategory::ALL
                .iter()
                .filter(|category| category.matches(c))
                .count();
            assert!(hits <= 1, "{:?} belongs to {} categories", c, hits);
        }
    }

    #[test]
    fn test_contains_character_categories_empty_is_vacuous() {
        assert!(contains_character_categories(&[], "hello"));
        assert!(contains_character_categories(&[], ""));
    }

    #[test]
    fn test_contains_character_categories_single_and_multiple() {
        assert!(contains_character_categories(&[SymbolCategory::Lowercase], "hello"));
        assert!(contains_character_categories(
            &[SymbolCategory::Lowercase, SymbolCategory::Number],
            "hello123"
        ));
        assert!(!contains_character_categories(
            &[
                SymbolCategory::Lowercase,
                SymbolCategory::Number,
                SymbolCategory::SpecialSymbol
            ],
            "hello123"
        ));
    }

    #[test]
    fn test_missing_categories_preserves_order() {
        let missing = missing_categories(&SymbolCategory::ALL, "abc");
        assert_eq!(
            missing,
            vec![
                SymbolCategory::Uppercase,
                SymbolCategory::Number,
                SymbolCategory::SpecialSymbol
            ]
        );
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("uppercase".parse::<SymbolCategory>(), Ok(SymbolCategory::Uppercase));
        assert_eq!(" Number ".parse::<SymbolCategory>(), Ok(SymbolCategory::Number));
        assert_eq!("special symbol".parse::<SymbolCategory>(), Ok(SymbolCategory::SpecialSymbol));
        assert_eq!("special-symbol".parse::<SymbolCategory>(), Ok(SymbolCategory::SpecialSymbol));
        assert_eq!(
            "emoji".parse::<SymbolCategory>(),
            Err(ParseCategoryError("emoji".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in SymbolCategory::ALL {
            assert_eq!(category.to_string().parse::<SymbolCategory>(), Ok(category));
        }
    }
}
