//! Length section - checks password length against the strength bands.

use super::SectionResult;
use crate::classifier::{STRONG, WEAK};

/// Checks if the password is long enough to be accepted, and long enough to
/// be strong.
///
/// # Returns
/// - `Some(reason)` if password is too short for either
/// - `None` if password is long enough to be strong
pub fn length_section(password: &str) -> SectionResult {
    let len = password.chars().count();
    if len < WEAK.min_len {
        return Some(format!(
            "Password must be at least {} characters",
            WEAK.min_len
        ));
    }
    if len < STRONG.min_len {
        return Some(format!(
            "Password must be at least {} characters to be strong",
            STRONG.min_len
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            length_section("Sh0rt"),
            Some("Password must be at least 6 characters".to_string())
        );
        assert_eq!(
            length_section(""),
            Some("Password must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_below_strong() {
        assert_eq!(
            length_section("HeLL1!"),
            Some("Password must be at least 11 characters to be strong".to_string())
        );
        assert_eq!(
            length_section("aB1cd2efgh"),
            Some("Password must be at least 11 characters to be strong".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_strong_minimum() {
        assert_eq!(length_section("aB1cd2efg!h"), None);
    }
}
