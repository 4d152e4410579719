//! Forbidden character section - rejects characters outside the alphabet.

use super::SectionResult;
use crate::rules::forbidden_characters;

/// Checks that the password only uses letters, digits and `- _ + * ? !`.
///
/// # Returns
/// - `Some(reason)` listing the offending characters
/// - `None` if every character is allowed
pub fn forbidden_section(password: &str) -> SectionResult {
    let found = forbidden_characters(password);
    if found.is_empty() {
        return None;
    }

    let listed: Vec<String> = found.iter().map(|c| format!("{:?}", c)).collect();
    Some(format!(
        "Password contains forbidden characters: {}",
        listed.join(", ")
    ))
}
