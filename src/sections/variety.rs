//! Character variety section - checks the categories the length band requires.

use super::{SectionResult, target_band};
use crate::category::missing_categories;

/// Checks if the password contains every category its length band requires.
///
/// # Returns
/// - `Some(reason)` naming the missing categories
/// - `None` if all required categories are present
pub fn character_variety_section(password: &str) -> SectionResult {
    let band = target_band(password);
    let missing: Vec<&str> = missing_categories(band.categories, password)
        .into_iter()
        .map(|category| category.name())
        .collect();

    if !missing.is_empty() {
        return Some(format!("Missing: {}", missing.join(", ")));
    }
    None
}
