//! Pattern section - uppercase letters must sit between lowercase ones.

use super::{SectionResult, target_band};
use crate::rules::contains_upper_among_lowercase;

pub fn pattern_section(password: &str) -> SectionResult {
    if target_band(password).upper_among_lowercase && !contains_upper_among_lowercase(password) {
        return Some(
            "At least one uppercase letter must appear between lowercase letters".to_string(),
        );
    }
    None
}
