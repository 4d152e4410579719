//! Password evaluation sections
//!
//! Each section checks one rule and explains, in a single sentence, why the
//! password fails it.

mod forbidden;
mod length;
mod pattern;
mod sequence;
mod variety;

pub use forbidden::forbidden_section;
pub use length::length_section;
pub use pattern::pattern_section;
pub use sequence::sequence_section;
pub use variety::character_variety_section;

use crate::classifier::{BandRule, WEAK, band_for_length};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// The band `text` is judged against. Passwords too short for any band are
/// held to the weakest band's requirements.
fn target_band(text: &str) -> &'static BandRule {
    band_for_length(text.chars().count()).unwrap_or(&WEAK)
}
