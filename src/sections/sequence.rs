//! Sequence section - detects runs of same-category characters.

use super::{SectionResult, target_band};
use crate::rules::{MAX_SEQUENCE_LEN, longest_run};

/// Checks that no category forms a run longer than [`MAX_SEQUENCE_LEN`]
/// when the length band forbids it.
///
/// # Returns
/// - `Some(reason)` describing the longest offending run
/// - `None` if runs are short enough or the band does not restrict them
pub fn sequence_section(password: &str) -> SectionResult {
    if !target_band(password).acceptable_sequences {
        return None;
    }

    match longest_run(password) {
        Some((category, len)) if len > MAX_SEQUENCE_LEN => Some(format!(
            "Password contains {} consecutive {} characters (at most {} allowed)",
            len, category, MAX_SEQUENCE_LEN
        )),
        _ => None,
    }
}
