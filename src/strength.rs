//! Strength labels returned by the classifier.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome of classifying a password.
///
/// The type itself carries no ordering; which label outranks which is
/// decided by the classifier's band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strength {
    #[default]
    Unacceptable,
    Weak,
    Fair,
    Strong,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength label: {0:?}")]
pub struct ParseStrengthError(pub String);

impl Strength {
    pub const ALL: [Strength; 4] = [
        Strength::Unacceptable,
        Strength::Weak,
        Strength::Fair,
        Strength::Strong,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Strength::Unacceptable => "unacceptable",
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Strength::ALL
            .into_iter()
            .find(|strength| strength.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStrengthError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unacceptable() {
        assert_eq!(Strength::default(), Strength::Unacceptable);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("weak".parse::<Strength>(), Ok(Strength::Weak));
        assert_eq!("STRONG".parse::<Strength>(), Ok(Strength::Strong));
        assert_eq!(" fair\n".parse::<Strength>(), Ok(Strength::Fair));
        assert_eq!(
            "epic".parse::<Strength>(),
            Err(ParseStrengthError("epic".to_string()))
        );
    }

    #[test]
    fn test_display_matches_label() {
        for strength in Strength::ALL {
            assert_eq!(strength.to_string(), strength.label());
            assert_eq!(strength.to_string().parse::<Strength>(), Ok(strength));
        }
    }
}
