//! Rule-based password strength classification
//!
//! Passwords are sorted into one of four labels by fixed syntactic rules:
//!
//! | Strength | Length | Categories                        | Extra rules                                   |
//! |----------|--------|-----------------------------------|-----------------------------------------------|
//! | weak     | 6-8    | uppercase, lowercase, number      | -                                             |
//! | fair     | 9-10   | uppercase, lowercase, number      | an uppercase between lowercase letters        |
//! | strong   | 11+    | all four, including special symbol | as fair, and no same-category run longer than 5 |
//!
//! Anything else, including any character outside `A-Z a-z 0-9 - _ + * ? !`,
//! is unacceptable. Bands do not cascade: an 11-character password that
//! misses a strong rule is unacceptable, not fair.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable and debounced evaluation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_STRENGTH_DEBOUNCE_MS`: Delay before the async evaluator runs
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{calculate_strength, evaluate_password_strength, Strength};
//! use secrecy::SecretString;
//!
//! assert_eq!(calculate_strength("HeLLos12345!"), Strength::Strong);
//!
//! let password = SecretString::new("HeLL1!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.strength, Some(Strength::Weak));
//! println!("Reasons: {:?}", evaluation.reasons);
//! ```

mod category;
mod classifier;
mod config;
mod evaluator;
mod rules;
mod sections;
mod strength;

// Public API
pub use category::{
    ParseCategoryError, SPECIAL_SYMBOLS, SymbolCategory, contains_category,
    contains_character_categories, missing_categories,
};
pub use classifier::{BandRule, RULES, band_for_length, calculate_strength, is_fair, is_strong, is_weak};
pub use config::{DEBOUNCE_ENV, DEFAULT_DEBOUNCE, debounce_delay};
pub use evaluator::{PasswordEvaluation, evaluate_password_strength};
pub use rules::{
    MAX_SEQUENCE_LEN, contains_acceptable_sequences, contains_forbidden_characters,
    contains_upper_among_lowercase, forbidden_characters, longest_run,
};
pub use strength::{ParseStrengthError, Strength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
