//! Runtime configuration
//!
//! The rule table is fixed at compile time; only the async evaluator's
//! debounce delay is read from the environment.

use std::time::Duration;

/// Environment variable holding the debounce delay in milliseconds.
pub const DEBOUNCE_ENV: &str = "PWD_STRENGTH_DEBOUNCE_MS";

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Returns the delay the async evaluator waits before evaluating.
///
/// Priority:
/// 1. Environment variable `PWD_STRENGTH_DEBOUNCE_MS`
/// 2. Default of 300 ms
///
/// Values that are not a whole number of milliseconds fall back to the
/// default.
pub fn debounce_delay() -> Duration {
    match std::env::var(DEBOUNCE_ENV) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Ignoring {}={:?}: {}, using {:?}",
                    DEBOUNCE_ENV,
                    raw,
                    _e,
                    DEFAULT_DEBOUNCE
                );
                DEFAULT_DEBOUNCE
            }
        },
        Err(_) => DEFAULT_DEBOUNCE,
    }
}
