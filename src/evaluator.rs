//! Password evaluator - classification plus per-rule explanations.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classifier::calculate_strength;
use crate::sections::{
    SectionResult, character_variety_section, forbidden_section, length_section, pattern_section,
    sequence_section,
};
use crate::strength::Strength;

/// Result of evaluating a password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    /// `None` when the evaluation was cancelled.
    pub strength: Option<Strength>,
    /// Why the password is not strong, one entry per failed rule.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn is_evaluated(&self) -> bool {
        self.strength.is_some()
    }
}

/// Evaluates password strength and explains which rules failed.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` whose `reasons` are empty exactly when the
/// password is strong.
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let mut reasons = Vec::new();
    let pwd = password.expose_secret();

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&str) -> SectionResult); 5] = [
        ("forbidden", forbidden_section),
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_section),
        ("sequence", sequence_section),
    ];

    for (_section_name, section_fn) in sections {
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(|t| t.is_cancelled()) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password evaluation cancelled before section: {}", _section_name);
                reasons.push("Evaluation cancelled".to_string());
                return PasswordEvaluation {
                    strength: None,
                    reasons,
                };
            }
        }

        if let Some(reason) = section_fn(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password evaluation section failed: {}", _section_name);
            reasons.push(reason);
        }
    }

    PasswordEvaluation {
        strength: Some(calculate_strength(pwd)),
        reasons,
    }
}

/// Async version that waits out the debounce delay, then sends the
/// evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = tokio::time::sleep(crate::config::debounce_delay()) => {}
        _ = token.cancelled() => {}
    }
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
