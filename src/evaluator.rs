//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::{Criterion, CriterionKind};
use crate::types::{StrengthResult, StrengthScore};
use crate::weights::Weights;

/// Scores passwords against the six criteria with a fixed set of weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthEvaluator {
    weights: Weights,
}

impl StrengthEvaluator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Evaluates a password.
    ///
    /// Never fails. The empty string yields [`StrengthResult::empty`].
    pub fn evaluate(&self, password: &str) -> StrengthResult {
        if password.is_empty() {
            return StrengthResult::empty();
        }

        // Every criterion runs against the raw password, none short-circuits
        let criteria = CriterionKind::ALL.map(|kind| Criterion::evaluate(kind, password));

        let raw = criteria
            .iter()
            .filter(|c| c.met())
            .fold(0u32, |acc, c| acc.saturating_add(self.weights.weight_of(c.kind())));
        let score = StrengthScore::new(raw);

        let result = StrengthResult::from_parts(criteria, score);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            score = result.score.value(),
            level = %result.level,
            met = result.met_count(),
            "password evaluated"
        );

        result
    }
}

/// Evaluates a password with the default weights.
///
/// # Example
///
/// ```
/// use pwd_meter::{evaluate, StrengthLevel};
///
/// let result = evaluate("Abcdefgh12345!@#");
/// assert_eq!(result.score.value(), 100);
/// assert_eq!(result.level, StrengthLevel::VeryStrong);
/// assert_eq!(result.active_segments, 4);
/// ```
pub fn evaluate(password: &str) -> StrengthResult {
    StrengthEvaluator::default().evaluate(password)
}

/// Evaluates a password held as a [`SecretString`].
pub fn evaluate_secret(password: &SecretString) -> StrengthResult {
    evaluate(password.expose_secret())
}

/// Default delay before [`evaluate_tx`] evaluates.
#[cfg(feature = "async")]
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Returns the debounce delay used by [`evaluate_tx`].
///
/// Priority:
/// 1. Environment variable `PWD_METER_DEBOUNCE_MS` (milliseconds)
/// 2. Default of 300 ms
#[cfg(feature = "async")]
pub fn debounce_delay() -> Duration {
    let ms = std::env::var("PWD_METER_DEBOUNCE_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_DEBOUNCE_MS);
    Duration::from_millis(ms)
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`debounce_delay`] first. If `token` is cancelled before the delay
/// elapses (typically because the password changed again), nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(debounce_delay()) => {}
    }

    let result = evaluate_secret(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
