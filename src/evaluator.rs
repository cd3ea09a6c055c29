//! Password evaluator - scores and classifies a password in one call.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::StrengthError;
use crate::scorer::StrengthScorer;
use crate::tier::{classify, Tier};

/// Delay before a channel evaluation runs, so bursts of keystrokes
/// only evaluate the latest input.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Result of evaluating one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: u32,
    pub max_level: u32,
    pub tier: Tier,
}

impl PasswordEvaluation {
    /// `score / max_level`. `max_level` is never zero for a constructed evaluation.
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) / f64::from(self.max_level)
    }

    pub fn is_acceptable(&self) -> bool {
        self.tier.is_acceptable()
    }
}

/// Evaluates password strength with the given scoring strategy.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `scorer` - The scoring strategy
/// * `token` - Optional cancellation token (async feature only)
///
/// # Errors
/// - [`StrengthError::InvalidConfiguration`] if the scorer's max level is zero
/// - [`StrengthError::Cancelled`] if the token was cancelled (async feature only)
pub fn evaluate_password_strength<S: StrengthScorer + ?Sized>(
    password: &SecretString,
    scorer: &S,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<PasswordEvaluation, StrengthError> {
    #[cfg(feature = "async")]
    let is_cancelled = || token.as_ref().is_some_and(|t| t.is_cancelled());

    let pwd = password.expose_secret();
    let max_level = scorer.max_level();

    // Check cancellation before each step (async only)
    #[cfg(feature = "async")]
    {
        if is_cancelled() {
            return Err(StrengthError::Cancelled);
        }
    }

    let score = scorer.score(pwd);

    #[cfg(feature = "async")]
    {
        if is_cancelled() {
            return Err(StrengthError::Cancelled);
        }
    }

    let tier = classify(pwd, score, max_level)?;

    Ok(PasswordEvaluation {
        score,
        max_level,
        tier,
    })
}

/// Async version that waits [`EVALUATION_DEBOUNCE`], then sends the
/// evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx<S: StrengthScorer + ?Sized>(
    password: &SecretString,
    scorer: &S,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordEvaluation, StrengthError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;
    let evaluation = evaluate_password_strength(password, scorer, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
