//! Submission gating - hands a password to the caller only when its
//! latest evaluation is acceptable.

use secrecy::SecretString;

use crate::evaluator::PasswordEvaluation;

/// Receives passwords that passed the strength check.
pub trait PasswordListener {
    fn on_password_saved(&mut self, password: &SecretString);
}

impl<F> PasswordListener for F
where
    F: FnMut(&SecretString),
{
    fn on_password_saved(&mut self, password: &SecretString) {
        self(password)
    }
}

/// Notifies `listener` if `evaluation` is acceptable.
///
/// `evaluation` must be the evaluation of `password`. Returns whether the
/// listener was notified.
pub fn submit_password<L: PasswordListener + ?Sized>(
    password: &SecretString,
    evaluation: &PasswordEvaluation,
    listener: &mut L,
) -> bool {
    if !evaluation.is_acceptable() {
        #[cfg(feature = "tracing")]
        tracing::debug!(tier = ?evaluation.tier, "password submission rejected");
        return false;
    }

    listener.on_password_saved(password);
    true
}
