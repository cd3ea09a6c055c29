//! Password strength meter library
//!
//! Scores a password against a set of independent rules and buckets the
//! score into a display tier for a strength meter widget.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable evaluation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_BLACKLIST_PATH`: Custom path to the common password file
//!   used by [`BlacklistScorer`] (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, RuleScorer, Tier};
//! use secrecy::SecretString;
//!
//! let scorer = RuleScorer::default();
//! let password = SecretString::new("Abcdefghijklm1@".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, &scorer, None).unwrap();
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password, &scorer).unwrap();
//!
//! assert_eq!(evaluation.score, 5);
//! assert_eq!(evaluation.tier, Tier::VeryStrong);
//! assert!(evaluation.is_acceptable());
//! ```

// Internal modules
mod blacklist;
mod error;
mod evaluator;
mod listener;
mod rules;
mod scorer;
mod tier;

// Public API
pub use blacklist::{blacklist_path, Blacklist, BlacklistError, BlacklistScorer, BLACKLIST_PATH_ENV};
pub use error::StrengthError;
pub use evaluator::{evaluate_password_strength, PasswordEvaluation};
pub use listener::{submit_password, PasswordListener};
pub use rules::{Rule, DEFAULT_RULES, SPECIAL_CHARACTERS};
pub use scorer::{score, RuleScorer, StrengthScorer, MAX_STRENGTH_LEVEL};
pub use tier::{classify, Tier};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, EVALUATION_DEBOUNCE};
