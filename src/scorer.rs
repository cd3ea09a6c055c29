//! Strength scoring - maps a password to an integer level in `[0, max_level]`.

use crate::rules::{DEFAULT_RULES, Rule};

/// Upper bound of the default five-rule score.
pub const MAX_STRENGTH_LEVEL: u32 = 5;

/// A replaceable password scoring strategy.
///
/// Implementations must return a score in `[0, max_level()]` for every
/// input, including the empty string, and `max_level()` must be positive
/// for the score to be classifiable.
pub trait StrengthScorer {
    fn score(&self, password: &str) -> u32;

    fn max_level(&self) -> u32;
}

/// Scores a password by counting how many rules it satisfies.
#[derive(Debug, Clone)]
pub struct RuleScorer {
    rules: Vec<Rule>,
}

impl RuleScorer {
    /// Builds a scorer from a rule table. The max level is the number of rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RuleScorer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl StrengthScorer for RuleScorer {
    fn score(&self, password: &str) -> u32 {
        let mut level = 0;
        for (rule_name, rule_fn) in &self.rules {
            let satisfied = rule_fn(password);

            #[cfg(feature = "tracing")]
            tracing::trace!(rule = *rule_name, satisfied, "password rule evaluated");
            #[cfg(not(feature = "tracing"))]
            let _ = rule_name;

            if satisfied {
                level += 1;
            }
        }
        level
    }

    fn max_level(&self) -> u32 {
        self.rules.len() as u32
    }
}

/// Scores a password with the default five rules.
///
/// Always in `[0, MAX_STRENGTH_LEVEL]`.
pub fn score(password: &str) -> u32 {
    RuleScorer::default().score(password)
}
