//! Tier classification - buckets a score into one of six display tiers.

use std::fmt;

use crate::error::StrengthError;

/// Strength category shown to the user.
///
/// Variants are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Empty,
    TooShort,
    Weak,
    Okay,
    Strong,
    VeryStrong,
}

impl Tier {
    /// Number of steps on the progress bar. `progress()` is in `[0, MAX_PROGRESS]`.
    pub const MAX_PROGRESS: u8 = 4;

    pub const ALL: [Tier; 6] = [
        Tier::Empty,
        Tier::TooShort,
        Tier::Weak,
        Tier::Okay,
        Tier::Strong,
        Tier::VeryStrong,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Empty => "Please, enter your password.",
            Tier::TooShort => "Too short Password",
            Tier::Weak => "Weak Password",
            Tier::Okay => "Okay Password",
            Tier::Strong => "Strong Password",
            Tier::VeryStrong => "Very Strong Password",
        }
    }

    /// Whether a password in this tier may be submitted.
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Tier::Okay | Tier::Strong | Tier::VeryStrong)
    }

    pub fn progress(&self) -> u8 {
        match self {
            Tier::Empty | Tier::TooShort => 0,
            Tier::Weak => 1,
            Tier::Okay => 2,
            Tier::Strong => 3,
            Tier::VeryStrong => 4,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a scored password.
///
/// An empty password is always [`Tier::Empty`], whatever the score.
/// Otherwise `score / max_level` is bucketed on fifths, lower bound
/// inclusive: `[0, 0.2)` too short, `[0.2, 0.4)` weak, `[0.4, 0.6)` okay,
/// `[0.6, 0.8)` strong, `[0.8, ..]` very strong.
///
/// # Errors
/// [`StrengthError::InvalidConfiguration`] if `max_level` is zero, even
/// for an empty password.
pub fn classify(password: &str, score: u32, max_level: u32) -> Result<Tier, StrengthError> {
    if max_level == 0 {
        #[cfg(feature = "tracing")]
        tracing::error!("Cannot classify password: max strength level is 0");
        return Err(StrengthError::InvalidConfiguration { max_level });
    }

    if password.is_empty() {
        return Ok(Tier::Empty);
    }

    // score / max >= k / 5  <=>  5 * score >= k * max, exact on integers
    let scaled = u64::from(score) * 5;
    let max = u64::from(max_level);
    let tier = if scaled < max {
        Tier::TooShort
    } else if scaled < 2 * max {
        Tier::Weak
    } else if scaled < 3 * max {
        Tier::Okay
    } else if scaled < 4 * max {
        Tier::Strong
    } else {
        Tier::VeryStrong
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(score, max_level, tier = ?tier, "password classified");

    Ok(tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty_ignores_score() {
        for s in 0..=5 {
            assert_eq!(classify("", s, 5), Ok(Tier::Empty));
        }
        assert_eq!(classify("", 42, 5), Ok(Tier::Empty));
    }

    #[test]
    fn test_classify_every_score_max_five() {
        let expected = [
            Tier::TooShort,
            Tier::Weak,
            Tier::Okay,
            Tier::Strong,
            Tier::VeryStrong,
            Tier::VeryStrong,
        ];
        for (s, tier) in expected.into_iter().enumerate() {
            assert_eq!(classify("x", s as u32, 5), Ok(tier), "score {}", s);
        }
    }

    #[test]
    fn test_classify_every_score_max_six() {
        // 1/6 ~ 0.17, 2/6 ~ 0.33, 3/6 = 0.5, 4/6 ~ 0.67, 5/6 ~ 0.83
        let expected = [
            Tier::TooShort,
            Tier::TooShort,
            Tier::Weak,
            Tier::Okay,
            Tier::Strong,
            Tier::VeryStrong,
            Tier::VeryStrong,
        ];
        for (s, tier) in expected.into_iter().enumerate() {
            assert_eq!(classify("x", s as u32, 6), Ok(tier), "score {}", s);
        }
    }

    #[test]
    fn test_classify_boundaries_resolve_upward() {
        assert_eq!(classify("x", 1, 10), Ok(Tier::TooShort));
        assert_eq!(classify("x", 2, 10), Ok(Tier::Weak));
        assert_eq!(classify("x", 4, 10), Ok(Tier::Okay));
        assert_eq!(classify("x", 6, 10), Ok(Tier::Strong));
        assert_eq!(classify("x", 8, 10), Ok(Tier::VeryStrong));
    }

    #[test]
    fn test_classify_score_above_max() {
        assert_eq!(classify("x", 9, 5), Ok(Tier::VeryStrong));
        assert_eq!(classify("x", u32::MAX, 1), Ok(Tier::VeryStrong));
    }

    #[test]
    fn test_classify_zero_max_level() {
        let err = Err(StrengthError::InvalidConfiguration { max_level: 0 });
        assert_eq!(classify("abc", 0, 0), err);
        assert_eq!(classify("abc", 3, 0), err);
        assert_eq!(classify("", 0, 0), err);
    }

    #[test]
    fn test_tier_acceptable() {
        let acceptable: Vec<Tier> = Tier::ALL.into_iter().filter(Tier::is_acceptable).collect();
        assert_eq!(acceptable, vec![Tier::Okay, Tier::Strong, Tier::VeryStrong]);
    }

    #[test]
    fn test_tier_progress() {
        let progress: Vec<u8> = Tier::ALL.iter().map(Tier::progress).collect();
        assert_eq!(progress, vec![0, 0, 1, 2, 3, 4]);
        assert!(progress.iter().all(|p| *p <= Tier::MAX_PROGRESS));
    }

    #[test]
    fn test_tier_ordering_and_display() {
        assert!(Tier::TooShort < Tier::Weak);
        assert!(Tier::Strong < Tier::VeryStrong);
        assert_eq!(Tier::Okay.to_string(), "Okay Password");
        assert_eq!(Tier::Empty.to_string(), "Please, enter your password.");
    }
}
