//! Password scoring rules
//!
//! Each rule is an independent predicate over the password that
//! contributes exactly 0 or 1 to the strength score.

mod case;
mod digit;
mod length;
mod special;

pub use case::has_mixed_case;
pub use digit::has_digit;
pub use length::{longer_than_eight, longer_than_twelve};
pub use special::{has_special_character, SPECIAL_CHARACTERS};

/// A named scoring rule.
/// - `.0` - Rule name, used for logging
/// - `.1` - Predicate, `true` when the password satisfies the rule
pub type Rule = (&'static str, fn(&str) -> bool);

/// The five rules of the default scoring strategy, in evaluation order.
pub const DEFAULT_RULES: [Rule; 5] = [
    ("length>8", longer_than_eight),
    ("length>12", longer_than_twelve),
    ("mixed_case", has_mixed_case),
    ("digit", has_digit),
    ("special", has_special_character),
];
