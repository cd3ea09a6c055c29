//! Digit rule.

/// Satisfied when the password contains at least one of `0`-`9`.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
