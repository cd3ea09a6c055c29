//! Special character rule.

/// Characters that satisfy the special character rule.
///
/// Anything outside this set (`!`, `^`, `/`, whitespace, ...) does not count.
pub const SPECIAL_CHARACTERS: &[char] = &[
    '@', '$', '%', '&', '#', '_', '(', ')', '=', '+', '*', '?', '»', '«', '<', '>', '£', '§',
    '€', '{', '}', '.', '-',
];

/// Satisfied when the password contains at least one character from
/// [`SPECIAL_CHARACTERS`].
pub fn has_special_character(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c))
}
