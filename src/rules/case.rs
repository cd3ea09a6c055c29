//! Case rule - checks for both uppercase and lowercase letters.

/// Satisfied when the password contains at least one ASCII uppercase
/// letter and at least one ASCII lowercase letter.
///
/// Non-ASCII letters (`É`, `ß`, ...) count as neither.
pub fn has_mixed_case(password: &str) -> bool {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    has_upper && has_lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_mixed() {
        assert!(has_mixed_case("aB"));
        assert!(has_mixed_case("123xY!"));
    }

    #[test]
    fn test_case_lowercase_only() {
        assert!(!has_mixed_case("lowercase123!"));
    }

    #[test]
    fn test_case_uppercase_only() {
        assert!(!has_mixed_case("ABCDEFGHIJKLM"));
    }

    #[test]
    fn test_case_non_ascii_letters_ignored() {
        assert!(!has_mixed_case("Éé"));
        assert!(!has_mixed_case("Éa"));
        assert!(has_mixed_case("ÉaZ"));
    }

    #[test]
    fn test_case_empty() {
        assert!(!has_mixed_case(""));
    }
}
