//! Length rules - reward passwords longer than 8 and longer than 12 characters.

const SHORT_THRESHOLD: usize = 8;
const LONG_THRESHOLD: usize = 12;

// Length is counted in chars, not bytes.
fn char_len(password: &str) -> usize {
    password.chars().count()
}

/// Satisfied when the password has more than 8 characters.
pub fn longer_than_eight(password: &str) -> bool {
    char_len(password) > SHORT_THRESHOLD
}

/// Satisfied when the password has more than 12 characters.
///
/// Not exclusive with [`longer_than_eight`]: a 13-character password
/// satisfies both.
pub fn longer_than_twelve(password: &str) -> bool {
    char_len(password) > LONG_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_exactly_eight() {
        assert!(!longer_than_eight("12345678"));
        assert!(!longer_than_twelve("12345678"));
    }

    #[test]
    fn test_length_nine() {
        assert!(longer_than_eight("123456789"));
        assert!(!longer_than_twelve("123456789"));
    }

    #[test]
    fn test_length_exactly_twelve() {
        assert!(longer_than_eight("123456789012"));
        assert!(!longer_than_twelve("123456789012"));
    }

    #[test]
    fn test_length_thirteen_satisfies_both() {
        assert!(longer_than_eight("1234567890123"));
        assert!(longer_than_twelve("1234567890123"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 9 chars, 18 bytes
        let pwd = "ééééééééé";
        assert_eq!(pwd.chars().count(), 9);
        assert!(longer_than_eight(pwd));
        assert!(!longer_than_eight("éééééééé"));
    }

    #[test]
    fn test_length_empty() {
        assert!(!longer_than_eight(""));
        assert!(!longer_than_twelve(""));
    }
}
