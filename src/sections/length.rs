//! Length section - checks password length thresholds.

/// Length required by the first criterion.
pub const MIN_LENGTH: usize = 12;

/// Length required by the bonus criterion.
pub const RECOMMENDED_LENGTH: usize = 16;

/// Checks if the password is at least `min` characters long.
///
/// Length is counted in UTF-16 code units: characters outside the Basic
/// Multilingual Plane (most emoji) count twice, accented letters once.
pub fn meets_length(password: &str, min: usize) -> bool {
    // Stop counting as soon as the threshold is reached.
    password.encode_utf16().take(min).count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_one_below_minimum() {
        assert!(!meets_length(&"a".repeat(11), MIN_LENGTH));
    }

    #[test]
    fn test_length_exactly_minimum() {
        assert!(meets_length(&"a".repeat(12), MIN_LENGTH));
    }

    #[test]
    fn test_length_recommended_boundary() {
        assert!(!meets_length(&"a".repeat(15), RECOMMENDED_LENGTH));
        assert!(meets_length(&"a".repeat(16), RECOMMENDED_LENGTH));
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        // 12 units, 24 bytes
        let pwd = "é".repeat(12);
        assert!(meets_length(&pwd, MIN_LENGTH));
        assert!(!meets_length(&pwd, RECOMMENDED_LENGTH));
    }

    #[test]
    fn test_length_astral_chars_count_twice() {
        // 🔒 is a surrogate pair: 5 of them are 10 units, 6 are 12
        assert!(!meets_length(&"🔒".repeat(5), MIN_LENGTH));
        assert!(meets_length(&"🔒".repeat(6), MIN_LENGTH));
        assert!(!meets_length(&"🔒".repeat(7), RECOMMENDED_LENGTH));
        assert!(meets_length(&"🔒".repeat(8), RECOMMENDED_LENGTH));
    }

    #[test]
    fn test_length_empty() {
        assert!(!meets_length("", MIN_LENGTH));
        assert!(meets_length("", 0));
    }
}
