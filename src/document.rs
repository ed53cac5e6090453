//! National ID (NIF-style) document number validation.

/// Document type code for the national ID format, the only type the
/// validator recognizes.
pub const DOCUMENT_TYPE_NATIONAL_ID: i32 = 1;

/// Check a document identifier against its type code.
///
/// Any type code other than [`DOCUMENT_TYPE_NATIONAL_ID`] is invalid
/// regardless of the value. For the national ID format the value must be
/// exactly 9 characters: 8 ASCII digits followed by a single ASCII letter
/// of either case, nothing else.
///
/// This is a format-only check; the control letter is not verified against
/// the digits.
pub fn check_id(type_code: i32, id: &str) -> bool {
    if type_code != DOCUMENT_TYPE_NATIONAL_ID {
        return false;
    }

    let chars: Vec<char> = id.chars().collect();
    chars.len() == 9
        && chars[..8].iter().all(|c| c.is_ascii_digit())
        && chars[8].is_ascii_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id_uppercase_letter() {
        assert!(check_id(1, "12345678Z"));
    }

    #[test]
    fn test_valid_id_lowercase_letter() {
        assert!(check_id(1, "00000000a"));
    }

    #[test]
    fn test_unsupported_type_code_always_false() {
        assert!(!check_id(0, "12345678Z"));
        assert!(!check_id(2, "12345678Z"));
        assert!(!check_id(-1, "12345678Z"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!check_id(1, "1234567Z"));
        assert!(!check_id(1, "123456789Z"));
        assert!(!check_id(1, ""));
    }

    #[test]
    fn test_letter_in_digit_positions() {
        assert!(!check_id(1, "1234567ZZ"));
        assert!(!check_id(1, "A2345678Z"));
    }

    #[test]
    fn test_digit_in_letter_position() {
        assert!(!check_id(1, "123456789"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!check_id(1, "12345678Ñ"));
        assert!(!check_id(1, "１2345678Z"));
    }

    #[test]
    fn test_embedded_separator_rejected() {
        assert!(!check_id(1, "12345678 Z"));
        assert!(!check_id(1, "12345-78Z"));
    }
}
