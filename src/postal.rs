//! Postal code validation.

use regex::Regex;
use std::fmt;

/// Anchored five-ASCII-digit shape.
const POSTAL_CODE_PATTERN: &str = r"^[0-9]{5}$";

/// Signaled failure raised by [`check_postal_code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPostalCode;

impl fmt::Display for InvalidPostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid postal code")
    }
}

impl std::error::Error for InvalidPostalCode {}

/// Check a postal code, failing with [`InvalidPostalCode`].
///
/// The documented rule for this field is "valid iff exactly five digits",
/// but the shipped behavior signals the failure exactly when the input is
/// present and DOES match five ASCII digits; absent, malformed, and
/// wrong-length inputs all pass silently. Consumers rely on the literal
/// behavior, so it is preserved here unchanged.
///
/// TODO: confirm the intended polarity with the product owner before
/// flipping this check.
pub fn check_postal_code(zip: Option<&str>) -> Result<(), InvalidPostalCode> {
    match zip {
        Some(zip) if Regex::new(POSTAL_CODE_PATTERN).unwrap().is_match(zip) => {
            Err(InvalidPostalCode)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The assertions below pin the literal shipped behavior: the
    // well-formed five-digit case is the one that raises. See the
    // function docs for the divergence from the documented intent.

    #[test]
    fn test_raises_on_well_formed_five_digit_code() {
        assert_eq!(check_postal_code(Some("28001")), Err(InvalidPostalCode));
        assert_eq!(check_postal_code(Some("00000")), Err(InvalidPostalCode));
    }

    #[test]
    fn test_passes_on_wrong_length() {
        assert_eq!(check_postal_code(Some("2800")), Ok(()));
        assert_eq!(check_postal_code(Some("280011")), Ok(()));
    }

    #[test]
    fn test_passes_on_absent_and_empty_input() {
        assert_eq!(check_postal_code(None), Ok(()));
        assert_eq!(check_postal_code(Some("")), Ok(()));
    }

    #[test]
    fn test_passes_on_non_digit_content() {
        assert_eq!(check_postal_code(Some("2800a")), Ok(()));
        assert_eq!(check_postal_code(Some("abcde")), Ok(()));
        assert_eq!(check_postal_code(Some("28 01")), Ok(()));
    }

    #[test]
    fn test_documented_intent_diverges_from_behavior() {
        // Under the documented intent ("valid iff exactly 5 digits") the
        // next two outcomes would be swapped. Probable defect; kept
        // literal pending product confirmation.
        assert!(check_postal_code(Some("28001")).is_err());
        assert!(check_postal_code(Some("not-a-zip")).is_ok());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(InvalidPostalCode.to_string(), "invalid postal code");
    }
}
