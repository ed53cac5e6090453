//! Email shape validation with a closed TLD allow-list.

use regex::Regex;

/// Anchored email shape: local part from `{letters, digits, +, _, ., -}`,
/// `@`, domain labels from `{letters, digits, ., -}`, a literal dot, then a
/// top-level label restricted to the closed set `com|es|org|net`
/// (case-sensitive). Deliberately restrictive - this is not general email
/// validation.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+)\.(com|es|org|net)$";

/// Check the shape of an email address.
///
/// Returns `false` for absent input and for any address whose top-level
/// label is outside the allow-list, whatever the rest looks like.
pub fn check_email(email: Option<&str>) -> bool {
    match email {
        Some(email) => Regex::new(EMAIL_PATTERN).unwrap().is_match(email),
        None => false,
    }
}
