//! Personal name shape validation.

use std::fmt;

/// Minimum accepted name length, in characters.
const MIN_NAME_LEN: usize = 2;
/// Maximum accepted name length, in characters.
const MAX_NAME_LEN: usize = 50;

/// Signaled failure raised by [`check_name`], carrying the first
/// applicable rejection reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidName {
    /// Input was absent.
    Missing,
    /// Fewer than [`MIN_NAME_LEN`] characters; carries the observed length.
    TooShort(usize),
    /// More than [`MAX_NAME_LEN`] characters; carries the observed length.
    TooLong(usize),
    /// At least one ASCII digit present.
    ContainsDigit,
}

impl fmt::Display for InvalidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidName::Missing => write!(f, "name is required"),
            InvalidName::TooShort(len) => write!(
                f,
                "name must have at least {} characters, got {}",
                MIN_NAME_LEN, len
            ),
            InvalidName::TooLong(len) => write!(
                f,
                "name cannot have more than {} characters, got {}",
                MAX_NAME_LEN, len
            ),
            InvalidName::ContainsDigit => write!(f, "name cannot contain digits"),
        }
    }
}

impl std::error::Error for InvalidName {}

/// Check the shape of a personal name.
///
/// Reasons are reported in fixed priority order: missing input, then too
/// short, then too long, then digit presence (only checked once the length
/// bounds pass). Punctuation and symbols are NOT rejected; digit presence
/// is the only content rule. Lengths are counted in characters.
pub fn check_name(name: Option<&str>) -> Result<(), InvalidName> {
    let name = name.ok_or(InvalidName::Missing)?;

    let len = name.chars().count();
    if len < MIN_NAME_LEN {
        return Err(InvalidName::TooShort(len));
    }
    if len > MAX_NAME_LEN {
        return Err(InvalidName::TooLong(len));
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(InvalidName::ContainsDigit);
    }

    Ok(())
}
