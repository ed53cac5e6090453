//! Centralized console formatting and color utilities
//!
//! This module provides a unified interface for outcome colors, icons, and
//! quiet-mode handling used throughout the fieldcheck CLI.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("FIELDCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for a validation outcome.
///
/// Icons:
/// - accepted: ✓ (green)
/// - rejected: ✗ (red)
pub fn outcome_icon(valid: bool) -> ColoredString {
    if valid {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Color scheme for validation output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for accepted input
    pub fn pass(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for rejected input
    pub fn fail(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for field names and identifiers
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}
