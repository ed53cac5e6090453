//! Calendar date validation and age arithmetic.
//!
//! Dates travel as `DD/MM/YYYY` strings. A string that fails the pattern
//! check is never decomposed into day/month/year.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Anchored `DD/MM/YYYY` shape: two digits, slash, two digits, slash, four
/// digits. `[0-9]` rather than `\d` because the contract is ASCII-only and
/// `\d` also matches other Unicode digits.
const DATE_PATTERN: &str = r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$";

/// Validate a `DD/MM/YYYY` date string.
///
/// Returns `false` for absent or empty input, for anything that does not
/// match the fixed pattern (no single-digit day or month, no alternate
/// separators, no surrounding whitespace), for a month outside 1-12, and
/// for a day outside the bounds of its month. February allows 29 days only
/// in leap years; day `00` fails the lower-bound comparison like any other
/// day below 1.
pub fn check_format_date(date: Option<&str>) -> bool {
    let (day, month, year) = match decompose(date) {
        Some(parts) => parts,
        None => return false,
    };

    if !(1..=12).contains(&month) {
        return false;
    }

    day >= 1 && day <= days_in_month(month, year)
}

/// Compute an age in whole years as of `today`.
///
/// Returns the sentinel `-1` when the birth date fails
/// [`check_format_date`]; callers must treat `-1` as "invalid input", not
/// as an age. The current date is an explicit parameter so the function
/// stays pure and reproducible; the console harness passes
/// `Local::now().date_naive()`.
///
/// No plausibility bounds are applied: a birth date in the future yields a
/// negative age with no distinct failure signal.
pub fn calculate_age(birth_date: Option<&str>, today: NaiveDate) -> i32 {
    if !check_format_date(birth_date) {
        return -1;
    }

    // Format check passed, so decomposition cannot fail here.
    let (day, month, year) = match decompose(birth_date) {
        Some(parts) => parts,
        None => return -1,
    };

    let mut age = today.year() - year;
    if (today.month(), today.day()) < (month, day) {
        // Birthday has not come around yet this year.
        age -= 1;
    }
    age
}

/// Split a pattern-conforming date string into (day, month, year).
/// Returns `None` when the input is absent, empty, or off-pattern.
fn decompose(date: Option<&str>) -> Option<(u32, u32, i32)> {
    let date = date?;
    if date.is_empty() {
        return None;
    }

    let re = Regex::new(DATE_PATTERN).unwrap();
    let caps = re.captures(date)?;

    let day = caps[1].parse().unwrap_or(0);
    let month = caps[2].parse().unwrap_or(0);
    let year = caps[3].parse().unwrap_or(0);
    Some((day, month, year))
}

/// Upper day bound for a month, leap-aware for February.
fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Divisible by 4 and not by 100, or divisible by 400.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
