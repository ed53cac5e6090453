//! One-shot validation of a single field value.

use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use fieldcheck::{date, document, email, name, postal, text, ui};

/// Field selector for the `check` subcommand and the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    /// National ID number (8 digits + control letter)
    Id,
    /// Calendar date in DD/MM/YYYY format
    Date,
    /// Age computed from a DD/MM/YYYY birth date
    Age,
    /// Five-digit postal code
    PostalCode,
    /// Digits-only string
    Numeric,
    /// Letters-only string
    Alphabetic,
    /// Email address (restricted TLD allow-list)
    Email,
    /// Personal name
    Name,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Id => write!(f, "id"),
            Field::Date => write!(f, "date"),
            Field::Age => write!(f, "age"),
            Field::PostalCode => write!(f, "postal-code"),
            Field::Numeric => write!(f, "numeric"),
            Field::Alphabetic => write!(f, "alphabetic"),
            Field::Email => write!(f, "email"),
            Field::Name => write!(f, "name"),
        }
    }
}

/// Outcome of a single validation, serializable for `--json` output.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    /// Field that was validated
    pub field: String,
    /// Raw value as entered
    pub value: String,
    /// Whether the value passed the field's rule
    pub valid: bool,
    /// Computed age, or the signaled failure reason, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Run the matching validator against a raw value.
///
/// Exactly one validator runs per call; the raw string is passed through
/// unchanged. `type_code` only matters for [`Field::Id`].
pub fn evaluate(field: Field, value: &str, type_code: i32) -> CheckOutcome {
    let (valid, detail) = match field {
        Field::Id => (document::check_id(type_code, value), None),
        Field::Date => (date::check_format_date(Some(value)), None),
        Field::Age => {
            let age = date::calculate_age(Some(value), Local::now().date_naive());
            if age != -1 {
                (true, Some(age.to_string()))
            } else {
                (false, None)
            }
        }
        Field::PostalCode => match postal::check_postal_code(Some(value)) {
            Ok(()) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        },
        Field::Numeric => (text::is_numeric(Some(value)), None),
        Field::Alphabetic => (text::is_alphabetic(Some(value)), None),
        Field::Email => (email::check_email(Some(value)), None),
        Field::Name => match name::check_name(Some(value)) {
            Ok(()) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        },
    };

    CheckOutcome {
        field: field.to_string(),
        value: value.to_string(),
        valid,
        detail,
    }
}

/// Fixed display message for an outcome, as the interactive tester prints it.
pub fn message(field: Field, outcome: &CheckOutcome) -> String {
    match field {
        Field::Id => pick(outcome, "The ID is correct", "Wrong ID"),
        Field::Date => pick(outcome, "The date is correct", "Wrong date format"),
        Field::Age => match &outcome.detail {
            Some(age) if outcome.valid => format!("Your age is: {}", age),
            _ => "Invalid birth date".to_string(),
        },
        Field::PostalCode => pick(
            outcome,
            "The postal code is correct",
            "Wrong postal code format",
        ),
        Field::Numeric => pick(outcome, "The string is numeric", "The string is not numeric"),
        Field::Alphabetic => pick(
            outcome,
            "The string contains only alphabetic characters",
            "The string contains non-alphabetic characters",
        ),
        Field::Email => pick(outcome, "The email is correct", "Wrong email format"),
        Field::Name => pick(outcome, "The name is correct", "Wrong name format"),
    }
}

fn pick(outcome: &CheckOutcome, pass: &str, fail: &str) -> String {
    if outcome.valid { pass } else { fail }.to_string()
}

/// Print an outcome with the standard icon and coloring, honoring quiet
/// mode.
pub fn print_outcome(field: Field, outcome: &CheckOutcome) {
    if ui::is_quiet() {
        return;
    }

    let text = message(field, outcome);
    if outcome.valid {
        println!("{} {}", ui::outcome_icon(true), ui::colors::pass(&text));
    } else {
        println!("{} {}", ui::outcome_icon(false), ui::colors::fail(&text));
    }
}

/// Handle `fieldcheck check <field> <value>`.
///
/// Exit code 1 when the value is rejected, so the command is scriptable;
/// under quiet mode only the exit code speaks. JSON output prints
/// regardless of quiet mode - it is machine output.
pub fn cmd_check(field: Field, value: &str, type_code: i32, json: bool) -> Result<()> {
    let outcome = evaluate(field, value, type_code);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(field, &outcome);
    }

    if !outcome.valid {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_id_uses_type_code() {
        assert!(evaluate(Field::Id, "12345678Z", 1).valid);
        assert!(!evaluate(Field::Id, "12345678Z", 2).valid);
    }

    #[test]
    fn test_evaluate_postal_code_carries_reason() {
        let outcome = evaluate(Field::PostalCode, "28001", 1);
        assert!(!outcome.valid);
        assert_eq!(outcome.detail.as_deref(), Some("invalid postal code"));

        let outcome = evaluate(Field::PostalCode, "2800", 1);
        assert!(outcome.valid);
        assert_eq!(outcome.detail, None);
    }

    #[test]
    fn test_evaluate_name_carries_reason() {
        let outcome = evaluate(Field::Name, "Anna2", 1);
        assert!(!outcome.valid);
        assert_eq!(outcome.detail.as_deref(), Some("name cannot contain digits"));
    }

    #[test]
    fn test_evaluate_age_detail_is_the_age() {
        // A birth date far in the past always yields a valid positive age.
        let outcome = evaluate(Field::Age, "01/01/1950", 1);
        assert!(outcome.valid);
        let age: i32 = outcome.detail.unwrap().parse().unwrap();
        assert!(age > 0);
    }

    #[test]
    fn test_evaluate_age_invalid_input() {
        let outcome = evaluate(Field::Age, "31/02/1990", 1);
        assert!(!outcome.valid);
        assert_eq!(outcome.detail, None);
    }

    #[test]
    fn test_messages_match_the_tester_wording() {
        let ok = evaluate(Field::Email, "user@example.com", 1);
        assert_eq!(message(Field::Email, &ok), "The email is correct");

        let bad = evaluate(Field::Email, "user@example.dev", 1);
        assert_eq!(message(Field::Email, &bad), "Wrong email format");

        let age = evaluate(Field::Age, "not-a-date", 1);
        assert_eq!(message(Field::Age, &age), "Invalid birth date");
    }

    #[test]
    fn test_json_outcome_shape() {
        let outcome = evaluate(Field::Name, "A", 1);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["field"], "name");
        assert_eq!(json["value"], "A");
        assert_eq!(json["valid"], false);
        assert_eq!(json["detail"], "name must have at least 2 characters, got 1");
    }

    #[test]
    fn test_json_outcome_omits_empty_detail() {
        let outcome = evaluate(Field::Numeric, "007", 1);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["valid"], true);
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_field_display_matches_cli_names() {
        assert_eq!(Field::PostalCode.to_string(), "postal-code");
        assert_eq!(Field::Id.to_string(), "id");
    }
}
