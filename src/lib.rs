//! # Fieldcheck - Personal Data Validation
//!
//! Fieldcheck validates user-entered personal data fields (national ID
//! numbers, calendar dates, postal codes, numeric and alphabetic strings,
//! email addresses, personal names) and computes ages from birth dates.
//!
//! ## Overview
//!
//! Every validator is a stateless pure function of its explicit arguments;
//! nothing here reads or writes shared state, and the age calculator takes
//! its clock as a parameter. Two error-reporting shapes coexist on purpose:
//! most validators answer with a plain `bool` (or a `-1` sentinel for the
//! age), while the postal code and name validators signal failure through
//! typed errors that carry a reason. Consumers branch on whichever shape
//! the field uses.
//!
//! Inputs that a front end may hand over as absent are modeled as
//! `Option<&str>`; `None` is the absent case, distinct from an empty or
//! malformed string where the contract distinguishes them.
//!
//! ## Modules
//!
//! - [`document`] - national ID (NIF-style) format check
//! - [`date`] - date format validation, leap years, and age arithmetic
//! - [`text`] - numeric-only and alphabetic-only checks
//! - [`email`] - email shape check with a closed TLD allow-list
//! - [`postal`] - postal code check (signaled failure)
//! - [`name`] - name shape check (signaled failure with reasons)
//! - [`ui`] - console color and quiet-mode helpers for the CLI
//!
//! ## Example
//!
//! ```
//! use fieldcheck::document::check_id;
//! use fieldcheck::name::{check_name, InvalidName};
//!
//! assert!(check_id(1, "12345678Z"));
//! assert_eq!(check_name(Some("Anna")), Ok(()));
//! assert_eq!(check_name(Some("A")), Err(InvalidName::TooShort(1)));
//! ```

pub mod date;
pub mod document;
pub mod email;
pub mod name;
pub mod postal;
pub mod text;
pub mod ui;
