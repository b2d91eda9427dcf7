// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Select and run the checks that apply to one field, then render the outcome.

use chrono::NaiveDate;
use tracing::debug;

use crate::logic::feedback::{clear_validation, show_error, show_success};
use crate::logic::validators::{
    validate_email, validate_future_date_on, validate_password, validate_past_date_on,
    validate_phone,
};
use crate::models::field::{Field, FieldRule};
use crate::models::outcome::ValidationOutcome;

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PHONE: &str = "Please enter a valid phone number (10-15 digits)";
pub const MSG_DOB_FUTURE: &str = "Date of birth cannot be in the future";
pub const MSG_DATE_PAST: &str = "Date must be today or in the future";

/// Evaluate a field without touching its presentation.
///
/// Checks run in order and stop at the first failure:
/// 1. required + empty
/// 2. the field's resolved rule (only for non-empty values)
/// 3. minimum length (only for non-empty values)
pub fn check_field(field: &Field, today: NaiveDate) -> ValidationOutcome {
    let value = field.value();

    if value.is_empty() {
        return if field.is_required() {
            ValidationOutcome::invalid(MSG_REQUIRED)
        } else {
            ValidationOutcome::valid()
        };
    }

    let mut strength = None;
    let failure = match field.rule() {
        FieldRule::Email => (!validate_email(value)).then(|| MSG_EMAIL.to_string()),
        FieldRule::Phone => (!validate_phone(value)).then(|| MSG_PHONE.to_string()),
        FieldRule::Password => {
            let check = validate_password(value);
            strength = Some(check.strength);
            (!check.valid).then(|| check.message.to_string())
        }
        FieldRule::PastDate => {
            (!validate_past_date_on(value, today)).then(|| MSG_DOB_FUTURE.to_string())
        }
        FieldRule::FutureDate => {
            (!validate_future_date_on(value, today)).then(|| MSG_DATE_PAST.to_string())
        }
        FieldRule::Plain => None,
    };

    let failure = failure.or_else(|| {
        field
            .min_length()
            .filter(|&min| value.chars().count() < min)
            .map(|min| format!("Minimum length is {min} characters"))
    });

    let outcome = match failure {
        Some(message) => ValidationOutcome::invalid(message),
        None => ValidationOutcome::valid(),
    };
    match strength {
        Some(s) => outcome.with_strength(s),
        None => outcome,
    }
}

/// Validate a field and update its feedback. Returns whether it is valid.
///
/// Non-empty valid values are marked valid; empty optional fields return to neutral.
pub fn validate_field(field: &mut Field, today: NaiveDate) -> bool {
    let outcome = check_field(field, today);
    debug!(
        field = field.name(),
        valid = outcome.valid,
        message = outcome.message.as_deref().unwrap_or(""),
        "Field validated"
    );

    match outcome.message {
        Some(message) if !outcome.valid => show_error(field, message),
        _ if field.value().is_empty() => clear_validation(field),
        _ => show_success(field),
    }
    outcome.valid
}
