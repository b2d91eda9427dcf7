// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Apply or remove validation feedback on a single field.
//!
//! Only the field's presentation state is touched. Because [`Presentation`]
//! holds at most one message, a field can never show two messages at once.

use crate::models::field::{Field, Presentation};

/// Mark the field invalid and attach `message`, replacing any earlier feedback.
pub fn show_error(field: &mut Field, message: impl Into<String>) {
    hide_error(field);
    field.set_presentation(Presentation::Invalid {
        message: message.into(),
    });
}

/// Remove the invalid marker and its message. A valid marker is left alone.
pub fn hide_error(field: &mut Field) {
    if field.is_marked_invalid() {
        field.set_presentation(Presentation::Neutral);
    }
}

/// Mark the field valid, dropping any error.
pub fn show_success(field: &mut Field) {
    hide_error(field);
    field.set_presentation(Presentation::Valid);
}

/// Return the field to neutral.
pub fn clear_validation(field: &mut Field) {
    field.set_presentation(Presentation::Neutral);
}
