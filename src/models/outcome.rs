// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Transient validation results produced by validators, the dispatcher, and form submission.

use crate::models::field::FieldId;

/// Password strength classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    #[default]
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Structured result of [`validate_password`](crate::logic::validators::validate_password).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordCheck {
    pub valid: bool,
    pub message: &'static str,
    pub strength: PasswordStrength,
}

/// Result of validating a single field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the field passed every applicable check.
    pub valid: bool,
    /// Failure message for invalid fields.
    pub message: Option<String>,
    /// Strength classification, only set for password fields with a value.
    pub strength: Option<PasswordStrength>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
            strength: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            strength: None,
        }
    }

    pub fn with_strength(mut self, strength: PasswordStrength) -> Self {
        self.strength = Some(strength);
        self
    }
}

/// Aggregate result of a submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValidationResult {
    /// Per-field validity in document order.
    pub fields: Vec<(FieldId, bool)>,
    /// Cross-field time-range verdict; `None` when the check did not apply.
    pub time_range: Option<bool>,
    /// First field marked invalid after validation, if any.
    pub first_invalid: Option<FieldId>,
    /// Whether the default submit action was suppressed.
    pub prevented: bool,
}

impl FormValidationResult {
    pub fn fields_valid(&self) -> bool {
        self.fields.iter().all(|(_, ok)| *ok)
    }

    pub fn is_valid(&self) -> bool {
        self.fields_valid() && self.time_range.unwrap_or(true)
    }

    /// Number of fields that failed their own checks (excludes the time-range check).
    pub fn invalid_count(&self) -> usize {
        self.fields.iter().filter(|(_, ok)| !*ok).count()
    }
}
