// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form field model: declared input type, resolved validation rule, value, and presentation state.

use crate::models::schema::FieldSchema;

/// Position of a field within its form, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(pub usize);

/// Declared input type of a control (the HTML `type` attribute equivalent).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Password,
    Date,
    Time,
    Number,
    Textarea,
    Select,
    Other(String),
}

impl InputType {
    /// Creates an `InputType` from a type token.
    ///
    /// Unknown tokens are kept verbatim as `InputType::Other`.
    ///
    /// ```
    /// use formcheck::models::field::InputType;
    ///
    /// assert_eq!(InputType::from_str("email"), InputType::Email);
    /// assert_eq!(InputType::from_str("color"), InputType::Other("color".into()));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "email" => Self::Email,
            "tel" => Self::Tel,
            "password" => Self::Password,
            "date" => Self::Date,
            "time" => Self::Time,
            "number" => Self::Number,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Password => "password",
            Self::Date => "date",
            Self::Time => "time",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

/// Type-specific check applied to a non-empty value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    Email,
    Phone,
    Password,
    /// Date that must not lie after today (date of birth).
    PastDate,
    /// Date that must be today or later (appointment date).
    FutureDate,
    Plain,
}

impl FieldRule {
    /// Resolve the rule for a control from its input type and name.
    ///
    /// Email wins over phone, which wins over password; date rules only
    /// apply to `date` inputs named `dob` or `date`.
    pub fn resolve(input_type: &InputType, name: &str) -> Self {
        match (input_type, name) {
            (InputType::Email, _) | (_, "email") => Self::Email,
            (InputType::Tel, _) | (_, "phone") => Self::Phone,
            (InputType::Password, _) => Self::Password,
            (InputType::Date, "dob") => Self::PastDate,
            (InputType::Date, "date") => Self::FutureDate,
            _ => Self::Plain,
        }
    }
}

/// Visual validation state of a field. A field is in exactly one of these at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Presentation {
    #[default]
    Neutral,
    /// Marked invalid with a single visible message.
    Invalid { message: String },
    Valid,
}

/// One input control under validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    label: String,
    placeholder: Option<String>,
    input_type: InputType,
    rule: FieldRule,
    required: bool,
    min_length: Option<usize>,
    raw_value: String,
    presentation: Presentation,
}

impl Field {
    /// Build a field with a resolved rule and neutral presentation.
    pub fn new(name: impl Into<String>, input_type: InputType) -> Self {
        let name = name.into();
        let rule = FieldRule::resolve(&input_type, &name);
        Self {
            label: name.clone(),
            name,
            placeholder: None,
            input_type,
            rule,
            required: false,
            min_length: None,
            raw_value: String::new(),
            presentation: Presentation::Neutral,
        }
    }

    pub fn from_schema(schema: &FieldSchema) -> Self {
        let mut field = Self::new(schema.name.clone(), InputType::from_str(&schema.kind))
            .required(schema.required)
            .with_value(schema.value.clone().unwrap_or_default());
        field.min_length = schema.min_length();
        if let Some(label) = schema.label.as_ref().filter(|l| !l.trim().is_empty()) {
            field.label = label.clone();
        }
        field.placeholder = schema.placeholder.clone().filter(|p| !p.trim().is_empty());
        field
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.raw_value = value.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn input_type(&self) -> &InputType {
        &self.input_type
    }

    pub fn rule(&self) -> FieldRule {
        self.rule
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// Current value with surrounding whitespace removed.
    pub fn value(&self) -> &str {
        self.raw_value.trim()
    }

    /// Value exactly as typed.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.raw_value = value.into();
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub(crate) fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = presentation;
    }

    pub fn is_marked_invalid(&self) -> bool {
        matches!(self.presentation, Presentation::Invalid { .. })
    }

    pub fn is_marked_valid(&self) -> bool {
        matches!(self.presentation, Presentation::Valid)
    }

    /// True when either marker is shown.
    pub fn has_feedback(&self) -> bool {
        !matches!(self.presentation, Presentation::Neutral)
    }

    /// Visible message attached after the field, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.presentation {
            Presentation::Invalid { message } => Some(message),
            _ => None,
        }
    }
}
