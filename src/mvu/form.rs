// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Per-form controller in MVU style: field events in, feedback and view commands out.

use tracing::{debug, info};

use crate::logic::clock::Clock;
use crate::logic::dispatch::validate_field;
use crate::logic::feedback::show_error;
use crate::logic::validators::validate_time_range;
use crate::models::field::{Field, FieldId};
use crate::models::outcome::FormValidationResult;
use crate::models::schema::FormSchema;

pub const START_TIME_FIELD: &str = "start_time";
pub const END_TIME_FIELD: &str = "end_time";
pub const MSG_TIME_RANGE: &str = "End time must be after start time";

/// Events delivered by the host view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMsg {
    Blur(FieldId),
    Focus(FieldId),
    /// The user edited a field; carries the new raw text.
    Input { field: FieldId, value: String },
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Where the field lands in the visible area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Center,
}

/// Side effects the host view must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormCommand {
    /// Suppress the default submit action.
    PreventDefault,
    ScrollIntoView {
        field: FieldId,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    },
    Focus(FieldId),
}

/// Controller phase. `Validating` only lasts for the duration of one handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    #[default]
    Idle,
    Validating,
}

/// Validation controller bound to one form.
#[derive(Clone, Debug)]
pub struct FormController {
    id: String,
    title: String,
    submit_label: String,
    fields: Vec<Field>,
    state: ControllerState,
    clock: Clock,
}

impl FormController {
    /// Bind a controller to the form described by `schema`.
    pub fn attach(schema: &FormSchema, clock: Clock) -> Self {
        let fields: Vec<Field> = schema.fields.iter().map(Field::from_schema).collect();
        debug!(form = %schema.id, fields = fields.len(), "Form controller attached");
        Self {
            id: schema.id.clone(),
            title: schema.display_title().to_string(),
            submit_label: schema
                .submit_label
                .clone()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| "Submit".to_string()),
            fields,
            state: ControllerState::Idle,
            clock,
        }
    }

    /// Bind a controller to already-built fields.
    pub fn from_fields(id: impl Into<String>, fields: Vec<Field>, clock: Clock) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            submit_label: "Submit".to_string(),
            fields,
            state: ControllerState::Idle,
            clock,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.0)
    }

    /// First field with the given name, in document order.
    pub fn field_named(&self, name: &str) -> Option<(FieldId, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.name() == name)
            .map(|(idx, f)| (FieldId(idx), f))
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// First field currently marked invalid, in document order.
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.fields
            .iter()
            .position(Field::is_marked_invalid)
            .map(FieldId)
    }

    /// Route a message to its handler. Only `Submit` yields a result.
    pub fn update(
        &mut self,
        msg: FormMsg,
        cmds: &mut Vec<FormCommand>,
    ) -> Option<FormValidationResult> {
        match msg {
            FormMsg::Blur(id) => {
                self.on_blur(id);
                None
            }
            FormMsg::Focus(id) => {
                self.on_focus(id);
                None
            }
            FormMsg::Input { field, value } => {
                self.on_input(field, value);
                None
            }
            FormMsg::Submit => Some(self.on_submit(cmds)),
        }
    }

    /// Validate the field that lost focus, whatever its current state.
    pub fn on_blur(&mut self, id: FieldId) {
        self.with_validating(|ctl| {
            ctl.validate_one(id);
        });
    }

    /// Store the new text; re-validate only once the field already shows feedback.
    pub fn on_input(&mut self, id: FieldId, value: String) {
        let Some(field) = self.fields.get_mut(id.0) else {
            return;
        };
        field.set_value(value);
        if field.has_feedback() {
            self.with_validating(|ctl| {
                ctl.validate_one(id);
            });
        }
    }

    /// Reserved hook; focusing a field never changes its feedback.
    pub fn on_focus(&mut self, _id: FieldId) {}

    /// Validate every field plus the time range and decide whether submission proceeds.
    pub fn on_submit(&mut self, cmds: &mut Vec<FormCommand>) -> FormValidationResult {
        let mut result = self.with_validating(|ctl| {
            let today = ctl.clock.today();
            let fields: Vec<(FieldId, bool)> = ctl
                .fields
                .iter_mut()
                .enumerate()
                .map(|(idx, field)| (FieldId(idx), validate_field(field, today)))
                .collect();
            let time_range = ctl.check_time_range();
            FormValidationResult {
                fields,
                time_range,
                first_invalid: None,
                prevented: false,
            }
        });

        if result.is_valid() {
            info!(form = %self.id, "Form submitted");
            return result;
        }

        result.prevented = true;
        result.first_invalid = self.first_invalid();
        cmds.push(FormCommand::PreventDefault);
        if let Some(first) = result.first_invalid {
            cmds.push(FormCommand::ScrollIntoView {
                field: first,
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Center,
            });
            cmds.push(FormCommand::Focus(first));
        }
        info!(
            form = %self.id,
            invalid = result.invalid_count(),
            time_range = ?result.time_range,
            "Form submission blocked"
        );
        result
    }

    fn validate_one(&mut self, id: FieldId) -> Option<bool> {
        let today = self.clock.today();
        self.fields
            .get_mut(id.0)
            .map(|field| validate_field(field, today))
    }

    /// Cross-field check; `None` unless both time fields exist and hold values.
    fn check_time_range(&mut self) -> Option<bool> {
        let (_, start) = self.field_named(START_TIME_FIELD)?;
        let start = start.value().to_string();
        let (end_id, end) = self.field_named(END_TIME_FIELD)?;
        if start.is_empty() || end.value().is_empty() {
            return None;
        }

        let ok = validate_time_range(&start, end.value());
        if !ok && let Some(end) = self.fields.get_mut(end_id.0) {
            show_error(end, MSG_TIME_RANGE);
        }
        Some(ok)
    }

    fn with_validating<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.state = ControllerState::Validating;
        let out = f(self);
        self.state = ControllerState::Idle;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dispatch::MSG_REQUIRED;
    use crate::models::field::InputType;
    use chrono::NaiveDate;

    fn clock() -> Clock {
        Clock::Fixed(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    fn appointment(start: &str, end: &str) -> FormController {
        FormController::from_fields(
            "appointment",
            vec![
                Field::new("date", InputType::Date).with_value("2025-06-20"),
                Field::new("start_time", InputType::Time).with_value(start),
                Field::new("end_time", InputType::Time).with_value(end),
            ],
            clock(),
        )
    }

    #[test]
    fn required_empty_email_blocks_and_focuses() {
        let mut ctl = FormController::from_fields(
            "login",
            vec![Field::new("email", InputType::Email).required(true)],
            clock(),
        );
        let mut cmds = Vec::new();

        let result = ctl.update(FormMsg::Submit, &mut cmds).unwrap();

        assert!(result.prevented);
        assert_eq!(result.first_invalid, Some(FieldId(0)));
        assert_eq!(ctl.fields()[0].message(), Some(MSG_REQUIRED));
        assert_eq!(
            cmds,
            vec![
                FormCommand::PreventDefault,
                FormCommand::ScrollIntoView {
                    field: FieldId(0),
                    behavior: ScrollBehavior::Smooth,
                    block: ScrollBlock::Center,
                },
                FormCommand::Focus(FieldId(0)),
            ]
        );
        assert_eq!(ctl.state(), ControllerState::Idle);
    }

    #[test]
    fn reversed_time_range_blocks_on_end_time() {
        let mut ctl = appointment("10:00", "09:00");
        let mut cmds = Vec::new();

        let result = ctl.on_submit(&mut cmds);

        assert!(result.fields_valid(), "individual fields are fine");
        assert_eq!(result.time_range, Some(false));
        assert!(!result.is_valid());
        assert!(cmds.contains(&FormCommand::PreventDefault));
        let (_, end) = ctl.field_named("end_time").unwrap();
        assert_eq!(end.message(), Some(MSG_TIME_RANGE));
        assert_eq!(result.first_invalid, Some(FieldId(2)));
    }

    #[test]
    fn valid_form_is_not_prevented() {
        let mut ctl = FormController::from_fields(
            "register",
            vec![
                Field::new("email", InputType::Email)
                    .required(true)
                    .with_value("a@b.org"),
                Field::new("phone", InputType::Tel).with_value("555 123 4567"),
                Field::new("nickname", InputType::Text),
            ],
            clock(),
        );
        let mut cmds = Vec::new();

        let result = ctl.on_submit(&mut cmds);

        assert!(result.is_valid());
        assert!(!result.prevented);
        assert_eq!(result.time_range, None);
        assert!(cmds.is_empty());
        assert!(ctl.fields()[0].is_marked_valid());
        assert!(!ctl.fields()[2].has_feedback());
    }

    #[test]
    fn submit_marks_every_invalid_field() {
        let mut ctl = FormController::from_fields(
            "register",
            vec![
                Field::new("name", InputType::Text).with_value("Ada"),
                Field::new("email", InputType::Email).required(true),
                Field::new("phone", InputType::Tel).with_value("12"),
            ],
            clock(),
        );
        let mut cmds = Vec::new();

        let result = ctl.on_submit(&mut cmds);

        assert_eq!(result.invalid_count(), 2);
        assert!(ctl.fields()[1].is_marked_invalid());
        assert!(ctl.fields()[2].is_marked_invalid());
        assert_eq!(result.first_invalid, Some(FieldId(1)));
    }

    #[test]
    fn time_range_skipped_when_one_side_empty() {
        let mut ctl = appointment("10:00", "");
        let mut cmds = Vec::new();

        let result = ctl.on_submit(&mut cmds);

        assert_eq!(result.time_range, None);
        assert!(result.is_valid());
    }

    #[test]
    fn time_range_compares_unpadded_hours() {
        let mut ctl = appointment("9:30", "10:00");
        let result = ctl.on_submit(&mut Vec::new());
        assert_eq!(result.time_range, Some(true));
    }

    #[test]
    fn time_range_error_is_the_only_message_on_end_time() {
        let mut ctl = appointment("10:00", "09:00");
        ctl.on_submit(&mut Vec::new());
        ctl.on_submit(&mut Vec::new());
        let (_, end) = ctl.field_named("end_time").unwrap();
        assert_eq!(end.message(), Some(MSG_TIME_RANGE));
        assert!(!end.is_marked_valid());
    }

    #[test]
    fn input_before_feedback_does_not_validate() {
        let mut ctl = FormController::from_fields(
            "login",
            vec![Field::new("email", InputType::Email)],
            clock(),
        );
        ctl.update(
            FormMsg::Input {
                field: FieldId(0),
                value: "not-an-email".into(),
            },
            &mut Vec::new(),
        );
        assert!(!ctl.fields()[0].has_feedback());
        assert_eq!(ctl.fields()[0].raw_value(), "not-an-email");
    }

    #[test]
    fn blur_then_input_keeps_feedback_live() {
        let mut ctl = FormController::from_fields(
            "login",
            vec![Field::new("email", InputType::Email).with_value("jane@")],
            clock(),
        );
        ctl.update(FormMsg::Blur(FieldId(0)), &mut Vec::new());
        assert!(ctl.fields()[0].is_marked_invalid());

        ctl.on_input(FieldId(0), "jane@example.org".into());
        assert!(ctl.fields()[0].is_marked_valid());
    }

    #[test]
    fn focus_is_a_no_op() {
        let mut ctl = FormController::from_fields(
            "login",
            vec![Field::new("email", InputType::Email).with_value("bad")],
            clock(),
        );
        ctl.on_blur(FieldId(0));
        let before = ctl.fields().to_vec();
        ctl.update(FormMsg::Focus(FieldId(0)), &mut Vec::new());
        assert_eq!(ctl.fields(), before.as_slice());
    }

    #[test]
    fn unknown_field_ids_are_ignored() {
        let mut ctl = FormController::from_fields(
            "login",
            vec![Field::new("email", InputType::Email)],
            clock(),
        );
        ctl.on_blur(FieldId(7));
        ctl.on_input(FieldId(7), "x".into());
        assert!(!ctl.fields()[0].has_feedback());
        assert_eq!(ctl.state(), ControllerState::Idle);
    }

    #[test]
    fn attach_reads_schema() {
        let page = crate::models::schema::demo_page().unwrap();
        let schema = page.find_form("appointment").unwrap();
        let ctl = FormController::attach(schema, clock());
        assert_eq!(ctl.id(), "appointment");
        assert_eq!(ctl.submit_label(), "Book");
        assert!(ctl.field_named(START_TIME_FIELD).is_some());
        assert!(ctl.field_named(END_TIME_FIELD).is_some());
    }
}
