// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single form field: text input, validity marker, and the message below it.

use chrono::NaiveDate;
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::logic::dispatch::check_field;
use crate::logic::validators::parse_calendar_date;
use crate::models::field::{Field, FieldId, InputType};
use crate::models::outcome::PasswordStrength;
use crate::mvu::FormMsg;

pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 45, 45);
pub const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(35, 140, 70);

/// View-side requests produced by controller commands, applied once the widget exists.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldRequests {
    pub scroll: Option<egui::Align>,
    pub focus: bool,
}

/// Stable widget id for a field so focus survives across frames.
pub fn widget_id(form: usize, field: FieldId) -> egui::Id {
    egui::Id::new(("formcheck-field", form, field.0))
}

/// Render one field and return the events it produced this frame.
///
/// `today` comes from the owning controller's clock.
pub fn view(
    ui: &mut egui::Ui,
    form: usize,
    id: FieldId,
    field: &Field,
    requests: FieldRequests,
    today: NaiveDate,
) -> Vec<FormMsg> {
    let mut msgs = Vec::new();

    let mut label = field.label().to_string();
    if field.is_required() {
        label.push_str(" *");
    }
    ui.label(label);

    ui.horizontal(|ui| {
        let widget = widget_id(form, id);
        let mut text = field.raw_value().to_string();
        let response = ui
            .scope(|ui| {
                if field.is_marked_invalid() {
                    let widgets = &mut ui.visuals_mut().widgets;
                    widgets.inactive.bg_stroke = egui::Stroke::new(1.5, ERROR_COLOR);
                    widgets.hovered.bg_stroke = egui::Stroke::new(1.5, ERROR_COLOR);
                } else if field.is_marked_valid() {
                    let widgets = &mut ui.visuals_mut().widgets;
                    widgets.inactive.bg_stroke = egui::Stroke::new(1.0, SUCCESS_COLOR);
                }

                let edit = match field.input_type() {
                    InputType::Textarea => egui::TextEdit::multiline(&mut text).desired_rows(3),
                    _ => egui::TextEdit::singleline(&mut text),
                };
                ui.add(
                    edit.id(widget)
                        .password(matches!(field.input_type(), InputType::Password))
                        .hint_text(field.placeholder().unwrap_or(field_hint(field.input_type())))
                        .desired_width(280.0),
                )
            })
            .inner;

        if response.gained_focus() {
            msgs.push(FormMsg::Focus(id));
        }
        if response.changed() {
            msgs.push(FormMsg::Input {
                field: id,
                value: text,
            });
        }
        if response.lost_focus() {
            msgs.push(FormMsg::Blur(id));
        }
        if let Some(align) = requests.scroll {
            response.scroll_to_me(Some(align));
        }
        if requests.focus {
            ui.memory_mut(|mem| mem.request_focus(response.id));
        }

        if matches!(field.input_type(), InputType::Date) {
            render_date_picker(ui, form, id, field, today, &mut msgs);
        }

        if field.is_marked_invalid() {
            ui.label(
                egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE).color(ERROR_COLOR),
            );
        } else if field.is_marked_valid() {
            ui.label(
                egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE).color(SUCCESS_COLOR),
            );
        }
    });

    if let Some(message) = field.message() {
        ui.label(egui::RichText::new(message).small().color(ERROR_COLOR));
    }

    if let Some(strength) = check_field(field, today).strength {
        render_strength(ui, strength);
    }

    msgs
}

/// Calendar button that writes an ISO date into the field and commits it.
fn render_date_picker(
    ui: &mut egui::Ui,
    form: usize,
    id: FieldId,
    field: &Field,
    today: NaiveDate,
    msgs: &mut Vec<FormMsg>,
) {
    let parsed = parse_calendar_date(field.value());
    let mut date = parsed.unwrap_or(today);
    let salt = format!("formcheck-date-{form}-{}", id.0);
    let changed = ui
        .add(DatePickerButton::new(&mut date).id_salt(&salt).show_icon(true))
        .changed();
    msgs.extend(picked_date_msgs(id, parsed, date, changed));
}

/// Events for a picker interaction. Picking the date the field already holds is a no-op;
/// any pick into an empty or unparseable field is committed.
fn picked_date_msgs(
    id: FieldId,
    parsed: Option<NaiveDate>,
    picked: NaiveDate,
    changed: bool,
) -> Vec<FormMsg> {
    if !changed || parsed == Some(picked) {
        return Vec::new();
    }
    vec![
        FormMsg::Input {
            field: id,
            value: picked.format("%Y-%m-%d").to_string(),
        },
        FormMsg::Blur(id),
    ]
}

fn render_strength(ui: &mut egui::Ui, strength: PasswordStrength) {
    let color = match strength {
        PasswordStrength::Weak => ERROR_COLOR,
        PasswordStrength::Medium => egui::Color32::from_rgb(200, 140, 20),
        PasswordStrength::Strong => SUCCESS_COLOR,
    };
    ui.label(
        egui::RichText::new(format!("Strength: {}", strength.as_str()))
            .small()
            .color(color),
    );
}

fn field_hint(kind: &InputType) -> &'static str {
    match kind {
        InputType::Date => "YYYY-MM-DD",
        InputType::Time => "HH:MM",
        InputType::Email => "name@example.com",
        InputType::Tel => "Phone number",
        InputType::Number => "Number",
        _ => "",
    }
}
