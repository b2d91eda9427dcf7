// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! One form card: its fields followed by the submit button.

use std::collections::HashMap;

use eframe::egui;

use crate::models::field::FieldId;
use crate::mvu::{FormController, FormMsg};
use crate::ui::components::field::{self, FieldRequests};

/// Render a form and return its events. Consumed requests are removed from `requests`.
pub fn view(
    ui: &mut egui::Ui,
    index: usize,
    form: &FormController,
    requests: &mut HashMap<(usize, FieldId), FieldRequests>,
) -> Vec<FormMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.heading(form.title());
        ui.add_space(6.0);

        let today = form.clock().today();
        for (idx, f) in form.fields().iter().enumerate() {
            let id = FieldId(idx);
            let req = requests.remove(&(index, id)).unwrap_or_default();
            msgs.extend(field::view(ui, index, id, f, req, today));
            ui.add_space(6.0);
        }

        ui.add_space(4.0);
        if ui
            .button(format!(
                "{} {}",
                egui_phosphor::regular::PAPER_PLANE_RIGHT,
                form.submit_label()
            ))
            .clicked()
        {
            msgs.push(FormMsg::Submit);
        }
    });

    msgs
}
