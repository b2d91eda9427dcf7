// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui shell hosting every validated form on the page.
//! Routes widget events to the page controller and applies its view commands.

pub mod components;

use std::collections::HashMap;

use eframe::egui;

use crate::models::field::FieldId;
use crate::models::outcome::FormValidationResult;
use crate::mvu::form::{ScrollBehavior, ScrollBlock};
use crate::mvu::{FormCommand, FormMsg, PageController};
use crate::ui::components::field::FieldRequests;
use crate::ui::components::form;

/// Stateful egui application for the validated page.
pub struct FormCheckApp {
    page: PageController,
    inbox: Vec<(usize, FormMsg)>,
    requests: HashMap<(usize, FieldId), FieldRequests>,
    status: Option<String>,
    notice: Option<String>,
}

impl FormCheckApp {
    pub fn new(page: PageController) -> Self {
        Self {
            page,
            inbox: Vec::new(),
            requests: HashMap::new(),
            status: None,
            notice: None,
        }
    }

    /// Show a persistent notice above the forms (e.g. schema fallback).
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    /// Deliver queued messages in arrival order and collect the resulting view requests.
    fn process_inbox(&mut self) {
        for (index, msg) in std::mem::take(&mut self.inbox) {
            let mut cmds = Vec::new();
            if let Some(result) = self.page.dispatch(index, msg, &mut cmds) {
                self.status = Some(self.describe_submission(index, &result));
            }
            for cmd in cmds {
                self.apply_command(index, cmd);
            }
        }
    }

    fn apply_command(&mut self, index: usize, cmd: FormCommand) {
        match cmd {
            // Nothing is sent anywhere; blocking is reported through the status line.
            FormCommand::PreventDefault => {}
            // egui animates `scroll_to_me`, which gives the smooth behaviour.
            FormCommand::ScrollIntoView {
                field,
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Center,
            } => {
                self.requests.entry((index, field)).or_default().scroll =
                    Some(egui::Align::Center);
            }
            FormCommand::Focus(field) => {
                self.requests.entry((index, field)).or_default().focus = true;
            }
        }
    }

    fn describe_submission(&self, index: usize, result: &FormValidationResult) -> String {
        let title = self
            .page
            .form(index)
            .map(|f| f.title().to_string())
            .unwrap_or_default();
        if !result.prevented {
            return format!("{title}: submitted.");
        }
        let mut text = format!("{title}: {} invalid field(s)", result.invalid_count());
        if result.time_range == Some(false) {
            text.push_str(", end time before start time");
        }
        text.push('.');
        text
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
        }
    }
}

impl eframe::App for FormCheckApp {
    /// Drives a single frame: applies queued form events, then renders every form.
    ///
    /// Events produced while rendering are queued for the next frame and a repaint
    /// is requested so they are handled without waiting for further input.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_inbox();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Forms");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(notice) = &self.notice {
                    ui.label(
                        egui::RichText::new(notice).color(egui::Color32::from_rgb(200, 140, 20)),
                    );
                    ui.add_space(8.0);
                }
                for (index, controller) in self.page.forms().iter().enumerate() {
                    let msgs = form::view(ui, index, controller, &mut self.requests);
                    self.inbox.extend(msgs.into_iter().map(|m| (index, m)));
                    ui.add_space(12.0);
                }
            });
        });

        if !self.inbox.is_empty() || !self.requests.is_empty() {
            ctx.request_repaint();
        }
    }
}
