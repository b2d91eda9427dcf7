// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page-level registry owning one validation controller per form.

pub mod form;

use tracing::{debug, info};

use crate::logic::clock::Clock;
use crate::models::outcome::FormValidationResult;
use crate::models::schema::PageSchema;

pub use form::{FormCommand, FormController, FormMsg};

/// Attach validation to a single form selected by `#id` or `id`.
///
/// Returns `None` when no such form exists.
pub fn init_form_validation(
    page: &PageSchema,
    selector: &str,
    clock: Clock,
) -> Option<FormController> {
    let Some(schema) = page.find_form(selector) else {
        debug!(selector, "No form matches selector; skipping");
        return None;
    };
    Some(FormController::attach(schema, clock))
}

/// All form controllers on a page. Built once at startup; forms share no state.
#[derive(Clone, Debug, Default)]
pub struct PageController {
    forms: Vec<FormController>,
}

impl PageController {
    /// Attach a controller to every form declared on the page, in document order.
    pub fn bootstrap(page: &PageSchema, clock: Clock) -> Self {
        let forms: Vec<FormController> = page
            .forms
            .iter()
            .map(|schema| FormController::attach(schema, clock))
            .collect();
        info!(forms = forms.len(), "Form validation ready");
        Self { forms }
    }

    pub fn forms(&self) -> &[FormController] {
        &self.forms
    }

    pub fn form(&self, index: usize) -> Option<&FormController> {
        self.forms.get(index)
    }

    /// Find a controller by `#id` or `id`.
    pub fn find(&self, selector: &str) -> Option<(usize, &FormController)> {
        let id = selector.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        self.forms.iter().enumerate().find(|(_, f)| f.id() == id)
    }

    /// Deliver a message to one form. Unknown indices are ignored.
    pub fn dispatch(
        &mut self,
        index: usize,
        msg: FormMsg,
        cmds: &mut Vec<FormCommand>,
    ) -> Option<FormValidationResult> {
        self.forms.get_mut(index)?.update(msg, cmds)
    }
}
