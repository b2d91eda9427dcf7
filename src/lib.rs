// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Client-side form validation with live field feedback.
//!
//! Validators in [`logic::validators`] are pure. [`logic::dispatch`] picks the
//! checks for one field and renders the outcome through [`logic::feedback`].
//! [`mvu::form::FormController`] wires field events and submission, and
//! [`mvu::PageController`] owns one controller per form on the page.

pub mod app;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod ui;
