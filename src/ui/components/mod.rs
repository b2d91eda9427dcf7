// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components rendering controller state and emitting form messages.

pub mod field;
pub mod form;
