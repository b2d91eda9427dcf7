// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: field and form data types shared between validation logic and the UI.

pub mod field;
pub mod outcome;
pub mod schema;
