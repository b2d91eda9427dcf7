// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validation rules, feedback rendering, and per-field dispatch.

pub mod clock;
pub mod dispatch;
pub mod feedback;
pub mod validators;
