// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Source of "today" for date checks.

use chrono::{NaiveDate, Utc};

/// Calendar used to decide what "today" is. Dates are compared as UTC calendar days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// Current UTC date.
    #[default]
    Utc,
    /// Pinned date, used by tests and replays.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(self) -> NaiveDate {
        match self {
            Self::Utc => Utc::now().date_naive(),
            Self::Fixed(date) => date,
        }
    }
}
