// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pure field validators. None of these panic or error; bad input is simply invalid.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::logic::clock::Clock;
use crate::models::outcome::{PasswordCheck, PasswordStrength};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

static PHONE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("phone pattern must compile"));

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;
const MEDIUM_PASSWORD_LEN: usize = 8;
const STRONG_PASSWORD_LEN: usize = 12;

/// Check `local@domain.tld` shape with a letters-only TLD of two or more characters.
///
/// ```
/// use formcheck::logic::validators::validate_email;
///
/// assert!(validate_email("jane.doe+clinic@mail.example.org"));
/// assert!(!validate_email("jane@example.c"));
/// ```
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Accept 10 to 15 digits once spaces, hyphens, parentheses, and plus signs are removed.
pub fn validate_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+')))
        .collect();
    PHONE_DIGITS.is_match(&cleaned)
}

/// Check minimum length and classify strength.
///
/// Strength is `medium` from 8 characters and `strong` from 12 characters when the
/// password also contains an ASCII uppercase letter and a digit. Symbols and
/// lowercase letters are not considered.
pub fn validate_password(password: &str) -> PasswordCheck {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return PasswordCheck {
            valid: false,
            message: "Password must be at least 6 characters long",
            strength: PasswordStrength::Weak,
        };
    }

    let mut strength = PasswordStrength::Weak;
    if len >= MEDIUM_PASSWORD_LEN {
        strength = PasswordStrength::Medium;
    }
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if len >= STRONG_PASSWORD_LEN && has_upper && has_digit {
        strength = PasswordStrength::Strong;
    }

    PasswordCheck {
        valid: true,
        message: "Password is valid",
        strength,
    }
}

/// Parse an ISO calendar date, dropping any time-of-day component.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// True when the date is today (UTC) or earlier.
pub fn validate_past_date(text: &str) -> bool {
    validate_past_date_on(text, Clock::Utc.today())
}

/// True when the date is `today` or earlier.
pub fn validate_past_date_on(text: &str, today: NaiveDate) -> bool {
    parse_calendar_date(text).is_some_and(|date| date <= today)
}

/// True when the date is today (UTC) or later.
pub fn validate_future_date(text: &str) -> bool {
    validate_future_date_on(text, Clock::Utc.today())
}

/// True when the date is `today` or later.
pub fn validate_future_date_on(text: &str, today: NaiveDate) -> bool {
    parse_calendar_date(text).is_some_and(|date| date >= today)
}

/// Parse a time of day such as `9:05`, `09:05`, or `09:05:30`.
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    ["%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

/// True when both times are present and `end` is strictly after `start`.
///
/// Values are compared as times of day, so `9:30` sorts before `10:00`.
pub fn validate_time_range(start: &str, end: &str) -> bool {
    match (parse_time_of_day(start), parse_time_of_day(end)) {
        (Some(start), Some(end)) => end > start,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last%tag@sub-domain.example.com"));
        assert!(!validate_email("plainaddress"));
        assert!(!validate_email("a@b.c"));
        assert!(!validate_email("a@b.c0m"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b.com\n"));
        assert!(!validate_email(""));
    }

    #[test]
    fn phone_strips_punctuation() {
        assert!(validate_phone("+1 (555) 123-4567"));
        assert!(validate_phone("5551234567"));
        assert!(!validate_phone("555-123-456"));
        assert!(!validate_phone("1234567890123456"));
        assert!(!validate_phone("555123456x"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not decimal ASCII.
        assert!(!validate_phone("٠١٢٣٤٥٦٧٨٩"));
    }

    #[test]
    fn password_strength_levels() {
        let empty = validate_password("");
        assert!(!empty.valid);
        assert_eq!(empty.strength, PasswordStrength::Weak);
        assert_eq!(empty.message, "Password must be at least 6 characters long");

        let short = validate_password("abcde");
        assert!(!short.valid);
        assert_eq!(short.strength, PasswordStrength::Weak);

        let six = validate_password("abcdef");
        assert!(six.valid);
        assert_eq!(six.strength, PasswordStrength::Weak);
        assert_eq!(six.message, "Password is valid");

        let medium = validate_password("abcdefgh");
        assert!(medium.valid);
        assert_eq!(medium.strength, PasswordStrength::Medium);

        let strong = validate_password("Abcdefgh123!");
        assert!(strong.valid);
        assert_eq!(strong.strength, PasswordStrength::Strong);

        let long_plain = validate_password("abcdefghijkl");
        assert!(long_plain.valid);
        assert_eq!(long_plain.strength, PasswordStrength::Medium);
    }

    #[test]
    fn strong_ignores_symbols_and_lowercase() {
        // Known weak point: no symbol or lowercase requirement for "strong".
        let check = validate_password("ABCDEFGHIJK1");
        assert_eq!(check.strength, PasswordStrength::Strong);
    }

    #[test]
    fn past_and_future_dates_include_today() {
        let today = day(2025, 6, 15);
        assert!(validate_past_date_on("2025-06-15", today));
        assert!(validate_past_date_on("1990-01-01", today));
        assert!(!validate_past_date_on("2025-06-16", today));

        assert!(validate_future_date_on("2025-06-15", today));
        assert!(validate_future_date_on("2030-12-31", today));
        assert!(!validate_future_date_on("2025-06-14", today));
    }

    #[test]
    fn date_time_of_day_is_ignored() {
        let today = day(2025, 6, 15);
        assert!(validate_past_date_on("2025-06-15T23:59", today));
        assert!(validate_future_date_on("2025-06-15T00:01:00", today));
    }

    #[test]
    fn bad_dates_are_invalid() {
        let today = day(2025, 6, 15);
        assert!(!validate_past_date_on("", today));
        assert!(!validate_future_date_on("", today));
        assert!(!validate_past_date_on("yesterday", today));
        assert!(!validate_future_date_on("2025-02-30", today));
    }

    #[test]
    fn time_ranges() {
        assert!(validate_time_range("09:00", "10:00"));
        assert!(!validate_time_range("10:00", "09:00"));
        assert!(!validate_time_range("10:00", "10:00"));
        assert!(!validate_time_range("", "10:00"));
        assert!(!validate_time_range("09:00", ""));
        assert!(!validate_time_range("soon", "10:00"));
    }

    #[test]
    fn time_ranges_compare_as_times_not_strings() {
        // As strings "9:30" > "10:00"; as times it is earlier.
        assert!(validate_time_range("9:30", "10:00"));
        assert!(validate_time_range("09:00:00", "09:00:01"));
    }

    proptest! {
        #[test]
        fn email_like_strings_pass(
            local in "[A-Za-z0-9._%+-]{1,16}",
            domain in "[A-Za-z0-9-]{1,16}",
            tld in "[A-Za-z]{2,6}",
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert!(validate_email(&email));
        }

        #[test]
        fn missing_at_fails(text in "[A-Za-z0-9._%+-]{1,32}") {
            prop_assert!(!validate_email(&text));
        }

        #[test]
        fn single_letter_tld_fails(
            local in "[a-z]{1,8}",
            domain in "[a-z]{1,8}",
            tld in "[A-Za-z]",
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert!(!validate_email(&email));
        }

        #[test]
        fn phone_digit_counts(digits in "[0-9]{10,15}") {
            prop_assert!(validate_phone(&digits));
            let formatted = format!("+{} ({})-{}", &digits[..1], &digits[1..4], &digits[4..]);
            prop_assert!(validate_phone(&formatted));
        }

        #[test]
        fn phone_wrong_lengths(short in "[0-9]{9}", long in "[0-9]{16}") {
            prop_assert!(!validate_phone(&short));
            prop_assert!(!validate_phone(&long));
        }
    }
}
