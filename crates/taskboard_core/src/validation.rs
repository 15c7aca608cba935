//! Field-level validation rules shared by every entity.
//!
//! # Responsibility
//! - Provide pure predicates for phone, email, password, text, birthday,
//!   priority and date-range rules.
//! - Define the `ValidationError` taxonomy surfaced by constructors/setters.
//!
//! # Invariants
//! - Predicates never mutate anything and never panic on user input.
//! - Error values never carry a password.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9. ()\-]{10,25}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.\-]+@[A-Za-z0-9.\-]+$").expect("valid email regex"));

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Symbols that satisfy the special-character password rule.
pub const PASSWORD_SPECIAL_CHARS: &str = "@#$%^&+=";
/// Lowest accepted task priority.
pub const MIN_PRIORITY: i32 = 1;

/// Which password rule rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    /// Fewer than `MIN_PASSWORD_LEN` characters.
    TooShort,
    /// Missing a lowercase, uppercase, digit or special character, or
    /// containing a line break.
    MissingCharacterClass,
}

/// Synchronous validation failure raised by a constructor or setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField(&'static str),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidPassword(PasswordRule),
    FutureBirthday { birthday: NaiveDate, today: NaiveDate },
    InvalidPriority(i32),
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl ValidationError {
    /// Stable short name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyField(_) => "empty_field",
            Self::InvalidPhone(_) => "invalid_phone",
            Self::InvalidEmail(_) => "invalid_email",
            Self::InvalidPassword(_) => "invalid_password",
            Self::FutureBirthday { .. } => "future_birthday",
            Self::InvalidPriority(_) => "invalid_priority",
            Self::InvalidDateRange { .. } => "invalid_date_range",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::InvalidPhone(value) => write!(f, "invalid phone number: `{value}`"),
            Self::InvalidEmail(value) => write!(f, "invalid email format: `{value}`"),
            Self::InvalidPassword(PasswordRule::TooShort) => write!(
                f,
                "password must be at least {MIN_PASSWORD_LEN} characters long"
            ),
            Self::InvalidPassword(PasswordRule::MissingCharacterClass) => write!(
                f,
                "password must include at least one uppercase letter, one lowercase letter, \
                 one digit, and one of `{PASSWORD_SPECIAL_CHARS}`"
            ),
            Self::FutureBirthday { birthday, today } => {
                write!(f, "birthday {birthday} cannot be after today ({today})")
            }
            Self::InvalidPriority(value) => write!(
                f,
                "priority must be greater than or equal to {MIN_PRIORITY}, got {value}"
            ),
            Self::InvalidDateRange { start, end } => {
                write!(f, "start date {start} cannot be after end date {end}")
            }
        }
    }
}

impl Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Returns whether `value` is an accepted phone number. No normalization.
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Returns whether `value` is an accepted email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Checks the password policy.
///
/// Length is counted in characters. The character-class rules only look at
/// ASCII classes; any other symbol is allowed except line breaks.
pub fn check_password(value: &str) -> ValidationResult<()> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::InvalidPassword(PasswordRule::TooShort));
    }

    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut special = false;
    for c in value.chars() {
        if is_line_terminator(c) {
            return Err(ValidationError::InvalidPassword(
                PasswordRule::MissingCharacterClass,
            ));
        }
        lower |= c.is_ascii_lowercase();
        upper |= c.is_ascii_uppercase();
        digit |= c.is_ascii_digit();
        special |= PASSWORD_SPECIAL_CHARS.contains(c);
    }

    if lower && upper && digit && special {
        Ok(())
    } else {
        Err(ValidationError::InvalidPassword(
            PasswordRule::MissingCharacterClass,
        ))
    }
}

pub fn is_valid_password(value: &str) -> bool {
    check_password(value).is_ok()
}

/// Rejects the empty string. Whitespace-only input is accepted.
pub fn require_non_empty(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

pub fn check_phone_number(value: &str) -> ValidationResult<()> {
    if !is_valid_phone_number(value) {
        return Err(ValidationError::InvalidPhone(value.to_string()));
    }
    Ok(())
}

pub fn check_email(value: &str) -> ValidationResult<()> {
    if !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

/// Rejects a birthday strictly after `today`.
pub fn check_birthday_on(birthday: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if birthday > today {
        return Err(ValidationError::FutureBirthday { birthday, today });
    }
    Ok(())
}

/// Rejects a birthday after the current local date.
pub fn check_birthday(birthday: NaiveDate) -> ValidationResult<()> {
    check_birthday_on(birthday, today())
}

pub fn check_priority(priority: i32) -> ValidationResult<()> {
    if priority < MIN_PRIORITY {
        return Err(ValidationError::InvalidPriority(priority));
    }
    Ok(())
}

/// Rejects `start` strictly after `end`. Equal dates are a valid range.
pub fn check_date_range(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if start > end {
        return Err(ValidationError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}
