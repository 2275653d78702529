//! Registration schema
//!
//! Every pass checks the whole record. Issues come out in field display order
//! and, within a field, in the order the rules are declared below.

use super::field::{FieldName, FieldSet};
use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use validator::ValidateEmail;

pub const FIRST_NAME_TOO_SHORT: &str = "First name must be at least 3 characters";
pub const LAST_NAME_TOO_SHORT: &str = "Last name must be at least 3 characters";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const BIRTH_DATE_FORMAT: &str = "Date must be in YYYY-MM-DD format";
pub const BIRTH_DATE_IN_FUTURE: &str = "Date cannot be in the future";
pub const ADDRESS_TOO_SHORT: &str = "Enter your full address";

const NAME_MIN_CHARS: usize = 3;
const ADDRESS_MIN_CHARS: usize = 5;
const PASSWORD_MIN_CHARS: usize = 8;

static BIRTH_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birth date pattern is valid")
});

/// Email domains need at least one dot and an alphabetic top-level label
static EMAIL_DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$")
        .expect("email domain pattern is valid")
});

/// Loose date layouts still read as a date when the strict format fails
const LENIENT_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%Y-%m-%d",
    "%m-%d-%Y",
    "%m/%d/%Y",
    "%Y.%m.%d",
];

/// Password rules, each reported on its own
const PASSWORD_RULES: &[(fn(&str) -> bool, &str)] = &[
    (long_enough, "Password must be at least 8 characters"),
    (has_uppercase, "Password must have at least one uppercase letter"),
    (has_lowercase, "Password must have at least one lowercase letter"),
    (has_digit, "Password must have at least one number"),
    (has_symbol, "Password must have at least one special character"),
];

fn long_enough(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_CHARS
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: FieldName,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: FieldName, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validate the whole record against today's local date
pub fn validate(fields: &FieldSet) -> Vec<ValidationIssue> {
    validate_on(fields, Local::now().date_naive())
}

/// Validate the whole record, treating `today` as the latest acceptable birth date
pub fn validate_on(fields: &FieldSet, today: NaiveDate) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    min_chars(
        &mut issues,
        FieldName::FirstName,
        fields.get(FieldName::FirstName),
        NAME_MIN_CHARS,
        FIRST_NAME_TOO_SHORT,
    );
    min_chars(
        &mut issues,
        FieldName::LastName,
        fields.get(FieldName::LastName),
        NAME_MIN_CHARS,
        LAST_NAME_TOO_SHORT,
    );

    if !is_valid_email(fields.get(FieldName::Email)) {
        issues.push(ValidationIssue::new(FieldName::Email, EMAIL_INVALID));
    }

    check_birth_date(&mut issues, fields.get(FieldName::BirthDate), today);

    min_chars(
        &mut issues,
        FieldName::Address,
        fields.get(FieldName::Address),
        ADDRESS_MIN_CHARS,
        ADDRESS_TOO_SHORT,
    );

    let password = fields.get(FieldName::Password);
    for (passes, message) in PASSWORD_RULES {
        if !passes(password) {
            issues.push(ValidationIssue::new(FieldName::Password, message));
        }
    }

    tracing::debug!(count = issues.len(), "validated registration record");
    issues
}

fn min_chars(
    issues: &mut Vec<ValidationIssue>,
    field: FieldName,
    value: &str,
    min: usize,
    message: &str,
) {
    if value.chars().count() < min {
        issues.push(ValidationIssue::new(field, message));
    }
}

fn is_valid_email(value: &str) -> bool {
    value.validate_email()
        && value
            .rsplit_once('@')
            .is_some_and(|(_, domain)| EMAIL_DOMAIN_PATTERN.is_match(domain))
}

/// Format and date checks are independent. A value that is not
/// `YYYY-MM-DD` is still read loosely, so `2999/01/01` reports both problems
/// while `01-01-2000` only reports the format.
fn check_birth_date(issues: &mut Vec<ValidationIssue>, value: &str, today: NaiveDate) {
    let date = if BIRTH_DATE_PATTERN.is_match(value) {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    } else {
        issues.push(ValidationIssue::new(FieldName::BirthDate, BIRTH_DATE_FORMAT));
        parse_lenient_date(value)
    };

    match date {
        Some(date) if date <= today => {}
        _ => issues.push(ValidationIssue::new(
            FieldName::BirthDate,
            BIRTH_DATE_IN_FUTURE,
        )),
    }
}

fn parse_lenient_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    LENIENT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
