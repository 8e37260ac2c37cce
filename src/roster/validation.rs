//! Field validation.
//!
//! Every check comes in a validate-then-retry shape: it takes the raw input
//! and returns either the cleaned, typed value or a [`ValidationError`] whose
//! message is what the user sees before being asked again. The same checks
//! run when records are created, updated, and loaded from disk.

use crate::model::{NewStudent, StudentRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_AGE: u32 = 5;
pub const MAX_AGE: u32 = 100;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty!")]
    EmptyName,

    #[error("Age must be a number between 5 and 100!")]
    InvalidAge,

    #[error("Invalid email format! Please enter a valid email.")]
    InvalidEmail,

    #[error("Invalid phone number! Please enter 10-15 digits.")]
    InvalidPhone,

    #[error("Course cannot be empty!")]
    EmptyCourse,
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn parse_name(input: &str) -> Result<String, ValidationError> {
    non_empty(input).ok_or(ValidationError::EmptyName)
}

pub fn parse_course(input: &str) -> Result<String, ValidationError> {
    non_empty(input).ok_or(ValidationError::EmptyCourse)
}

/// Accepts plain decimal digits only; signs, spaces inside, and decimals are rejected.
pub fn parse_age(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAge);
    }
    let age = trimmed
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidAge)?;
    check_age(age)
}

pub fn check_age(age: u32) -> Result<u32, ValidationError> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(ValidationError::InvalidAge)
    }
}

pub fn parse_email(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if validate_email(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn parse_phone(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if validate_phone(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Validates a new record's fields, returning them trimmed.
pub fn check_new(fields: NewStudent) -> Result<NewStudent, ValidationError> {
    Ok(NewStudent {
        name: parse_name(&fields.name)?,
        age: check_age(fields.age)?,
        email: parse_email(&fields.email)?,
        phone: parse_phone(&fields.phone)?,
        course: parse_course(&fields.course)?,
    })
}

/// Runs the creation checks against a stored record.
pub fn validate_record(record: &StudentRecord) -> Result<(), ValidationError> {
    if record.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    check_age(record.age)?;
    if !validate_email(&record.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !validate_phone(&record.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if record.course.trim().is_empty() {
        return Err(ValidationError::EmptyCourse);
    }
    Ok(())
}

fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
