//! Form validation for contacts, tasks and sign-up.
//!
//! Validators never stop at the first failure: every invalid field is
//! reported so the page can flag all of them at once.

use crate::libs::messages::Message;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

const PHONE_MIN_DIGITS: usize = 5;
const PHONE_MAX_DIGITS: usize = 15;

fn name_pattern() -> &'static Regex {
    NAME_PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid name pattern"))
}

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN.get_or_init(|| Regex::new(r"^\+?[\d\s]+$").expect("valid phone pattern"))
}

/// Input field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Title,
    DueDate,
    Category,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Element id of the inline error slot.
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Phone => "phone-error",
            Field::Title => "error-title",
            Field::DueDate => "error-due-date",
            Field::Category => "error-category",
            Field::Password => "password-error",
            Field::ConfirmPassword => "confirm-password-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: Message,
}

impl FieldError {
    pub fn new(field: Field, message: Message) -> Self {
        FieldError { field, message }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Optional leading `+`, digits and spaces, 5 to 15 digits in total.
pub fn is_valid_phone(phone: &str) -> bool {
    if !phone_pattern().is_match(phone) {
        return false;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

/// A due date is acceptable from `today` on.
pub fn is_valid_due_date(due: NaiveDate, today: NaiveDate) -> bool {
    due >= today
}

/// Checks name, email and phone of a contact form.
pub fn validate_contact(name: &str, email: &str, phone: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if !is_valid_name(name) {
        errors.push(FieldError::new(Field::Name, Message::OnlyTextAllowed));
    }
    if !is_valid_email(email) {
        errors.push(FieldError::new(Field::Email, Message::InvalidEmail));
    }
    if !is_valid_phone(phone) {
        errors.push(FieldError::new(Field::Phone, Message::InvalidPhone));
    }
    into_result(errors)
}

/// Checks the required fields of the task composer.
///
/// `due` is `None` when the date input is empty or unparsable.
pub fn validate_task(title: &str, due: Option<NaiveDate>, category: &str, today: NaiveDate) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push(FieldError::new(Field::Title, Message::FieldRequired));
    }
    match due {
        None => errors.push(FieldError::new(Field::DueDate, Message::FieldRequired)),
        Some(date) if !is_valid_due_date(date, today) => {
            errors.push(FieldError::new(Field::DueDate, Message::DueDateInPast))
        }
        Some(_) => {}
    }
    if category.trim().is_empty() {
        errors.push(FieldError::new(Field::Category, Message::FieldRequired));
    }
    into_result(errors)
}

fn into_result(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
