//! Field-level validation primitives.
//!
//! Each schema collects *all* violations for a submission rather than failing
//! on the first, so a form can surface every problem at once. The helpers here
//! are pure: they inspect a raw value and push a [`ValidationError`] into the
//! caller's accumulator when the value is unacceptable.

use carepulse_types::{EmailAddress, NonEmptyText, PhoneNumber};

use crate::directory::{find_doctor, is_identification_type};

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending form field.
    pub field: &'static str,
    /// Human-readable explanation.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validates a required text field whose trimmed length must fall within
/// `min..=max` characters. Returns the accepted value on success.
pub(crate) fn check_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<NonEmptyText> {
    match NonEmptyText::bounded(value, min, max) {
        Ok(text) => Some(text),
        Err(e) => {
            errors.push(ValidationError::new(field, e.to_string()));
            None
        }
    }
}

/// Validates a syntactically plausible email address.
pub(crate) fn check_email(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<EmailAddress> {
    match EmailAddress::parse(value) {
        Ok(email) => Some(email),
        Err(e) => {
            errors.push(ValidationError::new(field, e.to_string()));
            None
        }
    }
}

/// Validates a phone number by digit count.
pub(crate) fn check_phone(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<PhoneNumber> {
    match PhoneNumber::parse(value) {
        Ok(phone) => Some(phone),
        Err(e) => {
            errors.push(ValidationError::new(field, e.to_string()));
            None
        }
    }
}

/// Validates that a physician name appears in the doctor directory.
pub(crate) fn check_physician(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match find_doctor(value.trim()) {
        Some(doctor) => Some(doctor.name.to_owned()),
        None => {
            errors.push(ValidationError::new(
                field,
                "Please select a physician from the directory",
            ));
            None
        }
    }
}

/// Validates that an identification type is one of the accepted kinds.
pub(crate) fn check_identification_type(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    let trimmed = value.trim();
    if is_identification_type(trimmed) {
        Some(trimmed.to_owned())
    } else {
        errors.push(ValidationError::new(
            field,
            "Identification type is not recognised",
        ));
        None
    }
}

/// Validates a consent checkbox, which must be ticked.
pub(crate) fn check_consent(
    field: &'static str,
    value: bool,
    message: &str,
    errors: &mut Vec<ValidationError>,
) {
    if !value {
        errors.push(ValidationError::new(field, message));
    }
}

/// Normalises an optional free-text field: blank input becomes `None`,
/// anything else is kept verbatim (content is unvalidated).
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
