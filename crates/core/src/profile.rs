//! The patient intake step: the first, minimal identity capture.
//!
//! A visitor submits name, email, and phone. On successful validation a
//! [`PatientProfile`] is created with a freshly generated opaque identifier.
//! Re-submission overwrites the prior profile wholesale.

use carepulse_types::{EmailAddress, NonEmptyText, PhoneNumber};
use serde::{Deserialize, Serialize};

use crate::validation::{check_email, check_phone, check_text, ValidationError};

/// Raw, unvalidated intake form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientIntakeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A validated intake submission.
#[derive(Debug, Clone)]
pub struct PatientIntake {
    pub name: NonEmptyText,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl PatientIntakeForm {
    /// Validates the intake form, reporting every violated field together.
    pub fn validate(&self) -> Result<PatientIntake, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = check_text("name", &self.name, 2, 50, &mut errors);
        let email = check_email("email", &self.email, &mut errors);
        let phone = check_phone("phone", &self.phone, &mut errors);

        match (name, email, phone) {
            (Some(name), Some(email), Some(phone)) if errors.is_empty() => Ok(PatientIntake {
                name,
                email,
                phone,
            }),
            _ => Err(errors),
        }
    }
}

/// The persisted patient profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    /// Opaque randomly generated token. Not guaranteed globally unique.
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl PatientProfile {
    /// Builds a profile record from a validated intake and an allocated id.
    pub fn from_intake(intake: PatientIntake, id: String) -> Self {
        Self {
            id,
            name: intake.name.as_str().to_owned(),
            email: intake.email.as_str().to_owned(),
            phone: intake.phone.as_str().to_owned(),
        }
    }
}
