//! The registration step: full demographic, medical, insurance, and consent
//! capture.
//!
//! Registration happens once, after a patient profile exists. The three
//! consent checkboxes are enforced here, at validation time; the persisted
//! record therefore always carries them as `true`.

use carepulse_types::{EmailAddress, NonEmptyText, PhoneNumber};
use serde::{Deserialize, Serialize};

use crate::validation::{
    check_consent, check_email, check_identification_type, check_phone, check_physician,
    check_text, optional_text, ValidationError,
};

/// Patient gender, as captured on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Raw, unvalidated registration form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub gender: String,
    pub address: String,
    pub occupation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub primary_physician: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    pub allergies: Option<String>,
    pub current_medication: Option<String>,
    pub family_medical_history: Option<String>,
    pub past_medical_history: Option<String>,
    pub identification_type: String,
    pub identification_number: String,
    pub treatment_consent: bool,
    pub disclosure_consent: bool,
    pub privacy_consent: bool,
}

/// A validated registration submission.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: NonEmptyText,
    pub last_name: NonEmptyText,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub birth_date: NonEmptyText,
    pub gender: Gender,
    pub address: NonEmptyText,
    pub occupation: NonEmptyText,
    pub emergency_contact_name: NonEmptyText,
    pub emergency_contact_number: PhoneNumber,
    pub primary_physician: String,
    pub insurance_provider: NonEmptyText,
    pub insurance_policy_number: NonEmptyText,
    pub allergies: Option<String>,
    pub current_medication: Option<String>,
    pub family_medical_history: Option<String>,
    pub past_medical_history: Option<String>,
    pub identification_type: String,
    pub identification_number: NonEmptyText,
}

impl RegistrationForm {
    /// Validates the registration form, reporting every violated field
    /// together. All three consents must be ticked.
    pub fn validate(&self) -> Result<Registration, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let first_name = check_text("firstName", &self.first_name, 2, 50, &mut errors);
        let last_name = check_text("lastName", &self.last_name, 2, 50, &mut errors);
        let email = check_email("email", &self.email, &mut errors);
        let phone = check_phone("phone", &self.phone, &mut errors);

        let birth_date = check_text("birthDate", &self.birth_date, 1, 50, &mut errors);
        let gender = match Gender::parse(&self.gender) {
            Some(gender) => Some(gender),
            None => {
                errors.push(ValidationError::new(
                    "gender",
                    "Gender must be Male, Female or Other",
                ));
                None
            }
        };
        let address = check_text("address", &self.address, 5, 500, &mut errors);
        let occupation = check_text("occupation", &self.occupation, 2, 100, &mut errors);

        let emergency_contact_name = check_text(
            "emergencyContactName",
            &self.emergency_contact_name,
            2,
            50,
            &mut errors,
        );
        let emergency_contact_number = check_phone(
            "emergencyContactNumber",
            &self.emergency_contact_number,
            &mut errors,
        );

        let primary_physician =
            check_physician("primaryPhysician", &self.primary_physician, &mut errors);
        let insurance_provider =
            check_text("insuranceProvider", &self.insurance_provider, 2, 100, &mut errors);
        let insurance_policy_number = check_text(
            "insurancePolicyNumber",
            &self.insurance_policy_number,
            2,
            100,
            &mut errors,
        );

        let identification_type = check_identification_type(
            "identificationType",
            &self.identification_type,
            &mut errors,
        );
        let identification_number = check_text(
            "identificationNumber",
            &self.identification_number,
            2,
            100,
            &mut errors,
        );

        check_consent(
            "treatmentConsent",
            self.treatment_consent,
            "You must consent to treatment",
            &mut errors,
        );
        check_consent(
            "disclosureConsent",
            self.disclosure_consent,
            "You must consent to disclosure",
            &mut errors,
        );
        check_consent(
            "privacyConsent",
            self.privacy_consent,
            "You must accept the privacy policy",
            &mut errors,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        // All options are Some here: a None would have pushed an error above.
        match (
            first_name,
            last_name,
            email,
            phone,
            birth_date,
            gender,
            address,
            occupation,
            emergency_contact_name,
            emergency_contact_number,
            primary_physician,
            insurance_provider,
            insurance_policy_number,
            identification_type,
            identification_number,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(phone),
                Some(birth_date),
                Some(gender),
                Some(address),
                Some(occupation),
                Some(emergency_contact_name),
                Some(emergency_contact_number),
                Some(primary_physician),
                Some(insurance_provider),
                Some(insurance_policy_number),
                Some(identification_type),
                Some(identification_number),
            ) => Ok(Registration {
                first_name,
                last_name,
                email,
                phone,
                birth_date,
                gender,
                address,
                occupation,
                emergency_contact_name,
                emergency_contact_number,
                primary_physician,
                insurance_provider,
                insurance_policy_number,
                allergies: optional_text(&self.allergies),
                current_medication: optional_text(&self.current_medication),
                family_medical_history: optional_text(&self.family_medical_history),
                past_medical_history: optional_text(&self.past_medical_history),
                identification_type,
                identification_number,
            }),
            _ => Err(vec![ValidationError::new(
                "form",
                "Registration form is incomplete",
            )]),
        }
    }
}

/// The persisted registered-patient record: the profile superset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPatient {
    /// Identifier of the originating patient profile.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub gender: Gender,
    pub address: String,
    pub occupation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub primary_physician: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_medication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_medical_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_medical_history: Option<String>,
    pub identification_type: String,
    pub identification_number: String,
    pub treatment_consent: bool,
    pub disclosure_consent: bool,
    pub privacy_consent: bool,
}

impl RegisteredPatient {
    /// Builds the persisted record from a validated registration and the
    /// active profile identifier. Consents are `true` by construction.
    pub fn from_registration(registration: Registration, id: String) -> Self {
        Self {
            id,
            first_name: registration.first_name.as_str().to_owned(),
            last_name: registration.last_name.as_str().to_owned(),
            email: registration.email.as_str().to_owned(),
            phone: registration.phone.as_str().to_owned(),
            birth_date: registration.birth_date.as_str().to_owned(),
            gender: registration.gender,
            address: registration.address.as_str().to_owned(),
            occupation: registration.occupation.as_str().to_owned(),
            emergency_contact_name: registration.emergency_contact_name.as_str().to_owned(),
            emergency_contact_number: registration.emergency_contact_number.as_str().to_owned(),
            primary_physician: registration.primary_physician,
            insurance_provider: registration.insurance_provider.as_str().to_owned(),
            insurance_policy_number: registration.insurance_policy_number.as_str().to_owned(),
            allergies: registration.allergies,
            current_medication: registration.current_medication,
            family_medical_history: registration.family_medical_history,
            past_medical_history: registration.past_medical_history,
            identification_type: registration.identification_type,
            identification_number: registration.identification_number.as_str().to_owned(),
            treatment_consent: true,
            disclosure_consent: true,
            privacy_consent: true,
        }
    }

    /// The patient's display name, used on appointment records.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
