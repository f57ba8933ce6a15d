//! The visitor intake flow.
//!
//! `IntakeService` orchestrates the three capture steps against the record
//! store: intake form to patient profile, registration form to registered
//! patient, appointment request to a pending appointment. Each step is gated
//! on the previous one having completed, mirroring the page ordering of the
//! intake journey.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::appointment::{Appointment, AppointmentRequestForm};
use crate::error::{IntakeError, IntakeResult};
use crate::lifecycle::AppointmentService;
use crate::profile::{PatientIntakeForm, PatientProfile};
use crate::registration::{RegisteredPatient, RegistrationForm};
use crate::store::RecordStore;
use crate::token::opaque_token;

/// Orchestrates the visitor-facing capture steps.
#[derive(Clone)]
pub struct IntakeService {
    store: Arc<RecordStore>,
    lifecycle: AppointmentService,
}

impl IntakeService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        let lifecycle = AppointmentService::new(store.clone());
        Self { store, lifecycle }
    }

    /// Validates the intake form and persists a fresh patient profile.
    ///
    /// Re-submission overwrites the prior profile wholesale; the registered
    /// patient record is untouched.
    pub fn submit_patient_form(&self, form: &PatientIntakeForm) -> IntakeResult<PatientProfile> {
        let intake = form.validate().map_err(IntakeError::Validation)?;
        let profile = PatientProfile::from_intake(intake, opaque_token());
        self.store.put_patient_profile(&profile)?;
        tracing::debug!("captured patient profile {}", profile.id);
        Ok(profile)
    }

    /// Validates the registration form and persists the registered patient,
    /// carrying over the active profile's identifier.
    pub fn submit_registration(&self, form: &RegistrationForm) -> IntakeResult<RegisteredPatient> {
        let profile = self.store.patient_profile().ok_or_else(|| {
            IntakeError::InvalidInput("no patient profile on record; submit the intake form first".into())
        })?;

        let registration = form.validate().map_err(IntakeError::Validation)?;
        let patient = RegisteredPatient::from_registration(registration, profile.id);
        self.store.put_registered_patient(&patient)?;
        tracing::debug!("registered patient {}", patient.id);
        Ok(patient)
    }

    /// Validates an appointment request and creates a pending appointment for
    /// the registered patient. `today` anchors the no-past-dates check.
    pub fn request_appointment(
        &self,
        form: &AppointmentRequestForm,
        today: NaiveDate,
    ) -> IntakeResult<Appointment> {
        let patient = self.store.registered_patient().ok_or_else(|| {
            IntakeError::InvalidInput("no registered patient on record; complete registration first".into())
        })?;

        let request = form.validate(today).map_err(IntakeError::Validation)?;
        self.lifecycle
            .create(request, &patient.id, &patient.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::AppointmentStatus;
    use crate::config::CoreConfig;
    use tempfile::TempDir;

    fn test_service(dir: &std::path::Path) -> (Arc<RecordStore>, IntakeService) {
        let store = Arc::new(RecordStore::new(Arc::new(CoreConfig::new(
            dir.to_path_buf(),
        ))));
        (store.clone(), IntakeService::new(store))
    }

    fn intake_form(name: &str) -> PatientIntakeForm {
        PatientIntakeForm {
            name: name.into(),
            email: "johndoe@mail.com".into(),
            phone: "(555) 000-0000".into(),
        }
    }

    fn registration_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "johndoe@mail.com".into(),
            phone: "(555) 000-0000".into(),
            birth_date: "1990-01-15".into(),
            gender: "Male".into(),
            address: "14 Harley Street, London".into(),
            occupation: "Engineer".into(),
            emergency_contact_name: "Jane Doe".into(),
            emergency_contact_number: "(555) 111-1111".into(),
            primary_physician: "Dr. John Green".into(),
            insurance_provider: "BlueCross".into(),
            insurance_policy_number: "BC-998877".into(),
            identification_type: "Passport".into(),
            identification_number: "P1234567".into(),
            treatment_consent: true,
            disclosure_consent: true,
            privacy_consent: true,
            ..RegistrationForm::default()
        }
    }

    fn booking_form() -> AppointmentRequestForm {
        AppointmentRequestForm {
            primary_physician: "Dr. John Green".into(),
            schedule: "2025-01-10".into(),
            time: "09:00 AM".into(),
            reason: "Annual monthly check-up".into(),
            note: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }

    #[test]
    fn intake_resubmission_overwrites_profile_but_not_registration() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (store, service) = test_service(temp_dir.path());

        let first = service
            .submit_patient_form(&intake_form("John Doe"))
            .expect("intake should succeed");
        let registered = service
            .submit_registration(&registration_form())
            .expect("registration should succeed");
        assert_eq!(registered.id, first.id);

        let second = service
            .submit_patient_form(&intake_form("Johnny Doe"))
            .expect("re-submission should succeed");
        assert_ne!(second.id, first.id);
        assert_eq!(
            store.patient_profile().expect("profile should exist").name,
            "Johnny Doe"
        );

        // Registration stays as-is until it is itself resubmitted.
        let stored = store
            .registered_patient()
            .expect("registration should still exist");
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.first_name, "John");
    }

    #[test]
    fn registration_requires_an_intake_profile() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (_, service) = test_service(temp_dir.path());

        let err = service
            .submit_registration(&registration_form())
            .expect_err("registration without a profile should fail");
        assert!(matches!(err, IntakeError::InvalidInput(_)));
    }

    #[test]
    fn booking_requires_registration_and_creates_pending_appointment() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (store, service) = test_service(temp_dir.path());

        let err = service
            .request_appointment(&booking_form(), today())
            .expect_err("booking without registration should fail");
        assert!(matches!(err, IntakeError::InvalidInput(_)));

        let profile = service
            .submit_patient_form(&intake_form("John Doe"))
            .expect("intake should succeed");
        service
            .submit_registration(&registration_form())
            .expect("registration should succeed");

        let appointment = service
            .request_appointment(&booking_form(), today())
            .expect("booking should succeed");
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.patient_id, profile.id);
        assert_eq!(appointment.patient_name, "John Doe");
        assert_eq!(store.appointments().len(), 1);
    }

    #[test]
    fn invalid_booking_reports_validation_errors_and_stores_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let (store, service) = test_service(temp_dir.path());

        service
            .submit_patient_form(&intake_form("John Doe"))
            .expect("intake should succeed");
        service
            .submit_registration(&registration_form())
            .expect("registration should succeed");

        let mut form = booking_form();
        form.reason = "too short".into();
        form.time = "08:00 AM".into();
        let err = service
            .request_appointment(&form, today())
            .expect_err("invalid booking should fail");
        match err {
            IntakeError::Validation(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["time", "reason"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.appointments().is_empty());
    }
}
