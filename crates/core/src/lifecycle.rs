//! The sanctioned appointment mutators.
//!
//! `AppointmentService` owns the three lifecycle entry points — create,
//! schedule, cancel — and is the only code allowed to mutate the appointment
//! collection. Each transition is a full-record replace: look up by id, apply
//! the pure transition from [`crate::appointment`], write the collection back.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::appointment::{Appointment, AppointmentRequest};
use crate::error::IntakeResult;
use crate::store::RecordStore;
use crate::token::opaque_token;

/// Service applying lifecycle transitions to the appointment collection.
#[derive(Clone)]
pub struct AppointmentService {
    store: Arc<RecordStore>,
}

impl AppointmentService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Allocates a `pending` appointment from a validated request and the
    /// active patient identity, then appends it to the store.
    pub fn create(
        &self,
        request: AppointmentRequest,
        patient_id: &str,
        patient_name: &str,
    ) -> IntakeResult<Appointment> {
        let appointment = Appointment::new(
            opaque_token(),
            patient_id.to_owned(),
            patient_name.to_owned(),
            request,
        );
        self.store.append_appointment(&appointment)?;
        tracing::info!(
            "created appointment {} for patient {}",
            appointment.id,
            appointment.patient_id
        );
        Ok(appointment)
    }

    /// Confirms a pending appointment with a physician, date, and an optional
    /// replacement reason.
    ///
    /// Legal only from `pending`; any other state is rejected with
    /// `InvalidTransition` and the store is left unmodified.
    pub fn schedule(
        &self,
        id: &str,
        physician: &str,
        schedule: NaiveDate,
        reason: Option<&str>,
    ) -> IntakeResult<Appointment> {
        let updated = self
            .store
            .update_appointment(id, |a| a.into_scheduled(physician, schedule, reason))?;
        tracing::info!("scheduled appointment {} with {}", updated.id, physician);
        Ok(updated)
    }

    /// Cancels a pending or scheduled appointment with a mandatory reason.
    pub fn cancel(&self, id: &str, reason: &str) -> IntakeResult<Appointment> {
        let updated = self
            .store
            .update_appointment(id, |a| a.into_cancelled(reason))?;
        tracing::info!("cancelled appointment {}", updated.id);
        Ok(updated)
    }
}
