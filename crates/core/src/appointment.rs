//! The appointment record and its state machine.
//!
//! An appointment is created `pending`, may be scheduled once, and may be
//! cancelled from either non-terminal state. `cancelled` is terminal.
//! Transitions are pure: they consume the record and return the replacement,
//! leaving the identifier and owning patient untouched, so they can be applied
//! arena-style through the record store and tested in isolation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_REASON_LEN, TIME_SLOTS};
use crate::error::{IntakeError, IntakeResult};
use crate::validation::{check_physician, optional_text, ValidationError};

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Cancelled,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// Raw, unvalidated appointment request input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentRequestForm {
    pub primary_physician: String,
    /// Requested date, ISO `YYYY-MM-DD`.
    pub schedule: String,
    /// Requested slot, e.g. `"09:00 AM"`.
    pub time: String,
    pub reason: String,
    pub note: Option<String>,
}

/// A validated appointment request.
#[derive(Debug, Clone)]
pub struct AppointmentRequest {
    pub primary_physician: String,
    pub schedule: NaiveDate,
    pub time: String,
    pub reason: String,
    pub note: Option<String>,
}

impl AppointmentRequestForm {
    /// Validates the request, reporting every violated field together.
    ///
    /// `today` is passed in explicitly so the check stays pure: the same form
    /// and date always produce the same outcome.
    pub fn validate(&self, today: NaiveDate) -> Result<AppointmentRequest, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let primary_physician =
            check_physician("primaryPhysician", &self.primary_physician, &mut errors);

        let schedule = match NaiveDate::parse_from_str(self.schedule.trim(), "%Y-%m-%d") {
            Ok(date) if date >= today => Some(date),
            Ok(_) => {
                errors.push(ValidationError::new(
                    "schedule",
                    "Appointment date cannot be in the past",
                ));
                None
            }
            Err(_) => {
                errors.push(ValidationError::new(
                    "schedule",
                    "Please select a date (YYYY-MM-DD)",
                ));
                None
            }
        };

        let time = self.time.trim();
        let time = if TIME_SLOTS.contains(&time) {
            Some(time.to_owned())
        } else {
            errors.push(ValidationError::new(
                "time",
                "Please select one of the available time slots",
            ));
            None
        };

        let reason = self.reason.trim();
        let reason = if reason.chars().count() >= MIN_REASON_LEN {
            Some(reason.to_owned())
        } else {
            errors.push(ValidationError::new(
                "reason",
                format!("Please provide a reason (at least {MIN_REASON_LEN} characters)"),
            ));
            None
        };

        match (primary_physician, schedule, time, reason) {
            (Some(primary_physician), Some(schedule), Some(time), Some(reason))
                if errors.is_empty() =>
            {
                Ok(AppointmentRequest {
                    primary_physician,
                    schedule,
                    time,
                    reason,
                    note: optional_text(&self.note),
                })
            }
            _ => Err(errors),
        }
    }
}

/// The persisted appointment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub primary_physician: String,
    pub schedule: NaiveDate,
    pub time: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

impl Appointment {
    /// Allocates a new `pending` appointment from a validated request and the
    /// active patient identity.
    pub fn new(
        id: String,
        patient_id: String,
        patient_name: String,
        request: AppointmentRequest,
    ) -> Self {
        Self {
            id,
            patient_id,
            patient_name,
            primary_physician: request.primary_physician,
            schedule: request.schedule,
            time: request.time,
            reason: request.reason,
            note: request.note,
            status: AppointmentStatus::Pending,
            cancellation_reason: None,
        }
    }

    /// Transition `pending -> scheduled`, confirming physician and date.
    ///
    /// A non-blank `reason` replaces the request's reason; otherwise the
    /// original reason is kept. Rejected with
    /// [`IntakeError::InvalidTransition`] from any other state.
    pub fn into_scheduled(
        mut self,
        physician: &str,
        schedule: NaiveDate,
        reason: Option<&str>,
    ) -> IntakeResult<Self> {
        if self.status != AppointmentStatus::Pending {
            return Err(IntakeError::InvalidTransition {
                id: self.id,
                from: self.status,
                attempted: "schedule",
            });
        }

        let physician = physician.trim();
        if physician.is_empty() {
            return Err(IntakeError::InvalidInput(
                "physician is required to schedule an appointment".into(),
            ));
        }

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| std::mem::take(&mut self.reason));

        Ok(Self {
            primary_physician: physician.to_owned(),
            schedule,
            reason,
            status: AppointmentStatus::Scheduled,
            ..self
        })
    }

    /// Transition `pending | scheduled -> cancelled` with a mandatory reason.
    pub fn into_cancelled(self, reason: &str) -> IntakeResult<Self> {
        if self.status == AppointmentStatus::Cancelled {
            return Err(IntakeError::InvalidTransition {
                id: self.id,
                from: self.status,
                attempted: "cancel",
            });
        }

        let reason = reason.trim();
        if reason.is_empty() {
            return Err(IntakeError::InvalidInput(
                "a reason is required to cancel an appointment".into(),
            ));
        }

        Ok(Self {
            cancellation_reason: Some(reason.to_owned()),
            status: AppointmentStatus::Cancelled,
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }

    fn valid_request_form() -> AppointmentRequestForm {
        AppointmentRequestForm {
            primary_physician: "Dr. John Green".into(),
            schedule: "2025-01-10".into(),
            time: "09:00 AM".into(),
            reason: "Annual monthly check-up".into(),
            note: None,
        }
    }

    fn pending_appointment() -> Appointment {
        let request = valid_request_form()
            .validate(today())
            .expect("valid request should pass");
        Appointment::new("apt0001".into(), "pat0001".into(), "John Doe".into(), request)
    }

    #[test]
    fn validate_preserves_fields_verbatim() {
        let request = valid_request_form()
            .validate(today())
            .expect("valid request should pass");
        assert_eq!(request.primary_physician, "Dr. John Green");
        assert_eq!(request.schedule.to_string(), "2025-01-10");
        assert_eq!(request.time, "09:00 AM");
        assert_eq!(request.reason, "Annual monthly check-up");
    }

    #[test]
    fn validate_rejects_past_dates() {
        let mut form = valid_request_form();
        form.schedule = "2024-12-31".into();
        let errors = form.validate(today()).expect_err("past date should fail");
        assert_eq!(errors[0].field, "schedule");
    }

    #[test]
    fn validate_accepts_same_day_booking() {
        let mut form = valid_request_form();
        form.schedule = "2025-01-01".into();
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn validate_rejects_unknown_slot_and_short_reason() {
        let mut form = valid_request_form();
        form.time = "09:15 AM".into();
        form.reason = "check-up".into();
        let errors = form.validate(today()).expect_err("two fields should fail");
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["time", "reason"]);
    }

    #[test]
    fn new_appointment_is_pending() {
        let appointment = pending_appointment();
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.patient_name, "John Doe");
        assert_eq!(appointment.cancellation_reason, None);
    }

    #[test]
    fn schedule_confirms_physician_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 12).expect("valid date");
        let scheduled = pending_appointment()
            .into_scheduled("Dr. John Green", date, Some("Confirmed slot"))
            .expect("scheduling a pending appointment should succeed");
        assert_eq!(scheduled.status, AppointmentStatus::Scheduled);
        assert_eq!(scheduled.schedule, date);
        assert_eq!(scheduled.id, "apt0001");
        assert_eq!(scheduled.patient_id, "pat0001");
    }

    #[test]
    fn schedule_overwrites_reason_and_leaves_note_alone() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 12).expect("valid date");
        let scheduled = pending_appointment()
            .into_scheduled("Dr. John Green", date, Some("Confirmed slot"))
            .expect("scheduling a pending appointment should succeed");
        assert_eq!(scheduled.reason, "Confirmed slot");
        assert_eq!(scheduled.note, None);
    }

    #[test]
    fn schedule_without_reason_keeps_the_requested_one() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 12).expect("valid date");
        let scheduled = pending_appointment()
            .into_scheduled("Dr. John Green", date, None)
            .expect("scheduling a pending appointment should succeed");
        assert_eq!(scheduled.reason, "Annual monthly check-up");

        let blank = pending_appointment()
            .into_scheduled("Dr. John Green", date, Some("   "))
            .expect("blank reason should fall back to the requested one");
        assert_eq!(blank.reason, "Annual monthly check-up");
    }

    #[test]
    fn schedule_rejects_non_pending_states() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 12).expect("valid date");
        let scheduled = pending_appointment()
            .into_scheduled("Dr. John Green", date, None)
            .expect("first schedule should succeed");

        let err = scheduled
            .clone()
            .into_scheduled("Dr. John Green", date, None)
            .expect_err("second schedule should fail");
        assert!(matches!(
            err,
            IntakeError::InvalidTransition {
                from: AppointmentStatus::Scheduled,
                attempted: "schedule",
                ..
            }
        ));

        let cancelled = scheduled
            .into_cancelled("Patient request")
            .expect("cancelling a scheduled appointment should succeed");
        let err = cancelled
            .into_scheduled("Dr. John Green", date, None)
            .expect_err("scheduling a cancelled appointment should fail");
        assert!(matches!(
            err,
            IntakeError::InvalidTransition {
                from: AppointmentStatus::Cancelled,
                ..
            }
        ));
    }

    #[test]
    fn schedule_requires_a_physician() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 12).expect("valid date");
        let err = pending_appointment()
            .into_scheduled("   ", date, None)
            .expect_err("blank physician should fail");
        assert!(matches!(err, IntakeError::InvalidInput(_)));
    }

    #[test]
    fn cancel_requires_a_reason() {
        let err = pending_appointment()
            .into_cancelled("  ")
            .expect_err("blank reason should fail");
        assert!(matches!(err, IntakeError::InvalidInput(_)));
    }

    #[test]
    fn cancel_is_terminal() {
        let cancelled = pending_appointment()
            .into_cancelled("No longer needed")
            .expect("cancelling a pending appointment should succeed");
        assert_eq!(
            cancelled.cancellation_reason.as_deref(),
            Some("No longer needed")
        );

        let err = cancelled
            .into_cancelled("Again")
            .expect_err("cancelling twice should fail");
        assert!(matches!(
            err,
            IntakeError::InvalidTransition {
                from: AppointmentStatus::Cancelled,
                attempted: "cancel",
                ..
            }
        ));
    }

    #[test]
    fn status_serialises_lowercase() {
        let json = serde_json::to_string(&AppointmentStatus::Pending).expect("serialise status");
        assert_eq!(json, "\"pending\"");
        let status: AppointmentStatus =
            serde_json::from_str("\"cancelled\"").expect("parse status");
        assert_eq!(status, AppointmentStatus::Cancelled);
    }
}
