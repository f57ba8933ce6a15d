//! The admin dashboard view of the appointment collection.
//!
//! The dashboard takes a snapshot of the whole collection when opened, derives
//! per-status counts from that snapshot, and forwards schedule/cancel actions
//! to the lifecycle service. Counts are always re-derived after a transition,
//! never mutated directly.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::appointment::{Appointment, AppointmentStatus};
use crate::error::{IntakeError, IntakeResult};
use crate::lifecycle::AppointmentService;
use crate::store::RecordStore;

/// Per-status appointment counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub scheduled: usize,
    pub cancelled: usize,
}

/// Admin view over the appointment collection.
pub struct AdminDashboard {
    store: Arc<RecordStore>,
    lifecycle: AppointmentService,
    appointments: Vec<Appointment>,
}

impl AdminDashboard {
    /// Opens the dashboard, loading the current appointment collection.
    ///
    /// Fails with [`IntakeError::AccessDenied`] unless the admin-access flag
    /// has been granted through the passkey gate.
    pub fn open(store: Arc<RecordStore>) -> IntakeResult<Self> {
        if !store.admin_access() {
            return Err(IntakeError::AccessDenied);
        }
        let appointments = store.appointments();
        let lifecycle = AppointmentService::new(store.clone());
        Ok(Self {
            store,
            lifecycle,
            appointments,
        })
    }

    /// Reloads the snapshot from the store.
    pub fn refresh(&mut self) {
        self.appointments = self.store.appointments();
    }

    /// The current snapshot of the appointment collection.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Partition counts for the current snapshot.
    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            pending: 0,
            scheduled: 0,
            cancelled: 0,
        };
        for appointment in &self.appointments {
            match appointment.status {
                AppointmentStatus::Pending => counts.pending += 1,
                AppointmentStatus::Scheduled => counts.scheduled += 1,
                AppointmentStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    /// Schedules a pending appointment and refreshes the snapshot.
    pub fn schedule(
        &mut self,
        id: &str,
        physician: &str,
        schedule: NaiveDate,
        reason: Option<&str>,
    ) -> IntakeResult<Appointment> {
        let result = self.lifecycle.schedule(id, physician, schedule, reason);
        self.refresh();
        result
    }

    /// Cancels an appointment and refreshes the snapshot.
    pub fn cancel(&mut self, id: &str, reason: &str) -> IntakeResult<Appointment> {
        let result = self.lifecycle.cancel(id, reason);
        self.refresh();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::AppointmentRequestForm;
    use crate::config::CoreConfig;
    use tempfile::TempDir;

    fn seeded_store(dir: &std::path::Path) -> Arc<RecordStore> {
        let store = Arc::new(RecordStore::new(Arc::new(CoreConfig::new(
            dir.to_path_buf(),
        ))));
        store.put_admin_access(true).expect("grant admin access");
        store
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }

    fn seed_appointment(store: &Arc<RecordStore>, id: &str) -> Appointment {
        let request = AppointmentRequestForm {
            primary_physician: "Dr. John Green".into(),
            schedule: "2025-01-10".into(),
            time: "09:00 AM".into(),
            reason: "Annual monthly check-up".into(),
            note: None,
        }
        .validate(today())
        .expect("valid request should pass");
        let appointment =
            Appointment::new(id.into(), "P1".into(), "John Doe".into(), request);
        store
            .append_appointment(&appointment)
            .expect("append should succeed");
        appointment
    }

    #[test]
    fn open_requires_admin_access() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(RecordStore::new(Arc::new(CoreConfig::new(
            temp_dir.path().to_path_buf(),
        ))));

        let Err(err) = AdminDashboard::open(store.clone()) else {
            panic!("locked dashboard should fail");
        };
        assert!(matches!(err, IntakeError::AccessDenied));

        store.put_admin_access(true).expect("grant admin access");
        assert!(AdminDashboard::open(store).is_ok());
    }

    #[test]
    fn counts_partition_the_collection() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = seeded_store(temp_dir.path());

        seed_appointment(&store, "apt0001");
        let second = seed_appointment(&store, "apt0002");
        let third = seed_appointment(&store, "apt0003");

        let date = NaiveDate::from_ymd_opt(2025, 1, 12).expect("valid date");
        store
            .update_appointment(&second.id, |a| {
                a.into_scheduled("Dr. John Green", date, None)
            })
            .expect("schedule should succeed");
        store
            .update_appointment(&third.id, |a| a.into_cancelled("No longer needed"))
            .expect("cancel should succeed");

        let dashboard = AdminDashboard::open(store).expect("open should succeed");
        assert_eq!(
            dashboard.counts(),
            StatusCounts {
                pending: 1,
                scheduled: 1,
                cancelled: 1,
            }
        );
    }

    #[test]
    fn counts_recompute_after_dashboard_transitions() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = seeded_store(temp_dir.path());

        let first = seed_appointment(&store, "apt0001");
        seed_appointment(&store, "apt0002");

        let mut dashboard = AdminDashboard::open(store).expect("open should succeed");
        assert_eq!(dashboard.counts().pending, 2);

        let date = NaiveDate::from_ymd_opt(2025, 1, 12).expect("valid date");
        dashboard
            .schedule(&first.id, "Dr. John Green", date, None)
            .expect("schedule should succeed");
        assert_eq!(
            dashboard.counts(),
            StatusCounts {
                pending: 1,
                scheduled: 1,
                cancelled: 0,
            }
        );

        dashboard
            .cancel(&first.id, "Doctor unavailable")
            .expect("cancel should succeed");
        assert_eq!(
            dashboard.counts(),
            StatusCounts {
                pending: 1,
                scheduled: 0,
                cancelled: 1,
            }
        );
    }

    #[test]
    fn failed_transition_leaves_snapshot_consistent_with_store() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = seeded_store(temp_dir.path());
        let first = seed_appointment(&store, "apt0001");

        let mut dashboard = AdminDashboard::open(store).expect("open should succeed");
        let err = dashboard
            .cancel(&first.id, "")
            .expect_err("empty reason should fail");
        assert!(matches!(err, IntakeError::InvalidInput(_)));
        assert_eq!(dashboard.counts().pending, 1);
        assert_eq!(dashboard.counts().cancelled, 0);
    }
}
