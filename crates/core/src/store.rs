//! Durable record storage.
//!
//! The record store is the single source of truth shared by the visitor flow
//! and the admin view. Each logical collection is one JSON file under the
//! configured data directory:
//!
//! ```text
//! <data_dir>/
//!   patient_profile.json      # PatientProfile
//!   registered_patient.json   # RegisteredPatient
//!   appointments.json         # Vec<Appointment>
//!   latest_appointment.json   # Appointment (pointer to the newest booking)
//!   admin_access.json         # bool
//! ```
//!
//! Reads never fail: a missing or unparsable file yields the collection's
//! default (corrupt content is logged and treated as absent). Writes replace
//! the whole collection; read-modify-write operations are serialised behind an
//! internal lock so an append or in-place update cannot lose a concurrent
//! write from another thread of the same process. Cross-process coordination
//! is out of scope: last writer wins.

use std::fs;
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::appointment::Appointment;
use crate::config::CoreConfig;
use crate::constants::{
    ADMIN_ACCESS_FILENAME, APPOINTMENTS_FILENAME, LATEST_APPOINTMENT_FILENAME,
    PATIENT_PROFILE_FILENAME, REGISTERED_PATIENT_FILENAME,
};
use crate::error::{IntakeError, IntakeResult};
use crate::profile::PatientProfile;
use crate::registration::RegisteredPatient;

/// File-backed key-value store for the intake collections.
pub struct RecordStore {
    cfg: Arc<CoreConfig>,
    // Serialises read-modify-write sequences within this process.
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            write_lock: Mutex::new(()),
        }
    }

    /// Reads a collection file, treating missing or corrupt content as absent.
    fn read_collection<T: DeserializeOwned>(&self, filename: &str) -> Option<T> {
        let path = self.cfg.collection_path(filename);
        let contents = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    "discarding corrupt collection {}: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    /// Replaces a collection file wholesale.
    fn write_collection<T: Serialize>(&self, filename: &str, value: &T) -> IntakeResult<()> {
        fs::create_dir_all(self.cfg.data_dir()).map_err(IntakeError::StorageDirCreation)?;
        let json = serde_json::to_string_pretty(value).map_err(IntakeError::Serialization)?;
        fs::write(self.cfg.collection_path(filename), json).map_err(IntakeError::FileWrite)
    }

    /// The active patient profile, if one has been captured.
    pub fn patient_profile(&self) -> Option<PatientProfile> {
        self.read_collection(PATIENT_PROFILE_FILENAME)
    }

    /// Overwrites the patient profile. Last write wins, no merge.
    pub fn put_patient_profile(&self, profile: &PatientProfile) -> IntakeResult<()> {
        self.write_collection(PATIENT_PROFILE_FILENAME, profile)
    }

    /// The registered patient record, if registration has completed.
    pub fn registered_patient(&self) -> Option<RegisteredPatient> {
        self.read_collection(REGISTERED_PATIENT_FILENAME)
    }

    /// Overwrites the registered patient record.
    pub fn put_registered_patient(&self, patient: &RegisteredPatient) -> IntakeResult<()> {
        self.write_collection(REGISTERED_PATIENT_FILENAME, patient)
    }

    /// The full appointment collection. Absent or corrupt storage yields an
    /// empty list.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.read_collection(APPOINTMENTS_FILENAME).unwrap_or_default()
    }

    /// Replaces the appointment collection wholesale.
    pub fn put_appointments(&self, appointments: &[Appointment]) -> IntakeResult<()> {
        self.write_collection(APPOINTMENTS_FILENAME, &appointments)
    }

    /// Appends one appointment as a single read-modify-write unit and updates
    /// the latest-appointment pointer.
    pub fn append_appointment(&self, appointment: &Appointment) -> IntakeResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut appointments = self.appointments();
        appointments.push(appointment.clone());
        self.put_appointments(&appointments)?;
        self.write_collection(LATEST_APPOINTMENT_FILENAME, appointment)
    }

    /// Looks up the appointment with the given id, applies a transition, and
    /// replaces the record in place, preserving all other records. The
    /// collection is left unmodified when the transition fails.
    pub fn update_appointment(
        &self,
        id: &str,
        transition: impl FnOnce(Appointment) -> IntakeResult<Appointment>,
    ) -> IntakeResult<Appointment> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut appointments = self.appointments();
        let index = appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| IntakeError::AppointmentNotFound(id.to_owned()))?;

        let updated = transition(appointments[index].clone())?;
        appointments[index] = updated.clone();
        self.put_appointments(&appointments)?;
        Ok(updated)
    }

    /// The most recently created appointment, if any.
    pub fn latest_appointment(&self) -> Option<Appointment> {
        self.read_collection(LATEST_APPOINTMENT_FILENAME)
    }

    /// Whether admin access has been granted in this profile.
    pub fn admin_access(&self) -> bool {
        self.read_collection(ADMIN_ACCESS_FILENAME).unwrap_or(false)
    }

    /// Persists the admin-access flag.
    pub fn put_admin_access(&self, granted: bool) -> IntakeResult<()> {
        self.write_collection(ADMIN_ACCESS_FILENAME, &granted)
    }
}
