//! Constants used throughout the carepulse core crate.
//!
//! This module contains collection filenames and fixed reference tables to
//! ensure consistency across the codebase and make maintenance easier.

/// Default directory for persisted intake data when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "intake_data";

/// Filename for the patient profile collection.
pub const PATIENT_PROFILE_FILENAME: &str = "patient_profile.json";

/// Filename for the registered patient collection.
pub const REGISTERED_PATIENT_FILENAME: &str = "registered_patient.json";

/// Filename for the appointment collection.
pub const APPOINTMENTS_FILENAME: &str = "appointments.json";

/// Filename for the latest-appointment pointer.
pub const LATEST_APPOINTMENT_FILENAME: &str = "latest_appointment.json";

/// Filename for the admin-access flag.
pub const ADMIN_ACCESS_FILENAME: &str = "admin_access.json";

/// Length of generated opaque record identifiers.
pub const TOKEN_LEN: usize = 7;

/// Fixed development secret for the OTP and passkey gates.
/// Real credential verification is out of scope.
pub const DEV_SHARED_SECRET: &str = "123456";

/// Bookable 30-minute appointment slots, 09:00 to 17:00.
pub const TIME_SLOTS: &[&str] = &[
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM",
    "01:00 PM", "01:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
    "05:00 PM",
];

/// Minimum length of a free-text appointment reason.
pub const MIN_REASON_LEN: usize = 10;
