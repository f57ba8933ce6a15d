//! # CarePulse Core
//!
//! Core business logic for the CarePulse patient intake and appointment
//! booking system.
//!
//! This crate contains pure data operations and file-backed persistence:
//! - Schema-validated capture steps (intake, registration, appointment request)
//! - The appointment lifecycle state machine (`pending` / `scheduled` / `cancelled`)
//! - The record store shared by the visitor flow and the admin dashboard
//!
//! **No UI concerns**: forms, dialogs, routing, and presentation belong to the
//! consuming front end; the CLI crate provides a reference consumer.

pub mod admin;
pub mod appointment;
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod gate;
pub mod intake;
pub mod lifecycle;
pub mod profile;
pub mod registration;
pub mod store;
pub mod token;
pub mod validation;

pub use admin::{AdminDashboard, StatusCounts};
pub use appointment::{Appointment, AppointmentRequest, AppointmentRequestForm, AppointmentStatus};
pub use config::{resolve_data_dir, CoreConfig};
pub use directory::{find_doctor, Doctor, DOCTORS, IDENTIFICATION_TYPES};
pub use error::{IntakeError, IntakeResult};
pub use gate::{CredentialVerifier, SharedSecretGate};
pub use intake::IntakeService;
pub use lifecycle::AppointmentService;
pub use profile::{PatientIntakeForm, PatientProfile};
pub use registration::{Gender, RegisteredPatient, RegistrationForm};
pub use store::RecordStore;
pub use validation::ValidationError;
