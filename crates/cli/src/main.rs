use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carepulse_core::{
    resolve_data_dir, AdminDashboard, AppointmentRequestForm, CoreConfig, CredentialVerifier,
    IntakeService, PatientIntakeForm, RecordStore, RegistrationForm, SharedSecretGate,
};

#[derive(Parser)]
#[command(name = "carepulse")]
#[command(about = "CarePulse patient intake and appointment booking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the patient intake form
    Intake {
        /// Full name
        name: String,
        /// Email address
        email: String,
        /// Phone number
        phone: String,
    },
    /// Submit the registration form from a JSON file
    Register {
        /// Path to a JSON registration form
        form: PathBuf,
    },
    /// Request a new appointment
    Book {
        /// Doctor from the practice directory
        physician: String,
        /// Requested date (YYYY-MM-DD)
        schedule: String,
        /// Requested 30-minute slot, e.g. "09:00 AM"
        time: String,
        /// Reason for the visit (at least 10 characters)
        reason: String,
        /// Additional note (optional)
        #[arg(long)]
        note: Option<String>,
    },
    /// Verify the patient OTP
    Verify {
        /// Six-digit code
        code: String,
    },
    /// Unlock the admin dashboard with the passkey
    Unlock {
        /// Six-digit passkey
        passkey: String,
    },
    /// List all appointments with per-status counts
    List,
    /// Schedule a pending appointment
    Schedule {
        /// Appointment id
        id: String,
        /// Confirmed doctor
        physician: String,
        /// Confirmed date (YYYY-MM-DD)
        date: String,
        /// Updated reason for the visit (optional)
        #[arg(long)]
        reason: Option<String>,
    },
    /// Cancel a pending or scheduled appointment
    Cancel {
        /// Appointment id
        id: String,
        /// Reason for cancellation
        reason: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carepulse=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = resolve_data_dir(std::env::var("CAREPULSE_DATA_DIR").ok().map(PathBuf::from));
    let cfg = Arc::new(CoreConfig::new(data_dir));
    let store = Arc::new(RecordStore::new(cfg));
    let intake = IntakeService::new(store.clone());
    let gate = SharedSecretGate::default();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Intake { name, email, phone }) => {
            let form = PatientIntakeForm { name, email, phone };
            match intake.submit_patient_form(&form) {
                Ok(profile) => println!("Created patient profile with id: {}", profile.id),
                Err(e) => eprintln!("Error submitting intake form: {}", e),
            }
        }
        Some(Commands::Register { form }) => {
            let contents = std::fs::read_to_string(&form)?;
            let form: RegistrationForm = serde_json::from_str(&contents)?;
            match intake.submit_registration(&form) {
                Ok(patient) => println!(
                    "Registered patient {} ({})",
                    patient.full_name(),
                    patient.id
                ),
                Err(e) => eprintln!("Error submitting registration: {}", e),
            }
        }
        Some(Commands::Book {
            physician,
            schedule,
            time,
            reason,
            note,
        }) => {
            let form = AppointmentRequestForm {
                primary_physician: physician,
                schedule,
                time,
                reason,
                note,
            };
            match intake.request_appointment(&form, Utc::now().date_naive()) {
                Ok(appointment) => println!(
                    "Requested appointment {} with {} on {} at {}",
                    appointment.id,
                    appointment.primary_physician,
                    appointment.schedule,
                    appointment.time
                ),
                Err(e) => eprintln!("Error requesting appointment: {}", e),
            }
        }
        Some(Commands::Verify { code }) => {
            if gate.verify(&code) {
                println!("Identity verified.");
            } else {
                eprintln!("Invalid OTP. Please try again.");
            }
        }
        Some(Commands::Unlock { passkey }) => {
            if gate.verify(&passkey) {
                store.put_admin_access(true)?;
                println!("Admin access granted.");
            } else {
                eprintln!("Invalid passkey. Please try again.");
            }
        }
        Some(Commands::List) => match AdminDashboard::open(store) {
            Ok(dashboard) => {
                let counts = dashboard.counts();
                println!(
                    "Pending: {}, Scheduled: {}, Cancelled: {}",
                    counts.pending, counts.scheduled, counts.cancelled
                );
                if dashboard.appointments().is_empty() {
                    println!("No appointments found.");
                }
                for appointment in dashboard.appointments() {
                    println!(
                        "ID: {}, Patient: {}, Doctor: {}, Date: {} {}, Status: {}",
                        appointment.id,
                        appointment.patient_name,
                        appointment.primary_physician,
                        appointment.schedule,
                        appointment.time,
                        appointment.status
                    );
                }
            }
            Err(e) => eprintln!("Error opening dashboard: {}", e),
        },
        Some(Commands::Schedule {
            id,
            physician,
            date,
            reason,
        }) => match AdminDashboard::open(store) {
            Ok(mut dashboard) => {
                let date: NaiveDate = date.parse()?;
                match dashboard.schedule(&id, &physician, date, reason.as_deref()) {
                    Ok(appointment) => println!(
                        "Scheduled appointment {} with {} on {}",
                        appointment.id, appointment.primary_physician, appointment.schedule
                    ),
                    Err(e) => eprintln!("Error scheduling appointment: {}", e),
                }
            }
            Err(e) => eprintln!("Error opening dashboard: {}", e),
        },
        Some(Commands::Cancel { id, reason }) => match AdminDashboard::open(store) {
            Ok(mut dashboard) => match dashboard.cancel(&id, &reason) {
                Ok(appointment) => println!("Cancelled appointment {}", appointment.id),
                Err(e) => eprintln!("Error cancelling appointment: {}", e),
            },
            Err(e) => eprintln!("Error opening dashboard: {}", e),
        },
        None => {
            println!("Use 'carepulse --help' for commands");
        }
    }

    Ok(())
}
