use crate::appointment::AppointmentStatus;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("validation failed: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Validation(Vec<ValidationError>),
    #[error("appointment not found: {0}")]
    AppointmentNotFound(String),
    #[error("cannot {attempted} appointment {id}: status is {from}")]
    InvalidTransition {
        id: String,
        from: AppointmentStatus,
        attempted: &'static str,
    },
    #[error("admin access has not been granted")]
    AccessDenied,
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write record file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize record: {0}")]
    Serialization(serde_json::Error),
}

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;
