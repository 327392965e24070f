use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Invalid patient ID: {0}")]
    UnknownPatient(u32),

    #[error("Invalid doctor ID: {0}")]
    UnknownDoctor(u32),

    #[error("Time slot {time_slot} on {date} is already booked for doctor {doctor_id}")]
    SlotConflict {
        doctor_id: u32,
        date: String,
        time_slot: String,
    },

    #[error("Appointment not found: {0}")]
    AppointmentNotFound(u32),

    #[error("Appointment {0} is already cancelled")]
    AlreadyCancelled(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage unavailable ({resource}): {source}")]
    StorageUnavailable {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {resource} at line {line}: {reason}")]
    MalformedRecord {
        resource: String,
        line: usize,
        reason: String,
    },

    #[error("No ids left in {0}")]
    IdsExhausted(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClinicError {
    pub fn storage(resource: impl Into<String>, source: std::io::Error) -> Self {
        Self::StorageUnavailable {
            resource: resource.into(),
            source,
        }
    }

    /// True for failures of the backing resource rather than of the request.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;
