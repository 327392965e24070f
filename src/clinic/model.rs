use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialization: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Booked,
    Cancelled,
}

impl AppointmentStatus {
    /// Parses a stored status, ignoring case. Anything other than the two
    /// known states is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("BOOKED") {
            Some(Self::Booked)
        } else if raw.eq_ignore_ascii_case("CANCELLED") {
            Some(Self::Cancelled)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "BOOKED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub patient_id: u32,
    pub doctor_id: u32,
    pub date: String,
    pub time_slot: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn booked(id: u32, request: &BookingRequest) -> Self {
        Self {
            id,
            patient_id: request.patient_id,
            doctor_id: request.doctor_id,
            date: request.date.clone(),
            time_slot: request.time_slot.clone(),
            status: AppointmentStatus::Booked,
        }
    }

    /// Whether this appointment holds the doctor's slot that `request` asks for.
    ///
    /// Date and slot are opaque strings compared without regard to case;
    /// partially overlapping ranges such as `10:00-10:20` and `10:10-10:30`
    /// are not detected.
    pub fn blocks(&self, request: &BookingRequest) -> bool {
        self.status == AppointmentStatus::Booked
            && self.doctor_id == request.doctor_id
            && eq_ignore_case(&self.date, &request.date)
            && eq_ignore_case(&self.time_slot, &request.time_slot)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Typed input for registering a patient. The driver parses raw input into this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub patient_id: u32,
    pub doctor_id: u32,
    pub date: String,
    pub time_slot: String,
}

/// An appointment joined with the names of the people it references.
///
/// Names fall back to `UnknownPatient(id)` / `UnknownDoctor(id)` when the
/// reference no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentView {
    pub appointment: Appointment,
    pub patient_name: String,
    pub doctor_name: String,
}
