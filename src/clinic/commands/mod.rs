//! # Command Layer
//!
//! This module contains the **core business logic** of the clinic tool. Each
//! record type has its own submodule of plain functions over the stores.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Load the collections they need fresh from storage
//! - Apply the rules (id allocation, slot conflicts, cancellation)
//! - Write the full collection back when they mutate it
//! - Return a structured [`CmdResult`]
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, prompts or formatting
//! - **Input parsing**: they take typed values; turning `"4o"` into an age is
//!   the driver's job, and a driver that cannot parse must not call them
//! - **Exit codes**: they return `Result`, the caller decides
//!
//! ## Errors vs. Messages
//!
//! Rejected requests (unknown patient, slot conflict, already cancelled...)
//! are `Err(ClinicError)`. A failed write is *not* an error: the operation
//! still reports its outcome and carries a warning message instead, so a
//! success message never implies the change is durable.
//!
//! ## Command Modules
//!
//! - [`patients`]: register and list patients
//! - [`doctors`]: register and list doctors
//! - [`appointments`]: book, cancel and list appointments
//! - [`helpers`]: shared persistence handling

use crate::model::{AppointmentView, Doctor, Patient};
use serde::Serialize;

pub mod appointments;
pub mod doctors;
pub mod helpers;
pub mod patients;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Id handed out by an add or a booking.
    pub created_id: Option<u32>,
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<AppointmentView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_created_id(mut self, id: u32) -> Self {
        self.created_id = Some(id);
        self
    }

    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }

    pub fn with_doctors(mut self, doctors: Vec<Doctor>) -> Self {
        self.doctors = doctors;
        self
    }

    pub fn with_appointments(mut self, appointments: Vec<AppointmentView>) -> Self {
        self.appointments = appointments;
        self
    }

    /// True when a write failed and the outcome may not be on disk.
    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
