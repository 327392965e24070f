//! # Rendering
//!
//! Plain one-line-per-record text, in the layout clinic staff already know:
//!
//! ```text
//! ID: 1 | Name: Ann | Age: 34 | Gender: F | Phone: 555-0101
//! ApptID: 1 | Patient: Ann (ID:1) | Doctor: House (ID:1) | Date: 2025-11-24 | Time: 09:00-09:15 | Status: BOOKED
//! ```
//!
//! Record text is built uncoloured so it can be tested; only messages and
//! errors get colour, at the edge.

use clinic::commands::{CmdMessage, MessageLevel};
use clinic::error::ClinicError;
use clinic::model::{AppointmentView, Doctor, Patient};
use colored::Colorize;

pub(super) fn patient_line(p: &Patient) -> String {
    format!(
        "ID: {} | Name: {} | Age: {} | Gender: {} | Phone: {}",
        p.id, p.name, p.age, p.gender, p.phone
    )
}

pub(super) fn doctor_line(d: &Doctor) -> String {
    format!(
        "ID: {} | Name: {} | Specialization: {}",
        d.id, d.name, d.specialization
    )
}

pub(super) fn appointment_line(v: &AppointmentView) -> String {
    let a = &v.appointment;
    format!(
        "ApptID: {} | Patient: {} (ID:{}) | Doctor: {} (ID:{}) | Date: {} | Time: {} | Status: {}",
        a.id, v.patient_name, a.patient_id, v.doctor_name, a.doctor_id, a.date, a.time_slot, a.status
    )
}

fn render_list<T>(items: &[T], title: &str, empty: &str, line: fn(&T) -> String) -> String {
    if items.is_empty() {
        return format!("{}\n", empty);
    }
    let mut out = format!("---- {} ----\n", title);
    for item in items {
        out.push_str(&line(item));
        out.push('\n');
    }
    out
}

pub(super) fn render_patients(patients: &[Patient]) -> String {
    render_list(patients, "Patient List", "No patients found.", patient_line)
}

pub(super) fn render_doctors(doctors: &[Doctor]) -> String {
    render_list(doctors, "Doctor List", "No doctors found.", doctor_line)
}

pub(super) fn render_appointments(views: &[AppointmentView]) -> String {
    render_list(
        views,
        "Appointment List",
        "No appointments found.",
        appointment_line,
    )
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&styled.to_string());
        out.push('\n');
    }
    out
}

pub(super) fn render_error(err: &ClinicError) -> String {
    format!("{}\n", err.to_string().red())
}
