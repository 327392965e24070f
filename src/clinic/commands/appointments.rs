//! Booking, cancelling and listing appointments.
//!
//! A doctor's slot is identified by `(doctor_id, date, time_slot)` with date
//! and slot compared case-insensitively. At most one BOOKED appointment may
//! hold a slot; cancelled ones release it. The status only ever moves from
//! BOOKED to CANCELLED.

use crate::commands::helpers::persist;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ClinicError, Result};
use crate::model::{Appointment, AppointmentStatus, AppointmentView, BookingRequest};
use crate::store::collection::next_id;
use crate::store::{CollectionStore, StorageBackend, Stores};
use std::collections::HashMap;
use tracing::{debug, info};

pub fn book<B: StorageBackend>(stores: &Stores<B>, request: BookingRequest) -> Result<CmdResult> {
    if stores.patients.find_by_id(request.patient_id)?.is_none() {
        return Err(ClinicError::UnknownPatient(request.patient_id));
    }
    if stores.doctors.find_by_id(request.doctor_id)?.is_none() {
        return Err(ClinicError::UnknownDoctor(request.doctor_id));
    }

    let mut all = stores.appointments.load_all()?;
    if let Some(holder) = all.iter().find(|a| a.blocks(&request)) {
        debug!(
            appointment = holder.id,
            doctor = request.doctor_id,
            "slot already booked"
        );
        return Err(ClinicError::SlotConflict {
            doctor_id: request.doctor_id,
            date: request.date,
            time_slot: request.time_slot,
        });
    }

    let id = next_id(stores.appointments.resource(), &all)?;
    all.push(Appointment::booked(id, &request));
    info!(
        id,
        patient = request.patient_id,
        doctor = request.doctor_id,
        date = %request.date,
        slot = %request.time_slot,
        "appointment booked"
    );

    let mut result = CmdResult::default().with_created_id(id);
    persist(&stores.appointments, &all, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Appointment booked successfully with ID: {}",
        id
    )));
    Ok(result)
}

pub fn cancel<B: StorageBackend>(
    store: &CollectionStore<Appointment, B>,
    appointment_id: u32,
) -> Result<CmdResult> {
    let mut all = store.load_all()?;
    let target = all
        .iter_mut()
        .find(|a| a.id == appointment_id)
        .ok_or(ClinicError::AppointmentNotFound(appointment_id))?;

    if target.status == AppointmentStatus::Cancelled {
        return Err(ClinicError::AlreadyCancelled(appointment_id));
    }
    target.status = AppointmentStatus::Cancelled;
    info!(id = appointment_id, "appointment cancelled");

    let mut result = CmdResult::default();
    persist(store, &all, &mut result)?;
    result.add_message(CmdMessage::success("Appointment cancelled successfully."));
    Ok(result)
}

pub fn list<B: StorageBackend>(stores: &Stores<B>) -> Result<CmdResult> {
    let appointments = stores.appointments.load_all()?;
    if appointments.is_empty() {
        return Ok(CmdResult::default());
    }

    let patients: HashMap<u32, String> = stores
        .patients
        .load_all()?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();
    let doctors: HashMap<u32, String> = stores
        .doctors
        .load_all()?
        .into_iter()
        .map(|d| (d.id, d.name))
        .collect();

    let views = appointments
        .into_iter()
        .map(|appointment| {
            let patient_name = patients
                .get(&appointment.patient_id)
                .cloned()
                .unwrap_or_else(|| format!("UnknownPatient({})", appointment.patient_id));
            let doctor_name = doctors
                .get(&appointment.doctor_id)
                .cloned()
                .unwrap_or_else(|| format!("UnknownDoctor({})", appointment.doctor_id));
            AppointmentView {
                appointment,
                patient_name,
                doctor_name,
            }
        })
        .collect();

    Ok(CmdResult::default().with_appointments(views))
}
