//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every clinic operation, whichever driver is in front of it
//! (the interactive menu, one-shot subcommands, tests).
//!
//! ## Operations
//!
//! | Method | Returns |
//! |--------|---------|
//! | [`ClinicApi::add_patient`] | `created_id` |
//! | [`ClinicApi::list_patients`] | `patients` in file order |
//! | [`ClinicApi::find_patient`] | the patient, if the id exists |
//! | [`ClinicApi::add_doctor`] | `created_id` |
//! | [`ClinicApi::list_doctors`] | `doctors` in file order |
//! | [`ClinicApi::find_doctor`] | the doctor, if the id exists |
//! | [`ClinicApi::book_appointment`] | `created_id`, or `UnknownPatient` / `UnknownDoctor` / `SlotConflict` |
//! | [`ClinicApi::list_appointments`] | `appointments` with resolved names |
//! | [`ClinicApi::cancel_appointment`] | success, or `AppointmentNotFound` / `AlreadyCancelled` |
//!
//! Inputs are already typed. The API never parses user text.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `ClinicApi<FsBackend>`
//! - Testing: `ClinicApi<MemBackend>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{BookingRequest, Doctor, NewDoctor, NewPatient, Patient};
use crate::store::{StorageBackend, Stores};

pub struct ClinicApi<B: StorageBackend> {
    stores: Stores<B>,
}

impl<B: StorageBackend> ClinicApi<B> {
    pub fn new(stores: Stores<B>) -> Self {
        Self { stores }
    }

    pub fn add_patient(&self, patient: NewPatient) -> Result<CmdResult> {
        commands::patients::add(&self.stores.patients, patient)
    }

    pub fn list_patients(&self) -> Result<CmdResult> {
        commands::patients::list(&self.stores.patients)
    }

    pub fn find_patient(&self, id: u32) -> Result<Option<Patient>> {
        commands::patients::find(&self.stores.patients, id)
    }

    pub fn add_doctor(&self, doctor: NewDoctor) -> Result<CmdResult> {
        commands::doctors::add(&self.stores.doctors, doctor)
    }

    pub fn list_doctors(&self) -> Result<CmdResult> {
        commands::doctors::list(&self.stores.doctors)
    }

    pub fn find_doctor(&self, id: u32) -> Result<Option<Doctor>> {
        commands::doctors::find(&self.stores.doctors, id)
    }

    pub fn book_appointment(&self, request: BookingRequest) -> Result<CmdResult> {
        commands::appointments::book(&self.stores, request)
    }

    pub fn list_appointments(&self) -> Result<CmdResult> {
        commands::appointments::list(&self.stores)
    }

    pub fn cancel_appointment(&self, appointment_id: u32) -> Result<CmdResult> {
        commands::appointments::cancel(&self.stores.appointments, appointment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClinicError;
    use crate::store::mem_backend::MemBackend;
    use crate::store::{MalformedPolicy, ResourceNames};
    use std::rc::Rc;

    fn api_with(policy: MalformedPolicy) -> (Rc<MemBackend>, ClinicApi<MemBackend>) {
        let backend = Rc::new(MemBackend::new());
        let stores = Stores::new(Rc::clone(&backend), &ResourceNames::default(), policy);
        (backend, ClinicApi::new(stores))
    }

    fn booking(date: &str, slot: &str) -> BookingRequest {
        BookingRequest {
            patient_id: 1,
            doctor_id: 1,
            date: date.to_string(),
            time_slot: slot.to_string(),
        }
    }

    #[test]
    fn dispatches_each_operation_to_its_collection() {
        let (backend, api) = api_with(MalformedPolicy::Skip);

        let p = api
            .add_patient(NewPatient {
                name: "Ann".into(),
                age: 34,
                gender: "F".into(),
                phone: "555".into(),
            })
            .unwrap();
        let d = api
            .add_doctor(NewDoctor {
                name: "House".into(),
                specialization: "Diagnostics".into(),
            })
            .unwrap();
        assert_eq!(p.created_id, Some(1));
        assert_eq!(d.created_id, Some(1));

        let a = api.book_appointment(booking("2025-11-24", "09:00-09:15")).unwrap();
        assert_eq!(a.created_id, Some(1));

        assert_eq!(api.list_patients().unwrap().patients.len(), 1);
        assert_eq!(api.list_doctors().unwrap().doctors.len(), 1);
        assert_eq!(api.list_appointments().unwrap().appointments.len(), 1);

        api.cancel_appointment(1).unwrap();
        assert!(backend
            .contents("appointments.txt")
            .unwrap()
            .ends_with("|CANCELLED\n"));
    }

    #[test]
    fn strict_policy_surfaces_corruption() {
        let (backend, api) = api_with(MalformedPolicy::Fail);
        backend.put("patients.txt", "1|Ann|34|F|555\n1|Ann|old|F\n");

        let err = api.list_patients().unwrap_err();
        assert!(matches!(err, ClinicError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn default_policy_hides_corruption() {
        let (backend, api) = api_with(MalformedPolicy::Skip);
        backend.put("patients.txt", "1|Ann|34|F|555\n1|Ann|old|F\n");

        assert_eq!(api.list_patients().unwrap().patients.len(), 1);
    }
}
