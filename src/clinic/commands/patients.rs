use crate::commands::helpers::persist;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewPatient, Patient};
use crate::store::collection::next_id;
use crate::store::{CollectionStore, StorageBackend};
use tracing::debug;

pub fn add<B: StorageBackend>(
    store: &CollectionStore<Patient, B>,
    patient: NewPatient,
) -> Result<CmdResult> {
    let mut all = store.load_all()?;
    let id = next_id(store.resource(), &all)?;
    debug!(id, "allocated patient id");

    all.push(Patient {
        id,
        name: patient.name,
        age: patient.age,
        gender: patient.gender,
        phone: patient.phone,
    });

    let mut result = CmdResult::default().with_created_id(id);
    persist(store, &all, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Patient added successfully with ID: {}",
        id
    )));
    Ok(result)
}

pub fn list<B: StorageBackend>(store: &CollectionStore<Patient, B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_patients(store.load_all()?))
}

pub fn find<B: StorageBackend>(
    store: &CollectionStore<Patient, B>,
    id: u32,
) -> Result<Option<Patient>> {
    store.find_by_id(id)
}
