use crate::commands::helpers::persist;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Doctor, NewDoctor};
use crate::store::collection::next_id;
use crate::store::{CollectionStore, StorageBackend};
use tracing::debug;

pub fn add<B: StorageBackend>(
    store: &CollectionStore<Doctor, B>,
    doctor: NewDoctor,
) -> Result<CmdResult> {
    let mut all = store.load_all()?;
    let id = next_id(store.resource(), &all)?;
    debug!(id, "allocated doctor id");

    all.push(Doctor {
        id,
        name: doctor.name,
        specialization: doctor.specialization,
    });

    let mut result = CmdResult::default().with_created_id(id);
    persist(store, &all, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Doctor added successfully with ID: {}",
        id
    )));
    Ok(result)
}

pub fn list<B: StorageBackend>(store: &CollectionStore<Doctor, B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_doctors(store.load_all()?))
}

pub fn find<B: StorageBackend>(
    store: &CollectionStore<Doctor, B>,
    id: u32,
) -> Result<Option<Doctor>> {
    store.find_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::rc::Rc;

    fn new_doctor(name: &str, specialization: &str) -> NewDoctor {
        NewDoctor {
            name: name.to_string(),
            specialization: specialization.to_string(),
        }
    }

    #[test]
    fn adds_and_lists_in_insertion_order() {
        let backend = Rc::new(MemBackend::new());
        let store = CollectionStore::new(Rc::clone(&backend), "doctors.txt");

        assert_eq!(
            add(&store, new_doctor("House", "Diagnostics")).unwrap().created_id,
            Some(1)
        );
        assert_eq!(
            add(&store, new_doctor("Quinn", "Family\nMedicine")).unwrap().created_id,
            Some(2)
        );

        let doctors = list(&store).unwrap().doctors;
        assert_eq!(doctors.len(), 2);
        assert_eq!(doctors[0].name, "House");
        assert_eq!(doctors[1].specialization, "Family\nMedicine");
        assert_eq!(
            backend.contents("doctors.txt").unwrap(),
            "1|House|Diagnostics\n2|Quinn|Family\\nMedicine\n"
        );
    }

    #[test]
    fn id_after_removing_max_is_recomputed_from_remaining() {
        let backend = Rc::new(MemBackend::new());
        let store = CollectionStore::new(Rc::clone(&backend), "doctors.txt");
        for name in ["A", "B", "C"] {
            add(&store, new_doctor(name, "GP")).unwrap();
        }
        backend.put("doctors.txt", "1|A|GP\n2|B|GP\n");

        let result = add(&store, new_doctor("D", "GP")).unwrap();
        assert_eq!(result.created_id, Some(3));
    }
}
