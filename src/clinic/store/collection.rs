use super::backend::StorageBackend;
use crate::codec::Record;
use crate::error::{ClinicError, Result};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::rc::Rc;
use tracing::{debug, error, warn};

/// What `load_all` does with a line that does not decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the line without a trace.
    #[default]
    Skip,
    /// Drop the line and log a warning.
    Report,
    /// Abort the load with `ClinicError::MalformedRecord`.
    Fail,
}

/// One collection of records backed by one resource.
///
/// Every call goes back to the backend; nothing is cached between calls.
pub struct CollectionStore<R, B> {
    backend: Rc<B>,
    resource: String,
    policy: MalformedPolicy,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, B: StorageBackend> CollectionStore<R, B> {
    pub fn new(backend: Rc<B>, resource: impl Into<String>) -> Self {
        Self {
            backend,
            resource: resource.into(),
            policy: MalformedPolicy::default(),
            _record: PhantomData,
        }
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn ensure_exists(&self) -> Result<()> {
        self.backend.ensure(&self.resource)
    }

    /// All records in file order.
    ///
    /// An unreadable resource is logged and reads as an empty collection.
    pub fn load_all(&self) -> Result<Vec<R>> {
        let content = match self.backend.read(&self.resource) {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => {
                warn!(
                    resource = %self.resource,
                    error = %e,
                    "could not read records, treating collection as empty"
                );
                return Ok(Vec::new());
            }
        };
        self.decode_lines(&content)
    }

    fn decode_lines(&self, content: &str) -> Result<Vec<R>> {
        let mut records = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            match R::decode(line) {
                Ok(record) => records.push(record),
                Err(reason) => match self.policy {
                    MalformedPolicy::Skip => {}
                    MalformedPolicy::Report => {
                        warn!(
                            resource = %self.resource,
                            line = idx + 1,
                            %reason,
                            "skipping malformed record"
                        );
                    }
                    MalformedPolicy::Fail => {
                        return Err(ClinicError::MalformedRecord {
                            resource: self.resource.clone(),
                            line: idx + 1,
                            reason: reason.to_string(),
                        });
                    }
                },
            }
        }
        Ok(records)
    }

    /// Rewrite the whole resource, one encoded record per line.
    pub fn save_all(&self, records: &[R]) -> Result<()> {
        let mut content = String::new();
        for record in records {
            content.push_str(&record.encode());
            content.push('\n');
        }
        self.backend
            .write(&self.resource, &content)
            .inspect_err(|e| error!(resource = %self.resource, error = %e, "could not save records"))?;
        debug!(resource = %self.resource, count = records.len(), "saved records");
        Ok(())
    }

    pub fn next_id(&self) -> Result<u32> {
        next_id(&self.resource, &self.load_all()?)
    }

    pub fn find_by_id(&self, id: u32) -> Result<Option<R>> {
        Ok(self.load_all()?.into_iter().find(|r| r.id() == id))
    }
}

/// One past the largest id present, or 1 for an empty collection.
///
/// Fails with `IdsExhausted` when the largest id is already `u32::MAX`.
pub fn next_id<R: Record>(resource: &str, records: &[R]) -> Result<u32> {
    match records.iter().map(Record::id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| ClinicError::IdsExhausted(resource.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Appointment, AppointmentStatus, Doctor};
    use crate::store::mem_backend::MemBackend;

    const RES: &str = "doctors.txt";

    fn store(backend: &Rc<MemBackend>) -> CollectionStore<Doctor, MemBackend> {
        CollectionStore::new(Rc::clone(backend), RES)
    }

    fn doctor(id: u32, name: &str) -> Doctor {
        Doctor {
            id,
            name: name.to_string(),
            specialization: "General".to_string(),
        }
    }

    #[test]
    fn missing_resource_loads_empty_and_first_id_is_one() {
        let backend = Rc::new(MemBackend::new());
        let store = store(&backend);
        assert!(store.load_all().unwrap().is_empty());
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[test]
    fn save_then_load_preserves_order() {
        let backend = Rc::new(MemBackend::new());
        let store = store(&backend);
        let doctors = vec![doctor(2, "Zed"), doctor(1, "Amy"), doctor(5, "Kim")];
        store.save_all(&doctors).unwrap();

        assert_eq!(
            backend.contents(RES).unwrap(),
            "2|Zed|General\n1|Amy|General\n5|Kim|General\n"
        );
        assert_eq!(store.load_all().unwrap(), doctors);
        assert_eq!(store.next_id().unwrap(), 6);
    }

    #[test]
    fn next_id_follows_current_max_only() {
        let backend = Rc::new(MemBackend::new());
        let store = store(&backend);
        store
            .save_all(&[doctor(1, "A"), doctor(2, "B"), doctor(3, "C")])
            .unwrap();
        assert_eq!(store.next_id().unwrap(), 4);

        // Hand-delete the newest record: the max is recomputed from what is left.
        backend.put(RES, "1|A|General\n2|B|General\n");
        assert_eq!(store.next_id().unwrap(), 3);
    }

    #[test]
    fn next_id_refuses_to_wrap_past_max() {
        let backend = Rc::new(MemBackend::new());
        let store = store(&backend);
        backend.put(RES, "4294967295|Max|General\n");

        let err = store.next_id().unwrap_err();
        assert!(matches!(err, ClinicError::IdsExhausted(ref r) if r == RES));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn find_by_id_scans_collection() {
        let backend = Rc::new(MemBackend::new());
        let store = store(&backend);
        store.save_all(&[doctor(1, "A"), doctor(4, "D")]).unwrap();
        assert_eq!(store.find_by_id(4).unwrap(), Some(doctor(4, "D")));
        assert_eq!(store.find_by_id(2).unwrap(), None);
    }

    #[test]
    fn blank_and_malformed_lines_are_skipped_by_default() {
        let backend = Rc::new(MemBackend::new());
        backend.put(RES, "1|A|General\n\n   \nnot a record\n2|B\nx|C|General\n3|C|General\r\n");
        let loaded = store(&backend).load_all().unwrap();
        let ids: Vec<u32> = loaded.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(loaded[1].specialization, "General");
    }

    #[test]
    fn report_policy_still_skips() {
        let backend = Rc::new(MemBackend::new());
        backend.put(RES, "1|A|General\nbroken\n");
        let loaded = store(&backend)
            .with_policy(MalformedPolicy::Report)
            .load_all()
            .unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn fail_policy_reports_line_number() {
        let backend = Rc::new(MemBackend::new());
        backend.put(RES, "1|A|General\n\nbroken\n");
        let err = store(&backend)
            .with_policy(MalformedPolicy::Fail)
            .load_all()
            .unwrap_err();
        match err {
            ClinicError::MalformedRecord { resource, line, .. } => {
                assert_eq!(resource, RES);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unreadable_resource_degrades_to_empty() {
        let backend = Rc::new(MemBackend::new());
        let store = store(&backend);
        store.save_all(&[doctor(1, "A")]).unwrap();

        backend.set_simulate_read_error(true);
        assert!(store.load_all().unwrap().is_empty());
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[test]
    fn write_failure_is_returned_and_leaves_old_content() {
        let backend = Rc::new(MemBackend::new());
        let store = store(&backend);
        store.save_all(&[doctor(1, "A")]).unwrap();

        backend.set_simulate_write_error(true);
        let err = store.save_all(&[doctor(1, "A"), doctor(2, "B")]).unwrap_err();
        assert!(err.is_storage());
        assert_eq!(backend.contents(RES).unwrap(), "1|A|General\n");
    }

    #[test]
    fn appointments_round_trip_through_store() {
        let backend = Rc::new(MemBackend::new());
        let store: CollectionStore<Appointment, MemBackend> =
            CollectionStore::new(Rc::clone(&backend), "appointments.txt");
        let appt = Appointment {
            id: 1,
            patient_id: 2,
            doctor_id: 3,
            date: "2025-11-24".to_string(),
            time_slot: "10:00-10:15".to_string(),
            status: AppointmentStatus::Booked,
        };
        store.save_all(std::slice::from_ref(&appt)).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![appt]);
    }
}
