//! # Storage Layer
//!
//! Each record type (patients, doctors, appointments) lives in its own text
//! resource, one record per line, encoded by [`crate::codec`].
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw I/O on whole resources. Knows nothing
//!   about records.
//! - [`collection::CollectionStore`]: one per record type. Decodes the resource
//!   into an ordered `Vec`, allocates ids, finds by id and rewrites the whole
//!   resource on save.
//!
//! ## Read-Modify-Write
//!
//! There is no cache. Every operation re-reads its resource, works on the
//! in-memory copy and, if it mutates, writes the full collection back. The
//! files are the source of truth and may be edited by hand between commands.
//!
//! There is no locking either: two processes writing at once can lose
//! updates. The tool assumes a single active process.
//!
//! ## Failure Policy
//!
//! - Unreadable resource: logged, treated as an empty collection.
//! - Unwritable resource: logged and returned to the caller, which decides
//!   whether to surface it (commands turn it into a warning).
//! - Malformed line: governed by [`MalformedPolicy`] (skip by default).
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: files in a data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! ├── patients.txt       # id|name|age|gender|phone
//! ├── doctors.txt        # id|name|specialization
//! ├── appointments.txt   # id|patientId|doctorId|date|timeSlot|status
//! └── clinic.toml        # optional configuration
//! ```

pub mod backend;
pub mod collection;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use collection::{CollectionStore, MalformedPolicy};

use crate::model::{Appointment, Doctor, Patient};
use std::rc::Rc;

/// Resource names for the three collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub patients: String,
    pub doctors: String,
    pub appointments: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        Self {
            patients: "patients.txt".to_string(),
            doctors: "doctors.txt".to_string(),
            appointments: "appointments.txt".to_string(),
        }
    }
}

/// The three collection stores, sharing one backend.
pub struct Stores<B> {
    pub patients: CollectionStore<Patient, B>,
    pub doctors: CollectionStore<Doctor, B>,
    pub appointments: CollectionStore<Appointment, B>,
}

impl<B: StorageBackend> Stores<B> {
    pub fn new(backend: Rc<B>, names: &ResourceNames, policy: MalformedPolicy) -> Self {
        Self {
            patients: CollectionStore::new(Rc::clone(&backend), names.patients.as_str())
                .with_policy(policy),
            doctors: CollectionStore::new(Rc::clone(&backend), names.doctors.as_str())
                .with_policy(policy),
            appointments: CollectionStore::new(backend, names.appointments.as_str())
                .with_policy(policy),
        }
    }

    /// Create any missing resource empty. Stops at the first failure.
    pub fn ensure_all(&self) -> crate::error::Result<()> {
        self.patients.ensure_exists()?;
        self.doctors.ensure_exists()?;
        self.appointments.ensure_exists()
    }
}
