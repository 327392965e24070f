use super::backend::StorageBackend;
use crate::error::{ClinicError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the clinic tool is single-threaded.
/// This keeps `StorageBackend` on `&self` while still letting tests
/// inspect and tamper with the stored text.
#[derive(Default)]
pub struct MemBackend {
    resources: RefCell<HashMap<String, String>>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable read error simulation for testing degraded loads.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Raw text of a resource, as a file on disk would hold it.
    pub fn contents(&self, resource: &str) -> Option<String> {
        self.resources.borrow().get(resource).cloned()
    }

    /// Overwrite a resource directly, bypassing the codec (for hand-edited fixtures).
    pub fn put(&self, resource: &str, content: &str) {
        self.resources
            .borrow_mut()
            .insert(resource.to_string(), content.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, resource: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(ClinicError::storage(
                resource,
                io::Error::new(io::ErrorKind::PermissionDenied, "simulated read error"),
            ));
        }
        Ok(self.contents(resource))
    }

    fn write(&self, resource: &str, content: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ClinicError::storage(
                resource,
                io::Error::new(io::ErrorKind::PermissionDenied, "simulated write error"),
            ));
        }
        self.put(resource, content);
        Ok(())
    }

    fn ensure(&self, resource: &str) -> Result<()> {
        self.resources
            .borrow_mut()
            .entry(resource.to_string())
            .or_default();
        Ok(())
    }

    fn location(&self, resource: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", resource))
    }
}
