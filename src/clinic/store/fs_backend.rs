use super::backend::StorageBackend;
use crate::error::{ClinicError, Result};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;
use uuid::Uuid;

/// Plain-text files in a single data directory, one file per resource.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn ensure_dir(&self, resource: &str) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| ClinicError::storage(resource, e))?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    /// Invalid UTF-8 is replaced rather than failing the read, so one bad
    /// byte costs at most the line it sits on.
    fn read(&self, resource: &str) -> Result<Option<String>> {
        let bytes = match fs::read(self.location(resource)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClinicError::storage(resource, e)),
        };
        match String::from_utf8(bytes) {
            Ok(content) => Ok(Some(content)),
            Err(e) => {
                warn!(resource, "resource is not valid UTF-8, replacing bad bytes");
                Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
            }
        }
    }

    fn write(&self, resource: &str, content: &str) -> Result<()> {
        self.ensure_dir(resource)?;
        let target = self.location(resource);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", resource, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(|e| ClinicError::storage(resource, e))?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(ClinicError::storage(resource, e));
        }
        Ok(())
    }

    fn ensure(&self, resource: &str) -> Result<()> {
        self.ensure_dir(resource)?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.location(resource))
            .map_err(|e| ClinicError::storage(resource, e))?;
        Ok(())
    }

    fn location(&self, resource: &str) -> PathBuf {
        self.root.join(resource)
    }
}
