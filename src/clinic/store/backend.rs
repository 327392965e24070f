use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw resource I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `CollectionStore` handles the "what" (decoding, ids, lookups).
///
/// A resource is one named text blob holding a whole collection.
pub trait StorageBackend {
    /// Read the whole resource.
    /// Returns Ok(None) if the resource does not exist yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, resource: &str) -> Result<Option<String>>;

    /// Replace the whole resource with `content`.
    fn write(&self, resource: &str, content: &str) -> Result<()>;

    /// Create the resource empty if it is absent. Existing content is untouched.
    fn ensure(&self, resource: &str) -> Result<()>;

    /// Where the resource lives. For MemBackend, a virtual path.
    fn location(&self, resource: &str) -> PathBuf;
}
