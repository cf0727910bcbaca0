use crate::error::Result;

/// Abstract interface for raw key/value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `CourseRepository` handles the "what" (schema, versioning, recovery).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if the slot does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the slot. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
