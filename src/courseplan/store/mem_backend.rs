use super::backend::StorageBackend;
use crate::error::{CourseplanError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since courseplan is single-threaded.
/// This keeps `&self` on every `StorageBackend` method without a lock.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    /// Affects both `write` and `remove`.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to place raw content in a slot, bypassing the repository.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CourseplanError::Storage(
                "Simulated write error".to_string(),
            ));
        }
        self.put_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CourseplanError::Storage(
                "Simulated write error".to_string(),
            ));
        }
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---
