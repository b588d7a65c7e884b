//! Key-value slot abstraction backing the persisted cart.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for abstracting durable string storage.
/// Platform-specific implementations should provide this
pub trait CartStorage {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one raw value.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }
}

impl CartStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
