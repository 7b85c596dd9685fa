//! Backend abstraction for the trip store's durable slot.

use std::{cell::RefCell, collections::HashMap};

use crate::error::Result;

/// Durable string key-value storage.
///
/// Values are replaced whole; there are no partial updates. Implementations
/// use interior mutability so readers only need a shared reference.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Returns whether a value was present.
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Process-local backend used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }
}
