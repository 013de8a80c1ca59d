//! In-memory store.
use super::KeyValueStore;
use crate::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// [`KeyValueStore`] held in memory.
/// Clones share the same values.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `value` under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn clear(&self) -> Result {
        self.values.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "./memory_store_test.rs"]
mod memory_store_test;
