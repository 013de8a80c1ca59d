//! Key-value store abstraction.
use crate::Result;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// String key-value store, scoped to a single origin.
pub trait KeyValueStore {
    /// Gets the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result;

    /// Removes every key from the store.
    fn clear(&self) -> Result;
}

/// Shared handle to a [`KeyValueStore`].
///
/// Handles are equal if they point to the same store.
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn KeyValueStore>);

impl StoreHandle {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl From<Rc<dyn KeyValueStore>> for StoreHandle {
    fn from(store: Rc<dyn KeyValueStore>) -> Self {
        Self(store)
    }
}

impl Deref for StoreHandle {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreHandle")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

#[cfg(test)]
#[path = "./key_value_test.rs"]
mod key_value_test;
