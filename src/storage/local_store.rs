//! Browser `localStorage`.
use super::KeyValueStore;
use crate::Result;
use gloo_storage::{LocalStorage, Storage};

/// [`KeyValueStore`] backed by the page's `localStorage`.
///
/// # Panics
/// If `localStorage` is not available.
#[derive(Clone, Copy, Default, Debug)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(LocalStorage::raw().get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result {
        Ok(LocalStorage::raw().set_item(key, value)?)
    }

    fn clear(&self) -> Result {
        LocalStorage::clear();
        Ok(())
    }
}
