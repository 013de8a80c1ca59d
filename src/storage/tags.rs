//! Tag persistence.
use super::KeyValueStore;
use crate::Result;

/// Loads the tags persisted under `key`.
///
/// # Returns
/// `None` if nothing, or an empty value, is stored under `key`.
///
/// # Errors
/// + [`Error::Corrupt`](crate::Error::Corrupt) if the stored value is not a JSON array of strings.
pub fn load_tags(store: &dyn KeyValueStore, key: &str) -> Result<Option<Vec<String>>> {
    let Some(value) = store.get(key)?.filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    let tags = serde_json::from_str(&value)?;
    Ok(Some(tags))
}

/// Persists `tags` under `key` as a JSON array.
pub fn save_tags(store: &dyn KeyValueStore, key: &str, tags: &[String]) -> Result {
    let value = serde_json::to_string(tags)?;
    store.set(key, &value)
}

#[cfg(test)]
#[path = "./tags_test.rs"]
mod tags_test;
