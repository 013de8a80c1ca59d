//! Widget configuration.
use crate::constants::{DEFAULT_MAX_TAGS, DEFAULT_STORAGE_KEY, DEFAULT_TAGS, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};

/// Configuration of a tags input widget.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct TagsInputConfig {
    /// Title displayed in the header.
    pub title: String,

    /// Maximum number of tags.
    pub max_tags: usize,

    /// Key the tags are persisted under.
    pub storage_key: String,

    /// Tags used when nothing is persisted.
    pub default_tags: Vec<String>,
}

impl TagsInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags;
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn with_default_tags(mut self, default_tags: Vec<String>) -> Self {
        self.default_tags = default_tags;
        self
    }
}

impl Default for TagsInputConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            max_tags: DEFAULT_MAX_TAGS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_tags: DEFAULT_TAGS.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
