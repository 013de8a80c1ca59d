//! Tags input state.
use crate::config::TagsInputConfig;
use crate::storage::{load_tags, save_tags, StoreHandle};
use crate::tags::TagList;
use crate::Result;
use std::rc::Rc;
use yew::prelude::*;

/// Actions available to modify the [`TagsState`].
#[derive(Debug)]
pub enum TagsStateAction {
    /// Adds raw input, persisting the tags after each appended segment.
    AddTag(String),

    /// Removes the first occurrence of a tag.
    /// The store is not updated.
    RemoveTag(String),

    /// Removes all tags and clears the entire store.
    RemoveAll,
}

/// State of a tags input.
#[derive(PartialEq, Clone, Debug)]
pub struct TagsState {
    tags: TagList,
    store: StoreHandle,
    storage_key: String,
}

impl TagsState {
    /// Loads the persisted tags from `store`.
    /// Falls back to the configured defaults if none are persisted.
    #[tracing::instrument(level = "debug", skip(store))]
    pub fn load(config: &TagsInputConfig, store: StoreHandle) -> Result<Self> {
        let tags = match load_tags(&*store, &config.storage_key)? {
            Some(tags) => tags,
            None => config.default_tags.clone(),
        };

        Ok(Self {
            tags: TagList::with_tags(tags, config.max_tags),
            store,
            storage_key: config.storage_key.clone(),
        })
    }

    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Number of tags that may still be added.
    pub fn remaining(&self) -> isize {
        self.tags.remaining()
    }
}

impl Reducible for TagsState {
    type Action = TagsStateAction;

    #[tracing::instrument(level = "debug", skip(self))]
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();
        match action {
            TagsStateAction::AddTag(raw) => {
                let store = current.store.clone();
                let storage_key = current.storage_key.clone();
                let outcome = current.tags.add_each(&raw, |tags| {
                    if let Err(err) = save_tags(&*store, &storage_key, tags) {
                        tracing::warn!(?err, "could not persist tags");
                    }
                });

                if !outcome.is_added() {
                    tracing::debug!(?outcome, "tag not added");
                    return self;
                }
            }

            TagsStateAction::RemoveTag(tag) => {
                if current.tags.remove(&tag).is_none() {
                    return self;
                }
            }

            TagsStateAction::RemoveAll => {
                current.tags.clear();
                if let Err(err) = current.store.clear() {
                    tracing::warn!(?err, "could not clear store");
                }
            }
        };

        current.into()
    }
}

pub type TagsStateReducer = UseReducerHandle<TagsState>;

#[cfg(test)]
#[path = "./tags_state_test.rs"]
mod tags_state_test;
