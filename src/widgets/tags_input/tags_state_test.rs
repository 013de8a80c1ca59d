use super::*;
use crate::storage::{KeyValueStore, MemoryStore};
use crate::Error;

// ************
// *** load ***
// ************

#[test]
fn load_should_use_defaults_when_store_is_empty() {
    let (state, _store) = seeded_state(MemoryStore::new());
    assert_eq!(vec!["dev", "react"], state.tags().tags());
    assert_eq!(8, state.remaining());
}

#[test]
fn load_should_use_persisted_tags() {
    let (state, _store) = seeded_state(MemoryStore::with_value("tags", r#"["rust","yew"]"#));
    assert_eq!(vec!["rust", "yew"], state.tags().tags());

    let (state, _store) = seeded_state(MemoryStore::with_value("tags", "[]"));
    assert!(
        state.tags().is_empty(),
        "an empty persisted list should not be replaced by defaults"
    );
}

#[test]
fn load_should_use_defaults_when_persisted_value_is_empty() {
    let (state, _store) = seeded_state(MemoryStore::with_value("tags", ""));
    assert_eq!(vec!["dev", "react"], state.tags().tags());
}

#[test]
fn load_should_use_configured_key_and_cap() {
    let store = MemoryStore::with_value("other", r#"["a1","b2","c3"]"#);
    let config = TagsInputConfig::default()
        .with_storage_key("other")
        .with_max_tags(3);

    let state = TagsState::load(&config, StoreHandle::new(store)).expect("load should work");
    assert!(state.tags().is_full());
    assert_eq!(0, state.remaining());
}

#[test]
fn load_should_error_on_corrupt_store() {
    let store = MemoryStore::with_value("tags", "dev,react");
    let res = TagsState::load(&TagsInputConfig::default(), StoreHandle::new(store));
    assert!(matches!(res, Err(Error::Corrupt(_))));
}

// ***************
// *** add tag ***
// ***************

#[test]
fn add_tag_should_persist() {
    let (state, store) = seeded_state(MemoryStore::new());
    let state = state.reduce(TagsStateAction::AddTag("typescript".to_string()));

    assert_eq!(vec!["dev", "react", "typescript"], state.tags().tags());
    assert_eq!(7, state.remaining());
    assert_eq!(
        Ok(Some(r#"["dev","react","typescript"]"#.to_string())),
        store.get("tags")
    );
}

#[test]
fn rejected_add_should_not_change_state() {
    let (state, _store) = seeded_state(MemoryStore::new());
    for raw in ["", "x", "dev", "  react"] {
        let next = state.clone().reduce(TagsStateAction::AddTag(raw.to_string()));
        if raw == "  react" {
            // collapses to " react", which is not a duplicate of "react"
            assert_eq!(vec!["dev", "react", " react"], next.tags().tags());
        } else {
            assert!(Rc::ptr_eq(&state, &next), "`{raw}` should be rejected");
        }
    }

    let store = MemoryStore::new();
    let full = TagsState::load(
        &TagsInputConfig::default().with_max_tags(2),
        StoreHandle::new(store.clone()),
    )
    .expect("load should work");

    let full = Rc::new(full);
    let next = full.clone().reduce(TagsStateAction::AddTag("vue".to_string()));
    assert!(Rc::ptr_eq(&full, &next), "full list should reject tags");
    assert_eq!(Ok(None), store.get("tags"), "store should not be written");
}

#[test]
fn add_tag_with_commas_should_append_every_segment() {
    let (state, store) = seeded_state(MemoryStore::new());
    let state = state.reduce(TagsStateAction::AddTag("go, go".to_string()));

    assert_eq!(vec!["dev", "react", "go", " go"], state.tags().tags());
    assert_eq!(
        Ok(Some(r#"["dev","react","go"," go"]"#.to_string())),
        store.get("tags")
    );
}

// ******************
// *** remove tag ***
// ******************

#[test]
fn remove_tag_should_not_persist() {
    let (state, store) = seeded_state(MemoryStore::new());
    let state = state.reduce(TagsStateAction::AddTag("typescript".to_string()));
    let state = state.reduce(TagsStateAction::RemoveTag("dev".to_string()));

    assert_eq!(vec!["react", "typescript"], state.tags().tags());
    assert_eq!(8, state.remaining());
    assert_eq!(
        Ok(Some(r#"["dev","react","typescript"]"#.to_string())),
        store.get("tags"),
        "removal should not be persisted"
    );

    let state = state.reduce(TagsStateAction::AddTag("dev".to_string()));
    assert_eq!(vec!["react", "typescript", "dev"], state.tags().tags());
    assert_eq!(
        Ok(Some(r#"["react","typescript","dev"]"#.to_string())),
        store.get("tags"),
        "next add should persist the removal"
    );
}

#[test]
fn remove_missing_tag_should_not_change_state() {
    let (state, _store) = seeded_state(MemoryStore::new());
    let next = state.clone().reduce(TagsStateAction::RemoveTag("vue".to_string()));
    assert!(Rc::ptr_eq(&state, &next));
}

// ******************
// *** remove all ***
// ******************

#[test]
fn remove_all_should_clear_store() {
    let store = MemoryStore::with_value("tags", r#"["rust"]"#);
    store.set("unrelated", "value").expect("set should work");

    let (state, store) = seeded_state(store);
    let state = state.reduce(TagsStateAction::RemoveAll);

    assert!(state.tags().is_empty());
    assert_eq!(10, state.remaining());
    assert!(store.is_empty(), "entire store should be cleared");
}

// *****************
// *** reloading ***
// *****************

#[test]
fn reload_should_restore_persisted_tags() {
    let (state, store) = seeded_state(MemoryStore::new());
    let state = state
        .reduce(TagsStateAction::AddTag("typescript".to_string()))
        .reduce(TagsStateAction::AddTag("rust".to_string()));

    let (reloaded, _store) = seeded_state(store.clone());
    assert_eq!(state.tags(), reloaded.tags());

    let state = state.reduce(TagsStateAction::RemoveTag("rust".to_string()));
    let (reloaded, _store) = seeded_state(store.clone());
    assert_ne!(
        state.tags(),
        reloaded.tags(),
        "removal is lost on reload until the next add"
    );

    state.reduce(TagsStateAction::RemoveAll);
    let (reloaded, _store) = seeded_state(store);
    assert_eq!(vec!["dev", "react"], reloaded.tags().tags());
}

// ***************
// *** helpers ***
// ***************

/// Loads a state from `store` with the default config.
fn seeded_state(store: MemoryStore) -> (Rc<TagsState>, MemoryStore) {
    let state = TagsState::load(&TagsInputConfig::default(), StoreHandle::new(store.clone()))
        .expect("load should work");

    (Rc::new(state), store)
}
