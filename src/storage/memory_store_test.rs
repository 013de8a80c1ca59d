use super::*;

#[test]
fn set_get_should_work() {
    let store = MemoryStore::new();
    assert_eq!(Ok(None), store.get("tags"));

    store.set("tags", "[]").expect("set should work");
    assert_eq!(Ok(Some("[]".to_string())), store.get("tags"));

    store.set("tags", r#"["dev"]"#).expect("set should work");
    assert_eq!(Ok(Some(r#"["dev"]"#.to_string())), store.get("tags"));
    assert_eq!(1, store.len());
}

#[test]
fn clear_should_remove_all_keys() {
    let store = MemoryStore::with_value("tags", "[]");
    store.set("other", "value").expect("set should work");
    assert_eq!(2, store.len());

    store.clear().expect("clear should work");
    assert!(store.is_empty());
}

#[test]
fn clones_should_share_values() {
    let store = MemoryStore::new();
    let other = store.clone();
    other.set("tags", "[]").expect("set should work");
    assert_eq!(Ok(Some("[]".to_string())), store.get("tags"));
}
