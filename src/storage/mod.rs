//! Persistent key-value storage.
pub mod key_value;
pub mod local_store;
pub mod memory_store;
pub mod tags;

// Re-exports
pub use key_value::{KeyValueStore, StoreHandle};
pub use local_store::LocalStore;
pub use memory_store::MemoryStore;
pub use tags::{load_tags, save_tags};
