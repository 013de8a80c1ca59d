//! Tag list and its state transitions.
pub mod tag_list;

// Re-exports
pub use tag_list::{normalize, AddOutcome, TagList};
