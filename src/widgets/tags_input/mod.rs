//! Tags input box.
pub mod chip;
pub mod tags_input;
pub mod tags_state;

// Re-exports
pub use chip::Chip;
pub use tags_input::{TagsInput, TagsInputProps};
pub use tags_state::{TagsState, TagsStateAction, TagsStateReducer};
