//! UI Widgets
pub mod tags_input;

// Re-exports
pub use tags_input::TagsInput;
