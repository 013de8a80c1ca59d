//! Tags input box.
//!
//! A text field that turns comma or enter delimited input into removable tags,
//! persisted in the page's `localStorage` and capped to a maximum count.
pub mod app;
pub mod components;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod error;
pub mod storage;
pub mod tags;
pub mod types;
pub mod widgets;

// Re-exports
pub use error::{Error, Result};
