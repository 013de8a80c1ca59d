//! Common components.
pub mod messages;

// Re-exports
pub use messages::{Message, Messages};
