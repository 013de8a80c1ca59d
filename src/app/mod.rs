//! Main application.
pub mod app;
pub mod app_state;

// Re-exports
pub use app::App;
pub use app_state::{AppState, AppStateAction, AppStateReducer};
