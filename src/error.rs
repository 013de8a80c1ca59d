//! Result and Errors.
use std::result::Result as StdResult;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// The store could not be accessed.
    #[error("storage error: {0}")]
    Storage(String),

    /// A persisted value could not be parsed.
    #[error("corrupt value: {0}")]
    Corrupt(String),

    /// No `window` is available.
    #[error("no window")]
    NoWindow,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err.to_string())
    }
}

impl From<JsValue> for Error {
    fn from(err: JsValue) -> Self {
        Self::Storage(format!("{:?}", err))
    }
}

// **************
// *** result ***
// **************

/// Crate result.
pub type Result<T = ()> = StdResult<T, Error>;
