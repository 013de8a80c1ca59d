//! Confirmation of destructive actions.
use crate::{Error, Result};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Asks the user to confirm an action.
pub trait Confirm {
    /// Returns whether the user accepted `message`.
    fn confirm(&self, message: &str) -> bool;
}

/// Blocking `window.confirm` dialog.
#[derive(Clone, Copy, Default, Debug)]
pub struct WindowConfirm;

impl WindowConfirm {
    pub fn try_confirm(&self, message: &str) -> Result<bool> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        Ok(window.confirm_with_message(message)?)
    }
}

impl Confirm for WindowConfirm {
    /// A dialog that can not be shown counts as declined.
    fn confirm(&self, message: &str) -> bool {
        match self.try_confirm(message) {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::error!(?err, "could not show confirmation dialog");
                false
            }
        }
    }
}

/// Always gives the same answer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Shared handle to a [`Confirm`].
///
/// Handles are equal if they point to the same value.
#[derive(Clone)]
pub struct ConfirmHandle(Rc<dyn Confirm>);

impl ConfirmHandle {
    pub fn new(confirm: impl Confirm + 'static) -> Self {
        Self(Rc::new(confirm))
    }
}

impl Deref for ConfirmHandle {
    type Target = dyn Confirm;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ConfirmHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ConfirmHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfirmHandle")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

#[cfg(test)]
#[path = "./confirm_test.rs"]
mod confirm_test;
