//! Main application state.
use crate::types::Message;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// Actions available to modify the [`AppState`].
pub enum AppStateAction {
    /// Add a message to display.
    AddMessage(Message),

    /// Add a message that is removed after a timeout in milliseconds.
    AddMessageWithTimeout(Message, u32, UseReducerDispatcher<AppState>),

    /// Removes a message.
    RemoveMessage(Uuid),

    /// Clears all messages.
    ClearMessages,
}

/// Application state.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct AppState {
    /// Messages for the user.
    pub messages: Vec<Rc<Message>>,
}

impl Reducible for AppState {
    type Action = AppStateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();
        match action {
            AppStateAction::AddMessage(message) => {
                current.messages.push(Rc::new(message));
            }
            AppStateAction::AddMessageWithTimeout(message, timeout, dispatcher) => {
                let id = *message.id();
                current.messages.push(Rc::new(message));

                Timeout::new(timeout, move || {
                    dispatcher.dispatch(AppStateAction::RemoveMessage(id));
                })
                .forget();
            }
            AppStateAction::RemoveMessage(id) => {
                current.messages.retain(|m| m.id() != &id);
            }
            AppStateAction::ClearMessages => {
                current.messages = Vec::new();
            }
        };

        current.into()
    }
}

pub type AppStateReducer = UseReducerHandle<AppState>;

#[cfg(test)]
#[path = "./app_state_test.rs"]
mod app_state_test;
