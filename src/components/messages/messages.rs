//! Displays the application's messages.
use super::Message;
use crate::app::{AppStateAction, AppStateReducer};
use uuid::Uuid;
use yew::prelude::*;

/// Renders the messages of the [`AppStateReducer`] context.
/// Clicking a message dismisses it.
#[function_component(Messages)]
pub fn messages() -> Html {
    let Some(app_state) = use_context::<AppStateReducer>() else {
        tracing::error!("could not find `AppStateReducer` context");
        return html! {};
    };

    let ondismiss = {
        let app_state = app_state.dispatcher();

        Callback::from(move |id: Uuid| {
            app_state.dispatch(AppStateAction::RemoveMessage(id));
        })
    };

    html! {
        <div class={classes!("notifications")}>
            { app_state.messages.iter().map(|message| html! {
                <Message
                    key={message.id().to_string()}
                    message={message.clone()}
                    ondismiss={ondismiss.clone()} />
            }).collect::<Html>() }
        </div>
    }
}
