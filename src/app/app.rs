//! Main application.
use super::app_state::{AppState, AppStateAction, AppStateReducer};
use crate::components::Messages;
use crate::config::TagsInputConfig;
use crate::confirm::{ConfirmHandle, WindowConfirm};
use crate::constants::{AUTHOR_URL, MESSAGE_TIMEOUT};
use crate::storage::{LocalStore, StoreHandle};
use crate::types::Message;
use crate::widgets::TagsInput;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

// *********************
// *** App Component ***
// *********************

/// Tags input box bound to the page's `localStorage` and `window.confirm`.
#[function_component(App)]
pub fn app() -> Html {
    let app_state = use_reducer(AppState::default);
    let store = use_memo((), |_| StoreHandle::new(LocalStore));
    let confirm = use_memo((), |_| ConfirmHandle::new(WindowConfirm));

    let onmessage = {
        let app_state = app_state.dispatcher();

        Callback::from(move |message: Message| {
            app_state.dispatch(AppStateAction::AddMessageWithTimeout(
                message,
                MESSAGE_TIMEOUT,
                app_state.clone(),
            ));
        })
    };

    html! {
        <ContextProvider<AppStateReducer> context={app_state}>
            <div class={classes!("app-container")}>
                <TagsInput
                    config={TagsInputConfig::default()}
                    store={(*store).clone()}
                    confirm={(*confirm).clone()}
                    {onmessage} />

                <a class={classes!("app-author")} href={AUTHOR_URL} target="_blank">
                    <Icon icon_id={IconId::FeatherGithub} />
                </a>
            </div>
            <Messages />
        </ContextProvider<AppStateReducer>>
    }
}
