//! Tags input box.
use super::chip::Chip;
use super::tags_state::{TagsState, TagsStateAction};
use crate::components::Message as MessageUi;
use crate::config::TagsInputConfig;
use crate::confirm::ConfirmHandle;
use crate::constants::{CONFIRM_REMOVE_ALL, HINT, REMOVE_ALL_SUCCESS};
use crate::storage::StoreHandle;
use crate::types::Message;
use std::rc::Rc;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

// *****************
// *** TagsInput ***
// *****************

#[derive(Properties, PartialEq)]
pub struct TagsInputProps {
    #[prop_or_default]
    pub config: TagsInputConfig,

    /// Store the tags are persisted in.
    pub store: StoreHandle,

    /// Confirms removing all tags.
    pub confirm: ConfirmHandle,

    /// Callback to notify the user.
    #[prop_or_default]
    pub onmessage: Callback<Message>,
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Tags input box.
///
/// ```mermaid
/// flowchart TD
///     start(Mount) --> load(Load persisted tags)
///     load -- Corrupt --> error(Display error)
///     load -- Ok --> idle(Idle)
///     idle -- Enter --> add(Add tag) --> idle
///     idle -- Chip removed --> remove(Remove tag) --> idle
///     idle -- Remove all --> confirm{Confirm}
///     confirm -- Yes --> clear(Clear tags and store) --> idle
///     confirm -- No --> idle
/// ```
#[function_component(TagsInput)]
pub fn tags_input(props: &TagsInputProps) -> Html {
    let loads = use_mut_ref(|| 0_u64);
    let loaded = use_memo(
        (props.config.clone(), props.store.clone()),
        |(config, store)| {
            *loads.borrow_mut() += 1;
            let state = TagsState::load(config, store.clone());
            if let Err(err) = &state {
                tracing::error!(?err, "could not load tags");
            }

            (*loads.borrow(), state)
        },
    );

    // a new load remounts the box so its reducer starts from the new state
    let (generation, state) = &*loaded;
    match state {
        Ok(state) => html! {
            <TagsBox
                key={generation.to_string()}
                title={props.config.title.clone()}
                initial={state.clone()}
                confirm={props.confirm.clone()}
                onmessage={props.onmessage.clone()} />
        },

        Err(err) => html! {
            <MessageUi message={Rc::new(Message::error(format!("Could not load tags: {err}")))} />
        },
    }
}

// ***************
// *** TagsBox ***
// ***************

#[derive(Properties, PartialEq)]
struct TagsBoxProps {
    pub title: AttrValue,
    pub initial: TagsState,
    pub confirm: ConfirmHandle,
    pub onmessage: Callback<Message>,
}

#[function_component(TagsBox)]
fn tags_box(props: &TagsBoxProps) -> Html {
    let tags_state = use_reducer({
        let initial = props.initial.clone();
        move || initial
    });

    let input_ref = use_node_ref();

    use_effect_with(tags_state.clone(), {
        let input_ref = input_ref.clone();
        move |_| {
            if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                if let Err(err) = input.focus() {
                    tracing::debug!(?err, "could not focus input");
                }
            }
        }
    });

    let onkeyup = {
        let tags_state = tags_state.dispatcher();
        let input_ref = input_ref.clone();

        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }

            let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() else {
                return;
            };

            tags_state.dispatch(TagsStateAction::AddTag(input.value()));
            input.set_value("");
        })
    };

    let onremove = {
        let tags_state = tags_state.dispatcher();

        Callback::from(move |tag: AttrValue| {
            tags_state.dispatch(TagsStateAction::RemoveTag(tag.to_string()));
        })
    };

    let onremove_all = {
        let tags_state = tags_state.dispatcher();
        let confirm = props.confirm.clone();
        let onmessage = props.onmessage.clone();

        Callback::from(move |_: MouseEvent| {
            if !confirm.confirm(CONFIRM_REMOVE_ALL) {
                return;
            }

            tags_state.dispatch(TagsStateAction::RemoveAll);
            onmessage.emit(Message::success(REMOVE_ALL_SUCCESS));
        })
    };

    html! {
        <div class={classes!("tags-input-box")}>
            <div class={classes!("top")}>
                <Icon icon_id={IconId::FeatherTag} />
                <h3 class={classes!("title")}>{ props.title.clone() }</h3>
            </div>

            <div class={classes!("content")}>
                <p>{ HINT }</p>
                <div class={classes!("tags", "input")} data-tags="">
                    { tags_state.tags().tags().iter().map(|tag| html! {
                        <Chip tag={tag.clone()} onremove={onremove.clone()} />
                    }).collect::<Html>() }

                    <input
                        ref={input_ref}
                        type="text"
                        spellcheck="false"
                        data-input=""
                        {onkeyup} />
                </div>
            </div>

            <div class={classes!("footer")}>
                <p>
                    <span data-count="">{ tags_state.remaining().to_string() }</span>
                    { " tags are remaining" }
                </p>
                <button data-remove="" onclick={onremove_all}>{ "Remove All" }</button>
            </div>
        </div>
    }
}
