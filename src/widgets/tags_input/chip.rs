//! A single removable tag.
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ChipProps {
    /// Tag
    pub tag: AttrValue,

    /// Callback when the remove control is clicked.
    /// Receives the tag.
    #[prop_or_default]
    pub onremove: Callback<AttrValue>,
}

#[function_component(Chip)]
pub fn chip(props: &ChipProps) -> Html {
    let onclick = {
        let tag = props.tag.clone();
        let onremove = props.onremove.clone();

        Callback::from(move |_: MouseEvent| {
            onremove.emit(tag.clone());
        })
    };

    html! {
        <div class={classes!("tag")} data-tag="">
            <span>{ props.tag.clone() }</span>
            <div data-remove="" {onclick}>
                <Icon icon_id={IconId::FeatherX} />
            </div>
        </div>
    }
}
