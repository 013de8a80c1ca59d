//! Notification.
use crate::types::Message as MessageData;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    pub message: Rc<MessageData>,

    /// Callback when the message is clicked.
    /// Receives the message's id.
    #[prop_or_default]
    pub ondismiss: Callback<Uuid>,
}

#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let onclick = {
        let id = *props.message.id();
        let ondismiss = props.ondismiss.clone();

        Callback::from(move |_: MouseEvent| {
            ondismiss.emit(id);
        })
    };

    let class = classes!("notification", props.message.kind.class());
    html! {
        <div {class} {onclick}>
            { props.message.message.clone() }
        </div>
    }
}
