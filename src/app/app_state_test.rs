use super::*;

#[test]
fn add_and_remove_message_should_work() {
    let state = Rc::new(AppState::default());
    let message = Message::success("All tags are successfully deleted");
    let id = *message.id();

    let state = state.reduce(AppStateAction::AddMessage(message.clone()));
    assert_eq!(1, state.messages.len());
    assert_eq!(message, *state.messages[0]);

    let state = state.reduce(AppStateAction::RemoveMessage(Uuid::new_v4()));
    assert_eq!(1, state.messages.len(), "unknown id should be ignored");

    let state = state.reduce(AppStateAction::RemoveMessage(id));
    assert!(state.messages.is_empty());
}

#[test]
fn clear_messages_should_work() {
    let mut state = Rc::new(AppState::default());
    for _ in 0..3 {
        state = state.reduce(AppStateAction::AddMessage(Message::info("info")));
    }

    assert_eq!(3, state.messages.len());
    let state = state.reduce(AppStateAction::ClearMessages);
    assert!(state.messages.is_empty());
}
