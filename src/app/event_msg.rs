use crate::app::tea_model::AppState;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    ChangeState(AppState),
    Quit,

    // Message log navigation
    ScrollMessageLog(i32),
    ScrollToBottom,

    // Conversation management
    NextConversation,
    ClearConversation,

    // Composer
    TextInput(KeyEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sub {
    KeyboardInput,
    MouseScroll,
}
