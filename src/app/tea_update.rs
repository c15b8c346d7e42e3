use crate::app::{
    conversation::ChatMessage,
    event_msg::Msg,
    tea_model::{AppState, Model},
};

pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::ChangeState(new_state) => {
            let composing = matches!(new_state, AppState::Composing);
            model.state = new_state;
            model.text_input.set_focus(composing);
            if !composing {
                model.text_input.clear();
            }
        }

        Msg::Quit => {
            model.state = AppState::Quit;
        }

        Msg::ScrollMessageLog(delta) => {
            if model.message_log.scroll_by(delta) {
                model.mark_expansion();
            }
        }

        Msg::ScrollToBottom => {
            model.message_log.scroll_to_bottom();
        }

        Msg::NextConversation => {
            model.next_conversation();
        }

        Msg::ClearConversation => {
            tracing::info!(
                "Clearing conversation {}",
                model.message_log.conversation().id
            );
            model.message_log.clear();
            model.last_expansion = None;
        }

        Msg::TextInput(key) => {
            if let Some(text) = model.text_input.handle_key(key) {
                model.message_log.push_message(ChatMessage::user(text));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{config::AppConfig, demo::demo_conversations};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    fn model() -> Model {
        Model::new(AppConfig::default(), demo_conversations(120, 5))
    }

    #[test]
    fn test_next_conversation_rotates_and_resets_window() {
        let mut model = model();
        assert_eq!(model.message_log.conversation().id, "demo-long");
        assert_eq!(model.message_log.report().start_index, 90);

        update(&mut model, Msg::NextConversation);
        assert_eq!(model.message_log.conversation().id, "demo-short");
        assert!(!model.message_log.report().should_chunk);
        assert_eq!(model.conversations.back().unwrap().id, "demo-long");
    }

    #[test]
    fn test_switching_back_restores_initial_window() {
        let mut model = model();
        model.message_log.layout(Rect::new(0, 0, 80, 24));
        let top = model.message_log.viewport().unwrap().scroll_top as i32;
        update(&mut model, Msg::ScrollMessageLog(-top));
        assert_eq!(model.message_log.report().start_index, 60);
        assert!(model.last_expansion.is_some());

        for _ in 0..3 {
            update(&mut model, Msg::NextConversation);
        }
        assert_eq!(model.message_log.conversation().id, "demo-long");
        assert_eq!(model.message_log.report().start_index, 90);
        assert!(model.message_log.window().pending_compensation().is_none());
    }

    #[test]
    fn test_clear_conversation() {
        let mut model = model();
        update(&mut model, Msg::ClearConversation);
        assert_eq!(model.message_log.report().total_messages, 0);
        assert!(!model.message_log.report().should_chunk);
    }

    #[test]
    fn test_composing_appends_user_message() {
        let mut model = model();
        update(&mut model, Msg::ChangeState(AppState::Composing));
        assert!(model.text_input.is_focused());

        for c in "ok".chars() {
            update(
                &mut model,
                Msg::TextInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
        update(
            &mut model,
            Msg::TextInput(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        );

        let messages = &model.message_log.conversation().messages;
        assert_eq!(messages.len(), 121);
        assert_eq!(messages.last().unwrap().text, "ok");

        update(&mut model, Msg::ChangeState(AppState::Browsing));
        assert!(!model.text_input.is_focused());
    }

    #[test]
    fn test_quit() {
        let mut model = model();
        update(&mut model, Msg::Quit);
        assert!(model.is_quitting());
    }
}
