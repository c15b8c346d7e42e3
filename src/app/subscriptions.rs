use crate::app::{
    error::Result,
    event_msg::{Msg, Sub},
    tea_model::{AppState, Model},
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use std::time::Duration;

const MOUSE_SCROLL_ROWS: i32 = 3;

pub fn subscriptions(model: &Model) -> Vec<Sub> {
    match model.state {
        AppState::Browsing | AppState::Composing => vec![Sub::KeyboardInput, Sub::MouseScroll],
        AppState::Quit => vec![],
    }
}

/// Whether `event` belongs to one of the active subscriptions
pub fn is_subscribed(subs: &[Sub], event: &Event) -> bool {
    match event {
        Event::Key(_) => subs.contains(&Sub::KeyboardInput),
        Event::Mouse(_) => subs.contains(&Sub::MouseScroll),
        _ => false,
    }
}

pub fn poll_subscriptions(model: &Model) -> Result<Option<Msg>> {
    let subs = subscriptions(model);

    if subs.is_empty() {
        return Ok(None);
    }

    if event::poll(Duration::from_millis(16))? {
        let event = event::read()?;
        if is_subscribed(&subs, &event) {
            return Ok(crossterm_to_msg(event, model));
        }
    }

    Ok(None)
}

pub fn crossterm_to_msg(event: Event, model: &Model) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let page = model.message_log.page_height() as i32;

            match (&model.state, key.code, key.modifiers) {
                // Global quit
                (_, KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Msg::Quit),

                // Composer owns the keyboard until Esc
                (AppState::Composing, KeyCode::Esc, _) => {
                    Some(Msg::ChangeState(AppState::Browsing))
                }
                (AppState::Composing, _, _) => Some(Msg::TextInput(key)),

                (AppState::Browsing, KeyCode::Char('q'), _) => Some(Msg::Quit),
                (AppState::Browsing, KeyCode::Esc, _) => Some(Msg::Quit),
                (AppState::Browsing, KeyCode::Char('i'), _) => {
                    Some(Msg::ChangeState(AppState::Composing))
                }
                (AppState::Browsing, KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                    Some(Msg::ClearConversation)
                }
                (AppState::Browsing, KeyCode::Tab, _) => Some(Msg::NextConversation),

                // Scrolling
                (AppState::Browsing, KeyCode::Up | KeyCode::Char('k'), _) => {
                    Some(Msg::ScrollMessageLog(-1))
                }
                (AppState::Browsing, KeyCode::Down | KeyCode::Char('j'), _) => {
                    Some(Msg::ScrollMessageLog(1))
                }
                (AppState::Browsing, KeyCode::PageUp, _) => Some(Msg::ScrollMessageLog(-page)),
                (AppState::Browsing, KeyCode::PageDown, _) => Some(Msg::ScrollMessageLog(page)),
                (AppState::Browsing, KeyCode::End | KeyCode::Char('G'), _) => {
                    Some(Msg::ScrollToBottom)
                }

                _ => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Msg::ScrollMessageLog(-MOUSE_SCROLL_ROWS)),
            MouseEventKind::ScrollDown => Some(Msg::ScrollMessageLog(MOUSE_SCROLL_ROWS)),
            _ => None,
        },
        _ => None,
    }
}
