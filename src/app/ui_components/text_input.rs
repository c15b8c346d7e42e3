use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use tui_textarea::{Input, TextArea};

pub const TEXT_INPUT_HEIGHT: u16 = 3; // border + content + border

/// Single-line composer for appending messages to the open conversation.
#[derive(Debug, Clone)]
pub struct TextInputArea {
    textarea: TextArea<'static>,
    placeholder: String,
    is_focused: bool,
}

impl TextInputArea {
    pub fn new() -> Self {
        Self::with_placeholder("Type a message, Enter to send, Esc to cancel")
    }

    pub fn with_placeholder(placeholder: &str) -> Self {
        let mut instance = Self {
            textarea: TextArea::default(),
            placeholder: placeholder.to_string(),
            is_focused: false,
        };
        instance.clear();
        instance
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
        self.textarea.set_cursor_line_style(Style::default()); // No cursor line highlighting
        self.textarea.set_placeholder_text(&self.placeholder);
    }

    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.trim().is_empty())
    }

    /// Feed a key press. Enter submits non-empty content and returns it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        if key.code == KeyCode::Enter {
            if self.is_empty() {
                return None;
            }
            let submitted_text = self.content();
            self.clear();
            return Some(submitted_text);
        }

        self.textarea.input(Input::from(key));
        None
    }
}

impl Default for TextInputArea {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &TextInputArea {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let mut textarea = self.textarea.clone();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
        textarea.render(area, buf);
    }
}
