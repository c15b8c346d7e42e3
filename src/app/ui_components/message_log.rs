use crate::app::{
    conversation::{ChatMessage, Conversation, Role},
    text_wrapper::TextWrapper,
};
use crate::window::{HistoryWindow, ScrollMetrics, ScrollSurface, WindowConfig, WindowReport};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Color, Style, Stylize},
    symbols::scrollbar,
    text::{Line, Span, Text},
    widgets::{
        Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};

const MESSAGE_INDENT: &str = "  ";
// Columns lost to the indent plus the scrollbar
const RESERVED_COLUMNS: u16 = MESSAGE_INDENT.len() as u16 + 1;

/// Scroll state of the message area, measured in terminal rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineViewport {
    pub scroll_top: usize,
    pub content_height: usize,
    pub height: usize,
}

impl LineViewport {
    pub fn max_scroll_top(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }
}

impl ScrollSurface for LineViewport {
    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_top, self.content_height, self.height)
    }

    fn set_scroll_top(&mut self, scroll_top: usize) {
        self.scroll_top = scroll_top.min(self.max_scroll_top());
    }
}

/// Conversation view that only mounts the windowed tail of long conversations.
///
/// Call [`MessageLog::layout`] with the target area inside the draw pass before rendering:
/// that is where newly revealed messages are measured and the scroll offset is compensated.
#[derive(Debug, Clone)]
pub struct MessageLog {
    conversation: Conversation,
    window: HistoryWindow<String>,
    // Absent until the first layout pass has measured the area
    viewport: Option<LineViewport>,
    lines: Vec<Line<'static>>,
    follow_tail: bool,
    bordered: bool,
    rounded: bool,
}

impl MessageLog {
    pub fn new(conversation: Conversation, config: WindowConfig) -> Self {
        let mut message_log = Self {
            conversation,
            window: HistoryWindow::new(config),
            viewport: None,
            lines: Vec::new(),
            follow_tail: config.start_at_bottom,
            bordered: true,
            rounded: true,
        };
        message_log.sync_window();
        message_log
    }

    pub fn with_borders(mut self, bordered: bool, rounded: bool) -> Self {
        self.bordered = bordered;
        self.rounded = rounded;
        self
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn window(&self) -> &HistoryWindow<String> {
        &self.window
    }

    pub fn viewport(&self) -> Option<&LineViewport> {
        self.viewport.as_ref()
    }

    pub fn report(&self) -> WindowReport {
        self.window.report()
    }

    pub fn visible_messages(&self) -> &[ChatMessage] {
        self.window.visible(&self.conversation.messages)
    }

    pub fn is_following_tail(&self) -> bool {
        self.follow_tail
    }

    pub fn page_height(&self) -> usize {
        self.viewport
            .map(|viewport| viewport.height.saturating_sub(1).max(1))
            .unwrap_or(10)
    }

    fn sync_window(&mut self) {
        self.window
            .sync(self.conversation.messages.len(), &self.conversation.id);
    }

    /// Show a different conversation. The window restarts from its initial policy because the
    /// conversation id is the reset key. Returns the conversation that was shown before.
    pub fn replace_conversation(&mut self, conversation: Conversation) -> Conversation {
        let previous = std::mem::replace(&mut self.conversation, conversation);
        self.sync_window();
        self.follow_tail = self.window.config().start_at_bottom;
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.scroll_top = 0;
        }

        tracing::info!(
            "Switched to conversation {} ({} messages)",
            self.conversation.id,
            self.conversation.messages.len()
        );
        previous
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.conversation.messages.push(message);
        self.sync_window();

        // Auto-scroll to bottom when new message is added
        self.scroll_to_bottom();
    }

    pub fn clear(&mut self) {
        self.conversation.messages.clear();
        self.sync_window();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.scroll_top = 0;
        }
    }

    pub fn reconfigure(&mut self, config: WindowConfig) {
        self.window.reconfigure(config);
        self.sync_window();
    }

    pub fn scroll_to_bottom(&mut self) {
        // Resolved against the measured content height during the next layout
        self.follow_tail = true;
    }

    /// Move the view by `delta` rows and forward the new position to the window. Returns
    /// whether older messages were revealed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let Some(viewport) = self.viewport.as_mut() else {
            return false;
        };

        let distance = delta.unsigned_abs() as usize;
        let scroll_top = if delta < 0 {
            viewport.scroll_top.saturating_sub(distance)
        } else {
            viewport.scroll_top.saturating_add(distance)
        };
        viewport.set_scroll_top(scroll_top);

        let metrics = viewport.scroll_metrics();
        self.follow_tail = metrics.is_at_bottom();
        self.window.maybe_load_older(metrics)
    }

    /// Pre-paint pass: measure the visible slice at the width of `area`, then apply any pending
    /// scroll compensation against the new height before anything is drawn.
    pub fn layout(&mut self, area: Rect) {
        let inner = self.block().inner(area);
        self.sync_window();
        self.lines = self.build_lines(inner.width.saturating_sub(RESERVED_COLUMNS));

        let viewport = self.viewport.get_or_insert_with(LineViewport::default);
        viewport.height = inner.height as usize;
        viewport.content_height = self.lines.len();

        if self.window.compensate(self.viewport.as_mut()).is_some() {
            self.follow_tail = false;
        }

        if let Some(viewport) = self.viewport.as_mut() {
            if self.follow_tail {
                viewport.scroll_top = viewport.max_scroll_top();
            } else {
                viewport.scroll_top = viewport.scroll_top.min(viewport.max_scroll_top());
            }
        }
    }

    fn build_lines(&self, text_width: u16) -> Vec<Line<'static>> {
        let wrapper = TextWrapper::new(text_width);
        let mut lines = Vec::new();

        for message in self.visible_messages() {
            let color = match message.role {
                Role::User => Color::Cyan,
                Role::Assistant => Color::Green,
                Role::System => Color::Yellow,
            };

            // Add role header
            lines.push(Line::from(vec![Span::styled(
                format!("{}: ", message.role.label()),
                Style::default().fg(color).bold(),
            )]));

            for wrapped in wrapper.wrap_text(&message.text) {
                lines.push(Line::from(vec![Span::raw(MESSAGE_INDENT), Span::raw(wrapped)]));
            }

            // Add empty line between messages
            lines.push(Line::from(""));
        }

        lines
    }

    fn block(&self) -> Block<'_> {
        let title = format!(" {} ", self.conversation.display_title());
        let block = Block::default().title(Span::from(title).bold());
        if !self.bordered {
            return block;
        }

        let border_type = if self.rounded {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        block
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(Color::DarkGray))
    }
}

impl Widget for &MessageLog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if self.lines.is_empty() {
            Paragraph::new("No messages yet")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let viewport = self.viewport.unwrap_or_default();
        let start = viewport.scroll_top.min(self.lines.len());
        let end = start
            .saturating_add(inner.height as usize)
            .min(self.lines.len());

        // Only the rows in view are handed to ratatui
        Paragraph::new(Text::from(self.lines[start..end].to_vec())).render(inner, buf);

        // Only render the scrollbar if content is taller than the available area
        if self.lines.len() > inner.height as usize {
            let scrollbar_area = if self.bordered {
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                })
            } else {
                area
            };
            let mut scrollbar_state =
                ScrollbarState::new(viewport.max_scroll_top()).position(start);

            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .begin_symbol(None)
                .end_symbol(None)
                .render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}
