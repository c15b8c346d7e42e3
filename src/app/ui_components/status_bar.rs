use crate::window::WindowReport;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use throbber_widgets_tui::Throbber;

#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    title: &'a str,
    report: WindowReport,
    mode: &'a str,
    loading_older: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str, report: WindowReport, mode: &'a str) -> Self {
        Self {
            title,
            report,
            mode,
            loading_older: false,
        }
    }

    pub fn loading_older(mut self, loading_older: bool) -> Self {
        self.loading_older = loading_older;
        self
    }

    pub fn window_text(&self) -> String {
        let report = &self.report;
        if report.should_chunk {
            format!(
                " {}/{} shown from #{}",
                report.visible_count, report.total_messages, report.start_index
            )
        } else {
            format!(" {} messages", report.total_messages)
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let window_text = self.window_text();
        let mode_text = format!(" {} ", self.mode);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(12),                          // Loading section
                Constraint::Length(window_text.len() as u16), // Window section
                Constraint::Length(mode_text.len() as u16),   // Mode section
            ])
            .split(area);

        if self.loading_older {
            Throbber::default()
                .label("Loading older messages")
                .render(chunks[0], buf);
        } else {
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", self.title),
                Style::default().fg(Color::DarkGray),
            )))
            .render(chunks[0], buf);
        }

        Paragraph::new(Line::from(window_text)).render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            mode_text,
            Style::default().bg(Color::Magenta).fg(Color::White),
        )))
        .render(chunks[2], buf);
    }
}
