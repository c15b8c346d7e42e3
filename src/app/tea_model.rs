use crate::app::{
    config::AppConfig,
    conversation::Conversation,
    ui_components::{MessageLog, TextInputArea},
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Browsing,
    Composing,
    Quit,
}

impl AppState {
    pub fn label(&self) -> &'static str {
        match self {
            AppState::Browsing => "BROWSE",
            AppState::Composing => "COMPOSE",
            AppState::Quit => "QUIT",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Model {
    pub config: AppConfig,
    pub state: AppState,
    // Stateful components:
    pub message_log: MessageLog,
    pub text_input: TextInputArea,
    // Conversations not currently shown, in switching order
    pub conversations: VecDeque<Conversation>,
    pub last_expansion: Option<Instant>,
}

impl Model {
    pub fn new(config: AppConfig, conversations: Vec<Conversation>) -> Self {
        let mut conversations = VecDeque::from(conversations);
        let first = conversations
            .pop_front()
            .unwrap_or_else(|| Conversation::new("empty", "Empty conversation"));

        let message_log = MessageLog::new(first, config.window_config())
            .with_borders(config.ui.bordered, config.ui.rounded);

        Self {
            config,
            state: AppState::Browsing,
            message_log,
            text_input: TextInputArea::new(),
            conversations,
            last_expansion: None,
        }
    }

    pub fn is_quitting(&self) -> bool {
        matches!(self.state, AppState::Quit)
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, AppState::Composing)
    }

    /// Rotate to the next conversation; the current one goes to the back of the queue.
    pub fn next_conversation(&mut self) {
        let Some(next) = self.conversations.pop_front() else {
            return;
        };
        let previous = self.message_log.replace_conversation(next);
        self.conversations.push_back(previous);
        self.last_expansion = None;
    }

    pub fn mark_expansion(&mut self) {
        let report = self.message_log.report();
        tracing::info!(
            "Revealed older messages in {}: now showing {} of {}",
            self.message_log.conversation().id,
            report.visible_count,
            report.total_messages
        );
        self.last_expansion = Some(Instant::now());
    }

    /// Whether the "loading older messages" indicator should still be shown.
    pub fn is_loading_older(&self) -> bool {
        let indicator = Duration::from_millis(self.config.ui.expansion_indicator_ms);
        self.last_expansion
            .map(|at| at.elapsed() < indicator)
            .unwrap_or(false)
    }
}
