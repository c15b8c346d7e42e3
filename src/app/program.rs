use crate::app::{
    error::Result,
    subscriptions::poll_subscriptions,
    tea_model::Model,
    tea_update::update,
    tea_view::view,
    terminal::TerminalGuard,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub struct Program {
    model: Model,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    // Dropped after the terminal so cleanup runs last
    _guard: TerminalGuard,
}

impl Program {
    pub fn new(model: Model, inline_mode: bool) -> Result<Self> {
        let (guard, terminal) = TerminalGuard::new(inline_mode, model.config.ui.inline_height)?;

        Ok(Program {
            model,
            terminal,
            _guard: guard,
        })
    }

    pub fn run(mut self) -> Result<()> {
        tracing::info!(
            "Starting with conversation {} ({} more queued)",
            self.model.message_log.conversation().id,
            self.model.conversations.len()
        );

        loop {
            // View: layout, compensation, then paint
            self.terminal.draw(|f| view(&mut self.model, f))?;

            if self.model.is_quitting() {
                break;
            }

            // Subscriptions: Convert external events to messages
            if let Some(msg) = poll_subscriptions(&self.model)? {
                tracing::trace!(?msg, "Update");
                update(&mut self.model, msg);
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }
}
