use crate::app::error::{context, Result, TerminalErrorExt};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use std::io::{self, Write};

/// Restores the terminal when dropped, including on early returns and panics unwinding
/// through the program loop.
pub struct TerminalGuard {
    inline_mode: bool,
}

impl TerminalGuard {
    pub fn new(
        inline_mode: bool,
        height: u16,
    ) -> Result<(Self, Terminal<CrosstermBackend<io::Stdout>>)> {
        tracing::info!("Initializing terminal - inline_mode: {}", inline_mode);

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(context::terminal_init(format!("Failed to enable raw mode: {}", e)));
        }

        // From here on the guard undoes whatever was set up if a later step fails
        let guard = TerminalGuard { inline_mode };

        let mut stdout = io::stdout();
        execute!(stdout, EnableMouseCapture)
            .map_err(|e| e.with_terminal_context(true, false))?;

        if !inline_mode {
            tracing::debug!("Entering alternate screen mode");
            execute!(stdout, EnterAlternateScreen)
                .map_err(|e| e.with_terminal_context(true, false))?;
        } else {
            tracing::debug!("Using inline mode with height: {}", height);
        }

        let backend = CrosstermBackend::new(stdout);

        let viewport = if inline_mode {
            Viewport::Inline(height)
        } else {
            Viewport::Fullscreen
        };

        let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })
            .map_err(|e| e.with_terminal_context(true, !inline_mode))?;

        terminal.clear()?;
        terminal.hide_cursor()?;

        tracing::info!("Terminal initialized successfully");
        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        tracing::info!("Cleaning up terminal - inline_mode: {}", self.inline_mode);

        if let Err(e) = disable_raw_mode() {
            tracing::error!("Failed to disable raw mode during cleanup: {}", e);
        }

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, DisableMouseCapture) {
            tracing::error!("Failed to disable mouse capture during cleanup: {}", e);
        }

        if !self.inline_mode {
            tracing::debug!("Leaving alternate screen mode");
            if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
                tracing::error!("Failed to leave alternate screen during cleanup: {}", e);
            }
        }

        if let Err(e) = execute!(stdout, crossterm::cursor::Show) {
            tracing::error!("Failed to show cursor during cleanup: {}", e);
        }

        if let Err(e) = stdout.flush() {
            tracing::error!("Failed to flush stdout during cleanup: {}", e);
        }

        tracing::info!("Terminal cleanup completed");
    }
}
