//! Application-level error handling for the history viewer
//!
//! The windowing core never fails; everything here concerns the host program: loading
//! configuration and transcripts, logging, and the terminal.

use color_eyre::{Section, SectionExt};
use eyre::Report;

/// Result type alias for application operations
pub type Result<T> = eyre::Result<T>;

/// What the program should do with an error that reached the top level
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryStrategy {
    /// Application should exit and print the report
    Exit,
    /// Error should be reported but the application can continue
    Ignore,
}

pub trait RecoveryExt {
    fn recovery_strategy(&self) -> RecoveryStrategy;

    fn is_fatal(&self) -> bool {
        matches!(self.recovery_strategy(), RecoveryStrategy::Exit)
    }
}

impl RecoveryExt for Report {
    fn recovery_strategy(&self) -> RecoveryStrategy {
        // Logging is optional; the viewer works without a log file
        let error_str = self.to_string().to_lowercase();
        if error_str.contains("logger") || error_str.contains("logging") {
            return RecoveryStrategy::Ignore;
        }

        // Config, transcript and terminal failures leave nothing sensible to show
        RecoveryStrategy::Exit
    }
}

/// Helper functions for creating contextual errors
pub mod context {
    use super::*;

    pub fn terminal_init(message: impl Into<String>) -> Report {
        eyre::eyre!("{}", message.into())
            .with_section(|| "Terminal initialization failed".header("Error Type:"))
            .with_section(|| {
                "Try running with --inline or check terminal capabilities".header("Suggestion:")
            })
    }

    pub fn configuration(message: impl Into<String>) -> Report {
        eyre::eyre!("{}", message.into())
            .with_section(|| "Configuration error".header("Error Type:"))
            .with_section(|| {
                "Check the --config file or the HISTORY_WINDOW_CONFIG variable".header("Suggestion:")
            })
    }

    pub fn transcript(message: impl Into<String>) -> Report {
        eyre::eyre!("{}", message.into())
            .with_section(|| "Transcript error".header("Error Type:"))
            .with_section(|| {
                "Expected a conversation object or an array of conversations".header("Suggestion:")
            })
    }
}

/// Extension trait for adding terminal-specific context to errors
pub trait TerminalErrorExt {
    fn with_terminal_context(self, raw_mode: bool, alternate_screen: bool) -> Report;
}

impl<E> TerminalErrorExt for E
where
    E: Into<Report>,
{
    fn with_terminal_context(self, raw_mode: bool, alternate_screen: bool) -> Report {
        self.into()
            .with_section(move || format!("Raw mode: {}", raw_mode).header("Terminal State:"))
            .with_section(move || {
                format!("Alternate screen: {}", alternate_screen).header("Screen Mode:")
            })
    }
}
