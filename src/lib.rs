//! History window
//!
//! Conversation history windowing for chat views: decides which tail (or head) slice of a long
//! message list stays mounted, widens it as the user scrolls toward the top, and computes the
//! scroll offset that keeps the viewed content anchored when older messages are inserted above.
//!
//! The `window` module is the reusable core. The `app` module hosts it in a terminal chat viewer.

mod tracing_macros;

pub mod app;
pub mod window;

pub use window::{
    visible_slice, HistoryWindow, PendingCompensation, ScrollMetrics, ScrollSurface,
    WindowConfig, WindowReport,
};
