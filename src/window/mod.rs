//! Conversation history windowing.
//!
//! A [`HistoryWindow`] keeps a contiguous `start_index..` slice of an externally owned message
//! list visible. Short conversations are shown in full; long ones start with a tail (or head)
//! window that grows backward in `chunk_size` steps whenever the scroll offset comes within
//! `top_load_offset` of the top. Each backward expansion records a [`PendingCompensation`]
//! that the host applies once, after measuring the new content and before painting, so the
//! message under the user's eyes stays put.

mod config;
mod controller;
mod metrics;

pub use config::WindowConfig;
pub use controller::{visible_slice, HistoryWindow, WindowReport};
pub use metrics::{PendingCompensation, ScrollMetrics, ScrollSurface};
