use serde::{Deserialize, Serialize};

pub const DEFAULT_CHUNK_SIZE: usize = 30;
pub const DEFAULT_THRESHOLD: usize = 50;
pub const DEFAULT_TOP_LOAD_OFFSET: usize = 120;

/// Windowing policy. Fixed for the lifetime of a [`HistoryWindow`](super::HistoryWindow)
/// unless replaced through `reconfigure`, which resets the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Messages revealed per backward expansion.
    pub chunk_size: usize,
    /// Windowing only kicks in once the conversation holds more than this many messages.
    pub threshold: usize,
    /// Distance from the top, in scroll units, at which older messages are pulled in.
    pub top_load_offset: usize,
    /// Anchor the initial window to the newest messages instead of the oldest.
    pub start_at_bottom: bool,
}

impl WindowConfig {
    pub fn should_chunk(&self, total_messages: usize) -> bool {
        total_messages > self.threshold
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_top_load_offset(mut self, top_load_offset: usize) -> Self {
        self.top_load_offset = top_load_offset;
        self
    }

    pub fn with_start_at_bottom(mut self, start_at_bottom: bool) -> Self {
        self.start_at_bottom = start_at_bottom;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            threshold: DEFAULT_THRESHOLD,
            top_load_offset: DEFAULT_TOP_LOAD_OFFSET,
            start_at_bottom: true,
        }
    }
}
