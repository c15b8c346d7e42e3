use super::{PendingCompensation, ScrollMetrics, ScrollSurface, WindowConfig};
use crate::tracing_macros::{debug_hot_path, trace_hot_path};

/// Inputs whose change forces the initial window to be recomputed. Configuration changes go
/// through `reconfigure`, which always resets.
#[derive(Debug, Clone, PartialEq)]
struct Governing<K> {
    reset_key: K,
    total_messages: usize,
}

/// Copyable view of the window, for status lines and logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowReport {
    pub total_messages: usize,
    pub start_index: usize,
    pub visible_count: usize,
    pub should_chunk: bool,
    pub has_older_messages: bool,
    pub compensation_pending: bool,
}

/// Visible-range state machine for a conversation of `total_messages` items.
///
/// `K` is the reset key: hosts pass the identity of the conversation being shown so that
/// switching conversations on a reused controller starts from a fresh window.
#[derive(Debug, Clone)]
pub struct HistoryWindow<K = ()> {
    config: WindowConfig,
    governing: Option<Governing<K>>,
    total_messages: usize,
    start_index: usize,
    pending: Option<PendingCompensation>,
}

/// Slice of `messages` shown for the given window state. Always runs to the end.
pub fn visible_slice<T>(messages: &[T], should_chunk: bool, start_index: usize) -> &[T] {
    if !should_chunk {
        return messages;
    }
    &messages[start_index.min(messages.len())..]
}

impl<K: PartialEq + Clone> HistoryWindow<K> {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            governing: None,
            total_messages: 0,
            start_index: 0,
            pending: None,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Feed the current message count and reset key. Recomputes the window from scratch on
    /// first use and whenever the count or the key differs from the last sync; repeated syncs
    /// with the same inputs keep the current window. Returns whether it recomputed.
    pub fn sync(&mut self, total_messages: usize, reset_key: &K) -> bool {
        let changed = match &self.governing {
            None => true,
            Some(governing) => {
                governing.reset_key != *reset_key || governing.total_messages != total_messages
            }
        };

        if changed {
            self.governing = Some(Governing {
                reset_key: reset_key.clone(),
                total_messages,
            });
            self.total_messages = total_messages;
            self.reset();
        }

        changed
    }

    /// Swap in a new policy. This is a full reset: any pending compensation is dropped.
    pub fn reconfigure(&mut self, config: WindowConfig) {
        self.config = config;
        self.reset();
    }

    fn reset(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(?pending, "Dropping pending scroll compensation on window reset");
        }

        self.start_index = if !self.should_chunk() {
            0
        } else if self.config.start_at_bottom {
            self.total_messages.saturating_sub(self.config.chunk_size)
        } else {
            0
        };

        tracing::debug!(
            total_messages = self.total_messages,
            start_index = self.start_index,
            should_chunk = self.should_chunk(),
            "History window reset"
        );
    }

    /// Scroll tick from the host. Reveals up to `chunk_size` older messages when the user is
    /// within `top_load_offset` of the top and records the position to compensate.
    pub fn maybe_load_older(&mut self, metrics: ScrollMetrics) -> bool {
        trace_hot_path!(?metrics, start_index = self.start_index, "Scroll tick");

        if !self.should_chunk()
            || self.start_index == 0
            || metrics.scroll_top > self.config.top_load_offset
            || self.config.chunk_size == 0
        {
            return false;
        }

        if let Some(superseded) = self.pending.replace(PendingCompensation::capture(metrics)) {
            tracing::warn!(
                ?superseded,
                "Backward expansion requested before the previous compensation was applied"
            );
        }

        self.start_index = self.start_index.saturating_sub(self.config.chunk_size);

        debug_hot_path!(
            chunk_size = self.config.chunk_size,
            start_index = self.start_index,
            scroll_height_before = metrics.scroll_height,
            scroll_top_before = metrics.scroll_top,
            "Expanded history window backward"
        );
        true
    }

    /// Consume the pending compensation against the freshly measured content height and
    /// return the scroll offset to apply. `None` when nothing is pending.
    pub fn take_compensation(&mut self, scroll_height_after: usize) -> Option<usize> {
        let pending = self.pending.take()?;
        let scroll_top = pending.corrected_scroll_top(scroll_height_after);

        debug_hot_path!(
            scroll_height_before = pending.scroll_height_before,
            scroll_height_after,
            scroll_top_before = pending.scroll_top_before,
            scroll_top,
            "Applying scroll compensation"
        );
        Some(scroll_top)
    }

    /// Apply the pending compensation to a measured surface. Call after the host has laid out
    /// the newly revealed messages and before it paints. Without a surface the compensation
    /// is discarded.
    pub fn compensate<S>(&mut self, surface: Option<&mut S>) -> Option<usize>
    where
        S: ScrollSurface + ?Sized,
    {
        let Some(surface) = surface else {
            if self.pending.take().is_some() {
                tracing::debug!("No scroll surface, skipping compensation");
            }
            return None;
        };

        let scroll_top = self.take_compensation(surface.scroll_metrics().scroll_height)?;
        surface.set_scroll_top(scroll_top);
        Some(scroll_top)
    }

    pub fn should_chunk(&self) -> bool {
        self.config.should_chunk(self.total_messages)
    }

    pub fn start_index(&self) -> usize {
        if self.should_chunk() {
            self.start_index
        } else {
            0
        }
    }

    pub fn has_older_messages(&self) -> bool {
        self.should_chunk() && self.start_index > 0
    }

    pub fn total_messages(&self) -> usize {
        self.total_messages
    }

    pub fn pending_compensation(&self) -> Option<&PendingCompensation> {
        self.pending.as_ref()
    }

    pub fn visible<'a, T>(&self, messages: &'a [T]) -> &'a [T] {
        visible_slice(
            messages,
            self.config.should_chunk(messages.len()),
            self.start_index,
        )
    }

    pub fn report(&self) -> WindowReport {
        let start_index = self.start_index();
        WindowReport {
            total_messages: self.total_messages,
            start_index,
            visible_count: self.total_messages.saturating_sub(start_index),
            should_chunk: self.should_chunk(),
            has_older_messages: self.has_older_messages(),
            compensation_pending: self.pending.is_some(),
        }
    }
}

impl<K: PartialEq + Clone> Default for HistoryWindow<K> {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}
