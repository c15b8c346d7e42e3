/// Snapshot of a scrolling container, sampled by the host on every scroll tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub scroll_top: usize,
    pub scroll_height: usize,
    pub client_height: usize,
}

impl ScrollMetrics {
    pub fn new(scroll_top: usize, scroll_height: usize, client_height: usize) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Largest scroll offset the container accepts.
    pub fn max_scroll_top(&self) -> usize {
        self.scroll_height.saturating_sub(self.client_height)
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll_top()
    }
}

/// Scroll position captured when a backward expansion was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCompensation {
    pub scroll_height_before: usize,
    pub scroll_top_before: usize,
}

impl PendingCompensation {
    pub fn capture(metrics: ScrollMetrics) -> Self {
        Self {
            scroll_height_before: metrics.scroll_height,
            scroll_top_before: metrics.scroll_top,
        }
    }

    /// Offset that keeps the previously viewed content at the same screen position once the
    /// content has grown (or shrunk) to `scroll_height_after`.
    pub fn corrected_scroll_top(&self, scroll_height_after: usize) -> usize {
        if scroll_height_after >= self.scroll_height_before {
            self.scroll_top_before
                .saturating_add(scroll_height_after - self.scroll_height_before)
        } else {
            self.scroll_top_before
                .saturating_sub(self.scroll_height_before - scroll_height_after)
        }
    }
}

/// Live handle to the container the window is rendered into.
///
/// Hosts implement this for whatever owns the scroll offset (a DOM element, a terminal
/// viewport). The compensation write is the only mutation the window performs on it.
pub trait ScrollSurface {
    fn scroll_metrics(&self) -> ScrollMetrics;

    fn set_scroll_top(&mut self, scroll_top: usize);
}
