//! Common test utilities for windowing and view tests
#![allow(dead_code)]

use history_window::window::{ScrollMetrics, ScrollSurface};
use ratatui::{backend::TestBackend, Terminal};

/// Scroll container stand-in that records every offset written to it
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub metrics: ScrollMetrics,
    pub writes: Vec<usize>,
}

impl RecordingSurface {
    pub fn new(scroll_top: usize, scroll_height: usize, client_height: usize) -> Self {
        Self {
            metrics: ScrollMetrics::new(scroll_top, scroll_height, client_height),
            writes: Vec::new(),
        }
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn set_scroll_top(&mut self, scroll_top: usize) {
        self.metrics.scroll_top = scroll_top;
        self.writes.push(scroll_top);
    }
}

/// Rows of the terminal buffer as plain strings
pub fn buffer_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

/// Screen row on which `needle` is drawn, if any
pub fn find_row(terminal: &Terminal<TestBackend>, needle: &str) -> Option<usize> {
    buffer_rows(terminal)
        .iter()
        .position(|row| row.contains(needle))
}
