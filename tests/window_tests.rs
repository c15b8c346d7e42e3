//! Behaviour of the history window controller as seen by a host view

mod common;

use common::RecordingSurface;
use history_window::{visible_slice, HistoryWindow, ScrollMetrics, WindowConfig};

fn messages(n: usize) -> Vec<usize> {
    (0..n).collect()
}

fn window_for(total: usize, config: WindowConfig) -> HistoryWindow<u64> {
    let mut window = HistoryWindow::new(config);
    window.sync(total, &1);
    window
}

#[test]
fn activation_threshold_is_exclusive() {
    for (n, expected) in [(0, false), (49, false), (50, false), (51, true), (120, true)] {
        let window = window_for(n, WindowConfig::default());
        assert_eq!(window.should_chunk(), expected, "n = {}", n);
    }
}

#[test]
fn initial_tail_window_shows_last_chunk() {
    let all = messages(120);
    let window = window_for(all.len(), WindowConfig::default());

    assert_eq!(window.start_index(), 90);
    assert_eq!(window.visible(&all).len(), 30);
    assert_eq!(window.visible(&all).first(), Some(&90));
    assert_eq!(window.visible(&all).last(), Some(&119));
}

#[test]
fn head_anchored_window_shows_everything_from_zero() {
    let all = messages(120);
    let mut window = window_for(
        all.len(),
        WindowConfig::default().with_start_at_bottom(false),
    );

    assert!(window.should_chunk());
    assert_eq!(window.start_index(), 0);
    assert_eq!(window.visible(&all).len(), 120);
    assert!(!window.has_older_messages());
    assert!(!window.maybe_load_older(ScrollMetrics::new(0, 9000, 600)));
}

#[test]
fn expansion_is_gated_by_top_load_offset() {
    let mut window = window_for(120, WindowConfig::default());

    assert!(!window.maybe_load_older(ScrollMetrics::new(200, 4000, 600)));
    assert_eq!(window.start_index(), 90);
    assert!(window.pending_compensation().is_none());

    assert!(window.maybe_load_older(ScrollMetrics::new(50, 4000, 600)));
    assert_eq!(window.start_index(), 60);
    assert!(window.pending_compensation().is_some());
}

#[test]
fn repeated_expansion_walks_back_to_the_first_message() {
    let all = messages(100);
    let mut window = window_for(all.len(), WindowConfig::default());
    let mut starts = vec![window.start_index()];

    while window.maybe_load_older(ScrollMetrics::new(0, 1000, 600)) {
        window.take_compensation(1000);
        starts.push(window.start_index());
    }

    // The last step reveals a partial chunk
    assert_eq!(starts, vec![70, 40, 10, 0]);
    assert!(!window.has_older_messages());
    assert_eq!(window.visible(&all), &all[..]);
}

#[test]
fn compensation_keeps_viewed_content_anchored() {
    let mut window = window_for(120, WindowConfig::default());
    let mut surface = RecordingSurface::new(50, 4000, 600);

    assert!(window.maybe_load_older(surface.metrics));

    // Host lays out the revealed messages; the content grew by 1200
    surface.metrics.scroll_height = 5200;
    assert_eq!(window.compensate(Some(&mut surface)), Some(1250));
    assert_eq!(surface.writes, vec![1250]);

    // A later, unrelated render must not move the view again
    surface.metrics.scroll_height = 5300;
    assert_eq!(window.compensate(Some(&mut surface)), None);
    assert_eq!(surface.writes, vec![1250]);
}

#[test]
fn missing_surface_skips_compensation() {
    let mut window = window_for(120, WindowConfig::default());
    assert!(window.maybe_load_older(ScrollMetrics::new(10, 4000, 600)));

    assert_eq!(window.compensate::<RecordingSurface>(None), None);
    assert!(window.pending_compensation().is_none());
    assert_eq!(window.start_index(), 60);
}

#[test]
fn reset_key_change_matches_fresh_instance() {
    let mut reused = window_for(120, WindowConfig::default());
    assert!(reused.maybe_load_older(ScrollMetrics::new(0, 4000, 600)));
    assert!(reused.maybe_load_older(ScrollMetrics::new(0, 5000, 600)));
    assert_eq!(reused.start_index(), 30);

    assert!(reused.sync(120, &2));
    let fresh = window_for(120, WindowConfig::default());

    assert_eq!(reused.report(), fresh.report());
    assert!(reused.pending_compensation().is_none());
}

#[test]
fn same_reset_key_keeps_state() {
    let mut window = window_for(120, WindowConfig::default());
    assert!(window.maybe_load_older(ScrollMetrics::new(0, 4000, 600)));

    assert!(!window.sync(120, &1));
    assert_eq!(window.start_index(), 60);
    assert!(window.pending_compensation().is_some());
}

#[test]
fn shrinking_below_threshold_snaps_back() {
    let all = messages(10);
    let mut window = window_for(120, WindowConfig::default());
    assert_eq!(window.start_index(), 90);

    window.sync(all.len(), &1);
    assert!(!window.should_chunk());
    assert_eq!(window.start_index(), 0);
    assert_eq!(window.visible(&all).len(), 10);
}

#[test]
fn length_change_while_active_recomputes_tail_window() {
    let mut window = window_for(120, WindowConfig::default());
    assert!(window.maybe_load_older(ScrollMetrics::new(0, 4000, 600)));
    assert_eq!(window.take_compensation(4000), Some(0));
    assert_eq!(window.start_index(), 60);

    let grown = messages(121);
    assert!(window.sync(grown.len(), &1));
    assert_eq!(window.start_index(), 91);
    assert_eq!(window.visible(&grown)[0], 91);

    let shrunk = messages(80);
    assert!(window.sync(shrunk.len(), &1));
    assert!(window.should_chunk());
    assert_eq!(window.start_index(), 50);
    assert_eq!(window.visible(&shrunk).len(), 30);
}

#[test]
fn growing_past_threshold_starts_a_tail_window() {
    let mut window = window_for(50, WindowConfig::default());
    assert!(!window.should_chunk());

    assert!(window.sync(51, &1));
    assert_eq!(window.start_index(), 21);
}

#[test]
fn reconfigure_resets_with_new_policy() {
    let mut window = window_for(120, WindowConfig::default());
    assert!(window.maybe_load_older(ScrollMetrics::new(0, 4000, 600)));

    window.reconfigure(WindowConfig::default().with_chunk_size(20));
    assert_eq!(window.start_index(), 100);
    assert!(window.pending_compensation().is_none());

    window.reconfigure(WindowConfig::default().with_threshold(200));
    assert!(!window.should_chunk());
    assert_eq!(window.start_index(), 0);
}

#[test]
fn visible_slice_is_pure() {
    let all = messages(5);
    assert_eq!(visible_slice(&all, true, 3), &[3, 4]);
    assert_eq!(visible_slice(&all, false, 3), &all[..]);
    assert_eq!(all, messages(5));
}
