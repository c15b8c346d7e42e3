use crate::app::{
    tea_model::Model,
    ui_components::{StatusBar, TEXT_INPUT_HEIGHT},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Lay out and draw one frame. Takes the model mutably because the message log's layout pass
/// runs here, after the frame size is known and before any widget is painted.
pub fn view(model: &mut Model, frame: &mut Frame) {
    let input_height = if model.is_composing() {
        TEXT_INPUT_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),               // Message log
            Constraint::Length(input_height), // Composer
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    // Measure newly revealed messages and compensate the scroll offset before painting
    model.message_log.layout(chunks[0]);
    frame.render_widget(&model.message_log, chunks[0]);

    if model.is_composing() {
        frame.render_widget(&model.text_input, chunks[1]);
    }

    let status_bar = StatusBar::new(
        model.message_log.conversation().display_title(),
        model.message_log.report(),
        model.state.label(),
    )
    .loading_older(model.is_loading_older());
    frame.render_widget(status_bar, chunks[2]);
}
