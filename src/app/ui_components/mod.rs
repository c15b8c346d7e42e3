pub mod message_log;
pub mod status_bar;
pub mod text_input;

pub use message_log::{LineViewport, MessageLog};
pub use status_bar::StatusBar;
pub use text_input::{TextInputArea, TEXT_INPUT_HEIGHT};
