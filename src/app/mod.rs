pub mod config;
pub mod conversation;
pub mod demo;
pub mod error;
pub mod event_msg;
pub mod logger;
pub mod program;
pub mod subscriptions;
pub mod tea_model;
pub mod tea_update;
pub mod tea_view;
pub mod terminal;
pub mod text_wrapper;
pub mod ui_components;

pub use config::AppConfig;
pub use program::Program;
pub use tea_model::Model;
