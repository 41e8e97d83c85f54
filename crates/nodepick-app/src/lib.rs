//! NodePick Application
//!
//! The native application shell: window creation, input translation and
//! GPU presentation around the core interaction controller.

mod app;
mod config;
mod event_handler;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use event_handler::EventHandler;
