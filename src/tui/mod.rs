//! Terminal User Interface (TUI) module for the trends dashboard
//!
//! Key components:
//! - Application state management (`loading`/`data`/`error` plus the
//!   refresh sequence token)
//! - Keyboard event handling over a channel
//! - Pure projection from state to widgets, including the per-product
//!   history chart

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use events::EventHandler;
