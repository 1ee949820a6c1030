//! PIN Code TUI Library
//!
//! This library provides the terminal front end for the PIN code entry
//! form: event routing, focus handling, configuration and rendering.

pub mod app;
pub mod cli;
pub mod ui;

pub use app::App;
