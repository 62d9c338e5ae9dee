//! Terminal User Interface module.
//!
//! This module provides the TUI for the headlines browser:
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling for list, filter, and detail modes
//! - `events` - Background fetch completion processing
//! - `render` - View rendering dispatch
//! - `helpers` - Fetch dispatch shared by input handling and startup
//! - `articles` - Headline list widget
//! - `detail` - Single-article view
//! - `status` - Status bar widget

mod articles;
mod detail;
mod events;
mod helpers;
mod input;
mod loop_runner;
mod render;
mod status;

pub use loop_runner::{run, Action};
