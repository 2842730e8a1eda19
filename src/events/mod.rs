//! Event handling module for keyboard, mouse, and resize events.
//!
//! Handlers translate crossterm events into [`Action`]s; the App applies
//! them. Handlers only read App state.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::{Action, PointerState};
pub use handler::EventHandler;
