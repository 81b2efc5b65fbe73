//! Event handling.
//!
//! `network` events are processed on the networking thread against the task
//! API. `terminal` events are key presses and ticks polled from crossterm.

pub mod network;
pub mod terminal;
