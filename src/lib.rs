//! Terminal user interface for a task list REST API.
//!
//! Tasks are fetched from a configurable base URL, filtered by category and
//! priority, and created, updated or deleted through a keyboard driven form.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
