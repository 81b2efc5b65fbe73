//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the task list, filters and form draft
//! - Filtering of the task list (Selection, filter_tasks, etc.)
//! - Navigation and form types (Focus, FormMode, FormField, etc.)
//! - State error handling

mod error;
mod filter;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use filter::{distinct_values, filter_tasks, Selection, TaskField};
pub use form::{cycle_priority, FormField, FormMode};
pub use navigation::{FilterFocus, Focus};
pub use state_impl::State;
