//! # Outlay TUI
//!
//! A minimal terminal-based expense tracker backed by a remote REST API.
//!
//! ## Features
//! - Expense list (newest first) with a running total
//! - Add an expense (title + amount, date assigned server-side)
//! - Delete an expense with confirmation
//! - Manual refresh
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{DraftForm, Expense, NewExpense};
pub use network::{ApiClient, NetworkActor};
