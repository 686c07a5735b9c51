//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the expense API server
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Collection path on the API server
pub const EXPENSES_PATH: &str = "/api/expenses";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Outlay TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
