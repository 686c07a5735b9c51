//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Panel};
use crate::models::Expense;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Expenses in display order (most recently created first)
    pub expenses: Vec<Expense>,
    /// Sum of all amounts, recomputed from `expenses` on every snapshot
    pub total: f64,

    // Draft form
    pub draft_title: String,
    pub draft_amount: String,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub selected_expense: usize,

    /// True only until the first load settles
    pub is_loading: bool,

    // Modals
    pub confirm_delete: Option<i64>,
    pub alert: Option<String>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            expenses: Vec::new(),
            total: 0.0,
            draft_title: String::new(),
            draft_amount: String::new(),
            active_panel: Panel::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            selected_expense: 0,
            is_loading: true,
            confirm_delete: None,
            alert: None,
            show_help: false,
        }
    }
}
