//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{self, DraftForm, Expense};

/// Main application state - pure data, no I/O
pub struct AppState {
    /// Expenses in display order (most recently created first)
    pub expenses: Vec<Expense>,
    pub draft: DraftForm,

    /// True only until the first load settles; never set again afterwards
    pub is_loading: bool,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub selected_expense: usize,

    // Modals
    pub confirm_delete: Option<i64>,
    pub alert: Option<String>,
    pub show_help: bool,

    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            expenses: Vec::new(),
            draft: DraftForm::default(),
            is_loading: true,
            active_panel: Panel::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            selected_expense: 0,
            confirm_delete: None,
            alert: None,
            show_help: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Title => &self.draft.title,
            Panel::Amount => &self.draft.amount,
            Panel::Expenses => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_panel {
            Panel::Amount => &mut self.draft.amount,
            // The expense list has no input; fall back to the title field
            _ => &mut self.draft.title,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            expenses: self.expenses.clone(),
            total: models::total(&self.expenses),
            draft_title: self.draft.title.clone(),
            draft_amount: self.draft.amount.clone(),
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            selected_expense: self.selected_expense,
            is_loading: self.is_loading,
            confirm_delete: self.confirm_delete,
            alert: self.alert.clone(),
            show_help: self.show_help,
        }
    }
}
