//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::NewExpense;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
        self.sync_editing_to_panel();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
        self.sync_editing_to_panel();
    }

    /// The expense list has no text input; leaving the form drops edit mode
    fn sync_editing_to_panel(&mut self) {
        if self.input_mode == InputMode::Editing {
            if self.active_panel == Panel::Expenses {
                self.input_mode = InputMode::Normal;
            } else {
                self.cursor_position = self.current_input().len();
            }
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Expense list
    // ========================

    pub fn next_expense(&mut self) {
        if !self.expenses.is_empty() {
            self.selected_expense = (self.selected_expense + 1) % self.expenses.len();
        }
    }

    pub fn prev_expense(&mut self) {
        if !self.expenses.is_empty() {
            self.selected_expense = self
                .selected_expense
                .checked_sub(1)
                .unwrap_or(self.expenses.len() - 1);
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_expense = self
            .selected_expense
            .min(self.expenses.len().saturating_sub(1));
    }

    // ========================
    // Loading
    // ========================

    /// Build a fetch command for the full collection.
    ///
    /// Safe to issue any number of times; each completed fetch replaces the
    /// local list wholesale.
    pub fn reload(&mut self) -> NetworkCommand {
        NetworkCommand::FetchExpenses { id: self.next_id() }
    }

    // ========================
    // Draft submission
    // ========================

    /// Build a create command from the draft form.
    ///
    /// A draft with an empty title or amount is never sent. The draft is
    /// cleared only once the create completes (see `handle_response`).
    pub fn submit_draft(&mut self) -> Option<NetworkCommand> {
        if !self.draft.is_submittable() {
            return None;
        }

        // Parse failures degrade to NaN rather than blocking the submit
        let amount = self.draft.amount.trim().parse::<f64>().unwrap_or(f64::NAN);

        Some(NetworkCommand::CreateExpense {
            id: self.next_id(),
            expense: NewExpense {
                title: self.draft.title.clone(),
                amount,
            },
        })
    }

    // ========================
    // Deletion flow
    // ========================

    /// Open the confirmation dialog for the selected expense
    pub fn request_delete(&mut self) {
        if let Some(expense) = self.expenses.get(self.selected_expense) {
            self.confirm_delete = Some(expense.id);
        }
    }

    /// User confirmed: build the delete command for the pending id
    pub fn confirm_pending_delete(&mut self) -> Option<NetworkCommand> {
        let expense_id = self.confirm_delete.take()?;
        Some(NetworkCommand::DeleteExpense {
            id: self.next_id(),
            expense_id,
        })
    }

    pub fn cancel_pending_delete(&mut self) {
        self.confirm_delete = None;
    }

    pub fn close_alert(&mut self) {
        self.alert = None;
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a completed network operation to local state.
    ///
    /// Returns a follow-up command when one is required (a successful
    /// create triggers a full reload - the list is never spliced locally).
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::Loaded { expenses, .. } => {
                // Server order is oldest-first; display newest-first
                let mut list = expenses;
                list.reverse();
                self.expenses = list;
                self.clamp_selection();
                self.is_loading = false;
                None
            }
            NetworkResponse::LoadFailed { message, .. } => {
                tracing::error!(%message, "failed to load expenses");
                self.is_loading = false;
                None
            }
            NetworkResponse::Created { .. } => {
                self.draft.clear();
                self.cursor_position = 0;
                Some(self.reload())
            }
            NetworkResponse::CreateFailed { message, .. } => {
                tracing::error!(%message, "failed to create expense");
                None
            }
            NetworkResponse::Deleted { expense_id, .. } => {
                // Status was not inspected; the request settling is enough
                self.expenses.retain(|e| e.id != expense_id);
                self.clamp_selection();
                None
            }
            NetworkResponse::DeleteFailed {
                expense_id,
                message,
                ..
            } => {
                tracing::error!(expense_id, %message, "failed to delete expense");
                self.alert = Some(String::from("Delete failed. Please try again."));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn expense(id: i64, amount: f64) -> Expense {
        Expense {
            id,
            title: format!("item-{}", id),
            amount,
            date: String::from("2026-08-07"),
        }
    }

    fn loaded(expenses: Vec<Expense>) -> NetworkResponse {
        NetworkResponse::Loaded { id: 99, expenses }
    }

    #[test]
    fn test_load_reverses_server_order() {
        let mut state = AppState::new();
        state.handle_response(loaded(vec![expense(1, 10.0), expense(2, 20.0)]));

        let ids: Vec<i64> = state.expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_load_empty_collection_clears_loading() {
        let mut state = AppState::new();
        assert!(state.is_loading);

        state.handle_response(loaded(Vec::new()));

        assert!(state.expenses.is_empty());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_load_failure_keeps_list_and_clears_loading() {
        let mut state = AppState::new();
        state.handle_response(loaded(vec![expense(1, 10.0)]));

        state.handle_response(NetworkResponse::LoadFailed {
            id: 100,
            message: String::from("failed to fetch expenses"),
        });

        assert_eq!(state.expenses.len(), 1);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_submit_with_empty_title_is_noop() {
        let mut state = AppState::new();
        state.draft.amount = String::from("50");

        assert!(state.submit_draft().is_none());
    }

    #[test]
    fn test_submit_with_empty_amount_is_noop() {
        let mut state = AppState::new();
        state.draft.title = String::from("Coffee");

        assert!(state.submit_draft().is_none());
    }

    #[test]
    fn test_submit_sends_parsed_amount() {
        let mut state = AppState::new();
        state.draft.title = String::from("Coffee");
        state.draft.amount = String::from("50");

        match state.submit_draft() {
            Some(NetworkCommand::CreateExpense { expense, .. }) => {
                assert_eq!(expense.title, "Coffee");
                assert_eq!(expense.amount, 50.0);
            }
            other => panic!("expected CreateExpense, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_keeps_draft_until_create_completes() {
        let mut state = AppState::new();
        state.draft.title = String::from("Coffee");
        state.draft.amount = String::from("50");

        let cmd = state.submit_draft().expect("draft is submittable");
        assert_eq!(state.draft.title, "Coffee");

        let create_id = match cmd {
            NetworkCommand::CreateExpense { id, .. } => id,
            other => panic!("expected CreateExpense, got {:?}", other),
        };

        // Create settles: draft resets and exactly one reload follows
        let followup = state.handle_response(NetworkResponse::Created { id: create_id });
        assert!(state.draft.title.is_empty());
        assert!(state.draft.amount.is_empty());
        assert!(matches!(
            followup,
            Some(NetworkCommand::FetchExpenses { .. })
        ));
    }

    #[test]
    fn test_create_failure_leaves_draft_populated() {
        let mut state = AppState::new();
        state.draft.title = String::from("Coffee");
        state.draft.amount = String::from("50");
        let _ = state.submit_draft();

        let followup = state.handle_response(NetworkResponse::CreateFailed {
            id: 1,
            message: String::from("connection refused"),
        });

        assert!(followup.is_none());
        assert_eq!(state.draft.title, "Coffee");
        assert_eq!(state.draft.amount, "50");
    }

    #[test]
    fn test_unparseable_amount_degrades_to_nan() {
        let mut state = AppState::new();
        state.draft.title = String::from("Coffee");
        state.draft.amount = String::from("fifty");

        match state.submit_draft() {
            Some(NetworkCommand::CreateExpense { expense, .. }) => {
                assert!(expense.amount.is_nan());
            }
            other => panic!("expected CreateExpense, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = AppState::new();
        state.handle_response(loaded(vec![expense(7, 10.0), expense(8, 20.0)]));

        state.request_delete();
        assert!(state.confirm_delete.is_some());

        // Declining produces no command and leaves the list unchanged
        state.cancel_pending_delete();
        assert!(state.confirm_pending_delete().is_none());
        assert_eq!(state.expenses.len(), 2);
    }

    #[test]
    fn test_confirmed_delete_removes_exact_id() {
        let mut state = AppState::new();
        state.handle_response(loaded(vec![expense(6, 5.0), expense(7, 10.0)]));

        // Newest-first display: id 7 is at index 0
        state.selected_expense = 0;
        state.request_delete();
        assert_eq!(state.confirm_delete, Some(7));

        let cmd = state.confirm_pending_delete().expect("delete confirmed");
        let expense_id = match cmd {
            NetworkCommand::DeleteExpense { expense_id, .. } => expense_id,
            other => panic!("expected DeleteExpense, got {:?}", other),
        };
        assert_eq!(expense_id, 7);

        // The request settled (body-less response); removal is immediate
        state.handle_response(NetworkResponse::Deleted { id: 2, expense_id });
        let ids: Vec<i64> = state.expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![6]);
    }

    #[test]
    fn test_delete_failure_keeps_record_and_raises_alert() {
        let mut state = AppState::new();
        state.handle_response(loaded(vec![expense(7, 10.0)]));
        state.request_delete();
        let _ = state.confirm_pending_delete();

        state.handle_response(NetworkResponse::DeleteFailed {
            id: 2,
            expense_id: 7,
            message: String::from("connection reset"),
        });

        assert_eq!(state.expenses.len(), 1);
        assert!(state.alert.is_some());
    }

    #[test]
    fn test_total_tracks_current_list() {
        let mut state = AppState::new();
        state.handle_response(loaded(vec![expense(1, 10.0), expense(2, 25.5)]));
        assert_eq!(state.to_render_state().total, 35.5);

        state.handle_response(NetworkResponse::Deleted {
            id: 3,
            expense_id: 2,
        });
        assert_eq!(state.to_render_state().total, 10.0);
    }

    #[test]
    fn test_selection_clamped_after_removal() {
        let mut state = AppState::new();
        state.handle_response(loaded(vec![expense(1, 1.0), expense(2, 2.0)]));
        state.selected_expense = 1;

        state.handle_response(NetworkResponse::Deleted {
            id: 4,
            expense_id: 1,
        });

        assert_eq!(state.selected_expense, 0);
    }

    #[test]
    fn test_draft_editing_moves_cursor() {
        let mut state = AppState::new();
        state.start_editing();
        for c in "Tea".chars() {
            state.enter_char(c);
        }
        assert_eq!(state.draft.title, "Tea");
        assert_eq!(state.cursor_position, 3);

        state.move_cursor_left();
        state.delete_char();
        assert_eq!(state.draft.title, "Ta");
    }
}
