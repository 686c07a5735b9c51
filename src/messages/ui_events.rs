//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Expense actions
    SubmitDraft,
    Reload,
    NextExpense,
    PrevExpense,

    // Deletion flow
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    CloseAlert,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Title,
    Amount,
    Expenses,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Title => Panel::Amount,
            Panel::Amount => Panel::Expenses,
            Panel::Expenses => Panel::Title,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Title => Panel::Expenses,
            Panel::Amount => Panel::Title,
            Panel::Expenses => Panel::Amount,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
    confirm_open: bool,
    alert_open: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Modal dialogs take all input while open
    if alert_open {
        return Some(UiEvent::CloseAlert);
    }

    if confirm_open {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(UiEvent::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => Some(UiEvent::CancelDelete),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('e') | KeyCode::Enter => match active_panel {
                Panel::Title | Panel::Amount => Some(UiEvent::StartEditing),
                Panel::Expenses => None,
            },
            KeyCode::Char('s') => Some(UiEvent::SubmitDraft),
            KeyCode::Char('r') => Some(UiEvent::Reload),
            KeyCode::Char('d') if active_panel == Panel::Expenses => {
                Some(UiEvent::RequestDelete)
            }
            KeyCode::Up if active_panel == Panel::Expenses => Some(UiEvent::PrevExpense),
            KeyCode::Down if active_panel == Panel::Expenses => Some(UiEvent::NextExpense),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::SubmitDraft),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_from_normal_mode() {
        let event = key_to_ui_event(
            press(KeyCode::Char('q')),
            Panel::Title,
            InputMode::Normal,
            false,
            false,
            false,
        );
        assert_eq!(event, Some(UiEvent::Quit));
    }

    #[test]
    fn test_q_is_text_while_editing() {
        let event = key_to_ui_event(
            press(KeyCode::Char('q')),
            Panel::Title,
            InputMode::Editing,
            false,
            false,
            false,
        );
        assert_eq!(event, Some(UiEvent::CharInput('q')));
    }

    #[test]
    fn test_confirm_dialog_captures_keys() {
        let yes = key_to_ui_event(
            press(KeyCode::Char('y')),
            Panel::Expenses,
            InputMode::Normal,
            false,
            true,
            false,
        );
        assert_eq!(yes, Some(UiEvent::ConfirmDelete));

        let no = key_to_ui_event(
            press(KeyCode::Esc),
            Panel::Expenses,
            InputMode::Normal,
            false,
            true,
            false,
        );
        assert_eq!(no, Some(UiEvent::CancelDelete));

        let other = key_to_ui_event(
            press(KeyCode::Char('q')),
            Panel::Expenses,
            InputMode::Normal,
            false,
            true,
            false,
        );
        assert_eq!(other, None);
    }

    #[test]
    fn test_alert_dismissed_by_any_key() {
        let event = key_to_ui_event(
            press(KeyCode::Char('x')),
            Panel::Expenses,
            InputMode::Normal,
            false,
            false,
            true,
        );
        assert_eq!(event, Some(UiEvent::CloseAlert));
    }

    #[test]
    fn test_delete_only_from_expense_list() {
        let on_list = key_to_ui_event(
            press(KeyCode::Char('d')),
            Panel::Expenses,
            InputMode::Normal,
            false,
            false,
            false,
        );
        assert_eq!(on_list, Some(UiEvent::RequestDelete));

        let on_form = key_to_ui_event(
            press(KeyCode::Char('d')),
            Panel::Title,
            InputMode::Normal,
            false,
            false,
            false,
        );
        assert_eq!(on_form, None);
    }

    #[test]
    fn test_enter_submits_while_editing() {
        let event = key_to_ui_event(
            press(KeyCode::Enter),
            Panel::Amount,
            InputMode::Editing,
            false,
            false,
            false,
        );
        assert_eq!(event, Some(UiEvent::SubmitDraft));
    }
}
