//! Outlay TUI - Actor-based expense tracker
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

mod app;
mod config;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use config::Config;
use messages::ui_events::{key_to_ui_event, InputMode, Panel};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::format_date;
use network::{ApiClient, NetworkActor};
use ui::{format_amount, render_input};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "outlay.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(ApiClient::new(config.api_url), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.confirm_delete.is_some(),
                    current_state.alert.is_some(),
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Total header
            Constraint::Length(3), // Draft form
            Constraint::Min(5),    // Expense list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);
    draw_form(f, state, chunks[1]);
    draw_expenses(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.confirm_delete.is_some() {
        draw_confirm_popup(f, state, area);
    }

    if let Some(message) = &state.alert {
        draw_alert_popup(f, message, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" My Expenses ");

    let total_line = Line::from(vec![
        Span::raw("Total spent: "),
        Span::styled(
            format_amount(state.total),
            Style::default().fg(Color::Yellow).bold(),
        ),
    ]);
    let count_line = Line::from(Span::styled(
        format!("{} records", state.expenses.len()),
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(vec![total_line, count_line]).block(block);
    f.render_widget(header, area);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let editing = state.input_mode == InputMode::Editing;

    let title_focused = state.active_panel == Panel::Title;
    let title_input = render_input(
        state.draft_title.as_str(),
        " Title ",
        title_focused,
        title_focused && editing,
    );
    f.render_widget(title_input, chunks[0]);

    let amount_focused = state.active_panel == Panel::Amount;
    let amount_input = render_input(
        state.draft_amount.as_str(),
        " Amount ",
        amount_focused,
        amount_focused && editing,
    );
    f.render_widget(amount_input, chunks[1]);

    // Cursor
    if editing {
        let field = if title_focused {
            Some(chunks[0])
        } else if amount_focused {
            Some(chunks[1])
        } else {
            None
        };
        if let Some(field) = field {
            let max_x = field.x + field.width.saturating_sub(2);
            let cursor_x = (field.x + state.cursor_position as u16 + 1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, field.y + 1));
        }
    }
}

fn draw_expenses(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Expenses;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" History (↑/↓ select, d delete) ");

    if state.is_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    if state.expenses.is_empty() {
        let empty = Paragraph::new("No expenses yet. Edit the form and press 's' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .expenses
        .iter()
        .map(|expense| {
            let line = Line::from(vec![
                Span::raw(expense.title.clone()),
                Span::styled(
                    format!("  {}", format_date(&expense.date)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  - {}", format_amount(expense.amount)),
                    Style::default().bold(),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let highlight_style = if is_focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_expense));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        " Loading... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Enter:save | Tab:next field "
    } else {
        " Tab:panel | e:edit | s:save | d:delete | r:refresh | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 OUTLAY TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   ↑ / ↓              Navigate expense list

 EXPENSES
   e / Enter          Edit the focused form field
   Enter (editing)    Save the draft expense
   s                  Save the draft expense
   d                  Delete selected expense
   r                  Refresh from server

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_confirm_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let title = state
        .confirm_delete
        .and_then(|id| state.expenses.iter().find(|e| e.id == id))
        .map(|e| e.title.as_str())
        .unwrap_or("this expense");

    let text = format!(
        "\n Delete \"{}\"?\n\n y/Enter: delete    n/Esc: cancel",
        title
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm Delete ")
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let confirm = Paragraph::new(text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(confirm, popup_area);
}

fn draw_alert_popup(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let text = format!("\n {}\n\n Press any key to close...", message);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Error ")
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let alert = Paragraph::new(text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(alert, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
