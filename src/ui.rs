use ratatui::{prelude::*, widgets::*};

/// Renders a text input field
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let border_style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Format an amount with thousands separators and two decimals ("1,234.50")
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount);
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}.{}", grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_small() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(50.0), "50.00");
        assert_eq!(format_amount(999.9), "999.90");
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1000000.0), "1,000,000.00");
    }
}
