use serde::{Deserialize, Serialize};

/// An expense record as stored by the server
///
/// `id` and `date` are assigned server-side; the client never invents
/// either one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    #[serde(default)]
    pub date: String,
}

/// Payload for creating a new expense
///
/// The server fills in `id` and `date`; the response body is not consumed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
}

/// Transient form state for a not-yet-submitted expense
///
/// Both fields are raw text straight from the keyboard. `amount` is only
/// parsed at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftForm {
    pub title: String,
    pub amount: String,
}

impl DraftForm {
    /// A draft can be submitted once both fields are non-empty
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && !self.amount.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.amount.clear();
    }
}

/// Sum of all amounts in the list - recomputed on every render
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Format a server-assigned date for display: day, abbreviated month,
/// 2-digit year (e.g. "7 Aug 26").
///
/// An empty input formats to an empty string. Anything chrono cannot parse
/// is shown verbatim.
pub fn format_date(date: &str) -> String {
    use chrono::{DateTime, NaiveDate};

    if date.is_empty() {
        return String::new();
    }

    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return d.format("%-d %b %y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return dt.format("%-d %b %y").to_string();
    }

    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, amount: f64) -> Expense {
        Expense {
            id,
            title: format!("item-{}", id),
            amount,
            date: String::from("2026-08-07"),
        }
    }

    #[test]
    fn test_total_sums_amounts() {
        let list = vec![expense(1, 10.0), expense(2, 25.5), expense(3, 4.5)];
        assert_eq!(total(&list), 40.0);
    }

    #[test]
    fn test_total_independent_of_order() {
        let mut list = vec![expense(1, 120.0), expense(2, 80.0), expense(3, 0.25)];
        let forward = total(&list);
        list.reverse();
        assert_eq!(total(&list), forward);
    }

    #[test]
    fn test_total_of_empty_list_is_zero() {
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn test_format_date_empty_string() {
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_date_plain_date() {
        assert_eq!(format_date("2026-08-07"), "7 Aug 26");
    }

    #[test]
    fn test_draft_submittable_requires_both_fields() {
        let mut draft = DraftForm::default();
        assert!(!draft.is_submittable());
        draft.title = String::from("Coffee");
        assert!(!draft.is_submittable());
        draft.amount = String::from("50");
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_draft_clear() {
        let mut draft = DraftForm {
            title: String::from("Coffee"),
            amount: String::from("50"),
        };
        draft.clear();
        assert_eq!(draft, DraftForm::default());
    }
}
