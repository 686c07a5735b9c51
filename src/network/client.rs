//! HTTP client wrapper - talks to the remote expense collection

use crate::constants::EXPENSES_PATH;
use crate::messages::NetworkResponse;
use crate::models::{Expense, NewExpense};

/// Client for the remote expense collection resource
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            http: create_client(),
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, EXPENSES_PATH)
    }

    fn record_url(&self, expense_id: i64) -> String {
        format!("{}{}/{}", self.base_url, EXPENSES_PATH, expense_id)
    }

    /// GET the full collection
    pub async fn fetch_expenses(&self, request_id: u64) -> NetworkResponse {
        let result = self.http.get(self.collection_url()).send().await;

        match result {
            Ok(resp) if resp.status().is_success() => match resp.json::<Vec<Expense>>().await {
                Ok(expenses) => NetworkResponse::Loaded {
                    id: request_id,
                    expenses,
                },
                Err(e) => NetworkResponse::LoadFailed {
                    id: request_id,
                    message: format!("failed to fetch expenses: {}", e),
                },
            },
            Ok(resp) => NetworkResponse::LoadFailed {
                id: request_id,
                message: format!("failed to fetch expenses: HTTP {}", resp.status()),
            },
            Err(e) => NetworkResponse::LoadFailed {
                id: request_id,
                message: format!("failed to fetch expenses: {}", e),
            },
        }
    }

    /// POST a new record; the response body is not consumed
    pub async fn create_expense(&self, request_id: u64, expense: &NewExpense) -> NetworkResponse {
        match self
            .http
            .post(self.collection_url())
            .json(expense)
            .send()
            .await
        {
            Ok(_) => NetworkResponse::Created { id: request_id },
            Err(e) => NetworkResponse::CreateFailed {
                id: request_id,
                message: e.to_string(),
            },
        }
    }

    /// DELETE a record; neither response body nor status is inspected
    pub async fn delete_expense(&self, request_id: u64, expense_id: i64) -> NetworkResponse {
        match self.http.delete(self.record_url(expense_id)).send().await {
            Ok(_) => NetworkResponse::Deleted {
                id: request_id,
                expense_id,
            },
            Err(e) => NetworkResponse::DeleteFailed {
                id: request_id,
                expense_id,
                message: e.to_string(),
            },
        }
    }
}

/// Create an HTTP client with default configuration
///
/// No request timeout is set; an in-flight request runs until the server
/// settles it.
fn create_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.collection_url(), "http://localhost:8080/api/expenses");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.record_url(7), "http://localhost:8080/api/expenses/7");
    }
}
