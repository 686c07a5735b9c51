//! Network messages - communication between App and Network layers

use crate::models::{Expense, NewExpense};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full expense collection
    FetchExpenses {
        id: u64,
    },
    /// Create a new expense record
    CreateExpense {
        id: u64,
        expense: NewExpense,
    },
    /// Delete the expense with the given record id
    DeleteExpense {
        id: u64,
        expense_id: i64,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Collection fetched successfully
    Loaded {
        id: u64,
        expenses: Vec<Expense>,
    },
    /// Fetch failed (transport error or non-success status)
    LoadFailed {
        id: u64,
        message: String,
    },
    /// Create request completed; body not consumed
    Created {
        id: u64,
    },
    /// Create request failed in flight
    CreateFailed {
        id: u64,
        message: String,
    },
    /// Delete request completed without a transport error
    Deleted {
        id: u64,
        expense_id: i64,
    },
    /// Delete request failed in flight
    DeleteFailed {
        id: u64,
        expense_id: i64,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    #[allow(dead_code)] // Reserved for response/request correlation
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Loaded { id, .. } => *id,
            NetworkResponse::LoadFailed { id, .. } => *id,
            NetworkResponse::Created { id } => *id,
            NetworkResponse::CreateFailed { id, .. } => *id,
            NetworkResponse::Deleted { id, .. } => *id,
            NetworkResponse::DeleteFailed { id, .. } => *id,
        }
    }

    /// Whether the underlying request settled without error
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            NetworkResponse::Loaded { .. }
                | NetworkResponse::Created { .. }
                | NetworkResponse::Deleted { .. }
        )
    }
}
