//! Network actor - runs expense API calls in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::ApiClient;

/// Network actor that processes expense API commands
pub struct NetworkActor {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    ///
    /// Requests are spawned, not awaited in place: overlapping calls all
    /// run to completion and report back in whatever order they settle.
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchExpenses { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "fetching expense collection");
                                let result = client.fetch_expenses(id).await;
                                tracing::info!(id, success = result.is_success(), "fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::CreateExpense { id, expense }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, title = %expense.title, "creating expense");
                                let result = client.create_expense(id, &expense).await;
                                tracing::info!(id, success = result.is_success(), "create completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::DeleteExpense { id, expense_id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, expense_id, "deleting expense");
                                let result = client.delete_expense(id, expense_id).await;
                                tracing::info!(id, success = result.is_success(), "delete completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => break,

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - nothing further to do
                }
            }
        }
    }
}
