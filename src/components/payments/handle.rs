use super::actor::{PaymentActor, PaymentActorHandle};
use super::models::{PaymentRequest, Recipient, Transaction};
use crate::error::AppResult;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the payment service actor
#[derive(Clone)]
pub struct PaymentServiceHandle {
    actor_handle: PaymentActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl PaymentServiceHandle {
    /// Create a new PaymentServiceHandle and spawn the actor
    pub fn new(
        starting_balance: f64,
        seed_transactions: Vec<Transaction>,
        recipients: Vec<Recipient>,
    ) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) =
            PaymentActor::new(starting_balance, seed_transactions, recipients);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Send a payment from the wallet to a recipient
    pub async fn send_payment(&self, payment: PaymentRequest) -> AppResult<Transaction> {
        self.actor_handle.send_payment(payment).await
    }

    /// Credit the wallet with an external deposit
    pub async fn deposit(&self, amount: f64) -> AppResult<Transaction> {
        self.actor_handle.deposit(amount).await
    }

    /// Current wallet balance
    pub async fn get_balance(&self) -> AppResult<f64> {
        self.actor_handle.get_balance().await
    }

    /// Transaction history, newest first
    pub async fn get_history(&self) -> AppResult<Vec<Transaction>> {
        self.actor_handle.get_history().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        self.actor_handle.shutdown().await
    }
}
