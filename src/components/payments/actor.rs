use super::models::{
    PaymentRequest, Recipient, Transaction, TransactionKind, TransactionStatus,
};
use crate::error::{payment_error, AppResult};
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

/// Label used for the signed-in user's side of a transaction
const WALLET_LABEL: &str = "Your Wallet";

/// The payment service actor that processes wallet commands
pub struct PaymentActor {
    balance: f64,
    transactions: Vec<Transaction>,
    recipients: Vec<Recipient>,
    command_rx: mpsc::Receiver<PaymentCommand>,
}

/// Commands that can be sent to the payment actor
pub enum PaymentCommand {
    SendPayment(PaymentRequest, mpsc::Sender<AppResult<Transaction>>),
    Deposit(f64, mpsc::Sender<AppResult<Transaction>>),
    GetBalance(mpsc::Sender<AppResult<f64>>),
    GetHistory(mpsc::Sender<AppResult<Vec<Transaction>>>),
    Shutdown,
}

/// Handle for communicating with the payment actor
#[derive(Clone)]
pub struct PaymentActorHandle {
    command_tx: mpsc::Sender<PaymentCommand>,
}

impl PaymentActorHandle {
    /// Send a payment from the wallet to a recipient
    pub async fn send_payment(&self, payment: PaymentRequest) -> AppResult<Transaction> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(PaymentCommand::SendPayment(payment, response_tx))
            .await
            .map_err(|e| payment_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| payment_error("Response channel closed"))?
    }

    /// Credit the wallet with an external deposit
    pub async fn deposit(&self, amount: f64) -> AppResult<Transaction> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(PaymentCommand::Deposit(amount, response_tx))
            .await
            .map_err(|e| payment_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| payment_error("Response channel closed"))?
    }

    /// Current wallet balance
    pub async fn get_balance(&self) -> AppResult<f64> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(PaymentCommand::GetBalance(response_tx))
            .await
            .map_err(|e| payment_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| payment_error("Response channel closed"))?
    }

    /// Transaction history, newest first
    pub async fn get_history(&self) -> AppResult<Vec<Transaction>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(PaymentCommand::GetHistory(response_tx))
            .await
            .map_err(|e| payment_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| payment_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(PaymentCommand::Shutdown).await;
        Ok(())
    }
}

impl PaymentActor {
    /// Create a new actor and return its handle
    pub fn new(
        starting_balance: f64,
        seed_transactions: Vec<Transaction>,
        recipients: Vec<Recipient>,
    ) -> (Self, PaymentActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            balance: starting_balance,
            transactions: seed_transactions,
            recipients,
            command_rx,
        };

        let handle = PaymentActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Payment service actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                PaymentCommand::SendPayment(payment, response_tx) => {
                    let result = self.send_payment(payment);
                    let _ = response_tx.send(result).await;
                }
                PaymentCommand::Deposit(amount, response_tx) => {
                    let result = self.deposit(amount);
                    let _ = response_tx.send(result).await;
                }
                PaymentCommand::GetBalance(response_tx) => {
                    let _ = response_tx.send(Ok(self.balance)).await;
                }
                PaymentCommand::GetHistory(response_tx) => {
                    let _ = response_tx.send(Ok(self.transactions.clone())).await;
                }
                PaymentCommand::Shutdown => {
                    info!("Payment service actor shutting down");
                    break;
                }
            }
        }

        info!("Payment service actor shut down");
    }

    /// Record an outgoing transfer and debit the balance
    fn send_payment(&mut self, payment: PaymentRequest) -> AppResult<Transaction> {
        let receiver = self
            .recipients
            .iter()
            .find(|r| r.id == payment.recipient_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            amount: -payment.amount,
            sender: WALLET_LABEL.to_string(),
            receiver,
            status: TransactionStatus::Completed,
            date: Utc::now(),
            kind: TransactionKind::Transfer,
            description: Some(payment.description),
        };

        self.transactions.insert(0, transaction.clone());
        self.balance -= payment.amount;

        info!(
            "Recorded transfer of {:.2} to {} via {}",
            payment.amount, transaction.receiver, payment.method
        );

        Ok(transaction)
    }

    /// Record an external deposit and credit the balance
    fn deposit(&mut self, amount: f64) -> AppResult<Transaction> {
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            amount,
            sender: "External".to_string(),
            receiver: WALLET_LABEL.to_string(),
            status: TransactionStatus::Completed,
            date: Utc::now(),
            kind: TransactionKind::Deposit,
            description: Some("Deposit".to_string()),
        };

        self.transactions.insert(0, transaction.clone());
        self.balance += amount;

        Ok(transaction)
    }
}
