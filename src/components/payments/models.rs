use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settlement state of a wallet transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    Processing,
}

/// Kind of wallet movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
    Payment,
}

/// A single ledger entry.
///
/// Amount is positive for money in and negative for money out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub sender: String,
    pub receiver: String,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
    pub kind: TransactionKind,
    pub description: Option<String>,
}

/// A payment submitted from the send-money form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: f64,
    pub recipient_id: String,
    pub description: String,
    pub method: String,
}

/// A known payment recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
    pub name: String,
}

/// Validate the payment form inputs, returning field-keyed messages.
///
/// Validation is presentational: failures surface inline next to the form
/// fields and never become an `Err`.
pub fn validate_payment_form(
    amount: &str,
    recipient: &str,
    description: &str,
) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    match amount.trim().parse::<f64>() {
        Ok(value) if value > 0.0 => {}
        Ok(_) => {
            errors.insert(
                "amount".to_string(),
                "Amount must be greater than 0".to_string(),
            );
        }
        Err(_) => {
            errors.insert(
                "amount".to_string(),
                "Amount must be a valid number".to_string(),
            );
        }
    }

    if recipient.trim().is_empty() {
        errors.insert("recipient".to_string(), "Recipient is required".to_string());
    }

    if description.trim().is_empty() {
        errors.insert(
            "description".to_string(),
            "Description is required".to_string(),
        );
    }

    errors
}
