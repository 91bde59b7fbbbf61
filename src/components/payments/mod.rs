mod actor;
mod handle;
pub mod models;

pub use handle::PaymentServiceHandle;
pub use models::{
    validate_payment_form, PaymentRequest, Recipient, Transaction, TransactionKind,
    TransactionStatus,
};

use crate::config::Config;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Payment service component backing the wallet page
#[derive(Default)]
pub struct PaymentService {
    handle: RwLock<Option<PaymentServiceHandle>>,
}

impl PaymentService {
    /// Create a new payment service component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<PaymentServiceHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

/// Demo recipient directory shown in the send-money form
fn demo_recipients() -> Vec<Recipient> {
    ["John Doe", "Jane Smith", "Robert Johnson", "Alice Brown"]
        .iter()
        .enumerate()
        .map(|(index, name)| Recipient {
            id: (index + 1).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

#[async_trait]
impl super::Component for PaymentService {
    fn name(&self) -> &'static str {
        "payments"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> AppResult<()> {
        let starting_balance = {
            let config_read = config.read().await;
            config_read.starting_balance
        };

        // Create a new handle if one doesn't exist
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            *handle_lock = Some(PaymentServiceHandle::new(
                starting_balance,
                Vec::new(),
                demo_recipients(),
            ));
        }

        Ok(())
    }

    async fn shutdown(&self) -> AppResult<()> {
        // Shutdown the handle if it exists
        let handle_lock = self.handle.read().await;
        if let Some(handle) = &*handle_lock {
            handle.shutdown().await?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
