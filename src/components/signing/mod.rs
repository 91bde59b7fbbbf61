mod actor;
mod handle;
pub mod models;

pub use handle::SigningServiceHandle;
pub use models::SignedDocument;

use crate::config::Config;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Document signing component for the document chamber
#[derive(Default)]
pub struct SigningService {
    handle: RwLock<Option<SigningServiceHandle>>,
}

impl SigningService {
    /// Create a new signing service component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<SigningServiceHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

#[async_trait]
impl super::Component for SigningService {
    fn name(&self) -> &'static str {
        "signing"
    }

    async fn init(&self, _config: Arc<RwLock<Config>>) -> AppResult<()> {
        // Create a new handle if one doesn't exist
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            *handle_lock = Some(SigningServiceHandle::new());
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
