mod actor;
mod handle;
pub mod time;

pub use actor::CallEvent;
pub use handle::CallServiceHandle;

use crate::config::Config;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};

/// Video call component exposing the simulated call transport
#[derive(Default)]
pub struct CallService {
    handle: RwLock<Option<CallServiceHandle>>,
    events: RwLock<Option<mpsc::Receiver<CallEvent>>>,
}

impl CallService {
    /// Create a new call service component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
            events: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<CallServiceHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }

    /// Take the event stream. The stream has a single consumer, so this
    /// returns `Some` only on the first call after init.
    pub async fn take_events(&self) -> Option<mpsc::Receiver<CallEvent>> {
        self.events.write().await.take()
    }
}

#[async_trait]
impl super::Component for CallService {
    fn name(&self) -> &'static str {
        "calls"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> AppResult<()> {
        let connect_delay = {
            let config_read = config.read().await;
            Duration::from_secs(config_read.call_connect_delay_secs)
        };

        // Create a new handle if one doesn't exist
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            let (handle, event_rx) = CallServiceHandle::new(connect_delay);
            *handle_lock = Some(handle);
            *self.events.write().await = Some(event_rx);
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
