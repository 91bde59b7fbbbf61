pub mod models;
pub mod store;

pub use models::{CollaborationRequest, ConnectionStatus};
pub use store::CollaborationStore;

use crate::config::Config;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the collaboration inbox
#[derive(Clone)]
pub struct ConnectionsHandle {
    store: Arc<RwLock<CollaborationStore>>,
}

impl ConnectionsHandle {
    /// Wrap a store for shared use
    pub fn new(store: CollaborationStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Run a closure against the inbox, applying any mutation atomically
    pub async fn with_store<R>(&self, f: impl FnOnce(&mut CollaborationStore) -> R) -> R {
        let mut store = self.store.write().await;
        f(&mut store)
    }

    /// Snapshot of all requests in arrival order
    pub async fn list(&self) -> Vec<CollaborationRequest> {
        self.store.read().await.list().to_vec()
    }
}

/// Collaboration inbox component backing the dashboard
#[derive(Default)]
pub struct ConnectionInbox {
    handle: RwLock<Option<ConnectionsHandle>>,
}

impl ConnectionInbox {
    /// Create a new collaboration inbox component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<ConnectionsHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

/// Demo inbox: two investors reaching out to the signed-in entrepreneur
fn demo_requests() -> Vec<CollaborationRequest> {
    vec![
        CollaborationRequest::incoming(
            "Jane Smith",
            "Interested in your seed round, can we talk this week?",
        ),
        CollaborationRequest::incoming(
            "Robert Johnson",
            "Saw your pitch deck, would like to discuss terms.",
        ),
    ]
}

#[async_trait]
impl super::Component for ConnectionInbox {
    fn name(&self) -> &'static str {
        "connections"
    }

    async fn init(&self, _config: Arc<RwLock<Config>>) -> AppResult<()> {
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            *handle_lock = Some(ConnectionsHandle::new(CollaborationStore::new(
                demo_requests(),
            )));
        }

        Ok(())
    }

    async fn shutdown(&self) -> AppResult<()> {
        // In-memory only, nothing to stop
        *self.handle.write().await = None;
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
