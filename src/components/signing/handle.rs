use super::actor::{SigningActor, SigningActorHandle};
use super::models::SignedDocument;
use crate::error::AppResult;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the signing service actor
#[derive(Clone)]
pub struct SigningServiceHandle {
    actor_handle: SigningActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl SigningServiceHandle {
    /// Create a new SigningServiceHandle and spawn the actor
    pub fn new() -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = SigningActor::new();

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Apply a rendered signature image to a document
    pub async fn sign_document(
        &self,
        document_id: impl Into<String>,
        signature_png: Vec<u8>,
    ) -> AppResult<SignedDocument> {
        self.actor_handle
            .sign_document(document_id, signature_png)
            .await
    }

    /// All documents signed during this session
    pub async fn get_signed_documents(&self) -> AppResult<Vec<SignedDocument>> {
        self.actor_handle.get_signed_documents().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        self.actor_handle.shutdown().await
    }
}

impl Default for SigningServiceHandle {
    fn default() -> Self {
        Self::new()
    }
}
