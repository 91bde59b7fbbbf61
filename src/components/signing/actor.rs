use super::models::SignedDocument;
use crate::error::{signing_error, AppResult};
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

/// The signing service actor that processes signature submissions
pub struct SigningActor {
    signed: Vec<SignedDocument>,
    command_rx: mpsc::Receiver<SigningCommand>,
}

/// Commands that can be sent to the signing actor
pub enum SigningCommand {
    SignDocument {
        document_id: String,
        signature_png: Vec<u8>,
        response_tx: mpsc::Sender<AppResult<SignedDocument>>,
    },
    GetSignedDocuments(mpsc::Sender<AppResult<Vec<SignedDocument>>>),
    Shutdown,
}

/// Handle for communicating with the signing actor
#[derive(Clone)]
pub struct SigningActorHandle {
    command_tx: mpsc::Sender<SigningCommand>,
}

impl SigningActorHandle {
    /// Apply a rendered signature image to a document
    pub async fn sign_document(
        &self,
        document_id: impl Into<String>,
        signature_png: Vec<u8>,
    ) -> AppResult<SignedDocument> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(SigningCommand::SignDocument {
                document_id: document_id.into(),
                signature_png,
                response_tx,
            })
            .await
            .map_err(|e| signing_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| signing_error("Response channel closed"))?
    }

    /// All documents signed during this session
    pub async fn get_signed_documents(&self) -> AppResult<Vec<SignedDocument>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(SigningCommand::GetSignedDocuments(response_tx))
            .await
            .map_err(|e| signing_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| signing_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(SigningCommand::Shutdown).await;
        Ok(())
    }
}

impl SigningActor {
    /// Create a new actor and return its handle
    pub fn new() -> (Self, SigningActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            signed: Vec::new(),
            command_rx,
        };

        let handle = SigningActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Signing service actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                SigningCommand::SignDocument {
                    document_id,
                    signature_png,
                    response_tx,
                } => {
                    let record = SignedDocument {
                        document_id,
                        signature_id: Uuid::new_v4().to_string(),
                        signed_at: Utc::now(),
                    };

                    info!(
                        "Signed document {} ({} byte signature)",
                        record.document_id,
                        signature_png.len()
                    );

                    self.signed.push(record.clone());
                    let _ = response_tx.send(Ok(record)).await;
                }
                SigningCommand::GetSignedDocuments(response_tx) => {
                    let _ = response_tx.send(Ok(self.signed.clone())).await;
                }
                SigningCommand::Shutdown => {
                    info!("Signing service actor shutting down");
                    break;
                }
            }
        }

        info!("Signing service actor shut down");
    }
}
