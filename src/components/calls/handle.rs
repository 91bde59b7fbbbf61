use super::actor::{CallActor, CallActorHandle, CallEvent};
use crate::error::AppResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handle for interacting with the call service actor
#[derive(Clone)]
pub struct CallServiceHandle {
    actor_handle: CallActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CallServiceHandle {
    /// Create a new CallServiceHandle, spawn the actor and return the
    /// event stream for connect/disconnect notifications
    pub fn new(connect_delay: Duration) -> (Self, mpsc::Receiver<CallEvent>) {
        // Create the actor and get its handle
        let (mut actor, handle, event_rx) = CallActor::new(connect_delay);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        (
            Self {
                actor_handle: handle,
                _actor_task: Arc::new(actor_task),
            },
            event_rx,
        )
    }

    /// Start a call with the given participant
    pub async fn start_call(&self, participant: impl Into<String>) -> AppResult<()> {
        self.actor_handle.start_call(participant).await
    }

    /// End the current call, returning the emitted event if one was active
    pub async fn end_call(&self) -> AppResult<Option<CallEvent>> {
        self.actor_handle.end_call().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        self.actor_handle.shutdown().await
    }
}
