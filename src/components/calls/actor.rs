use crate::error::{call_error, AppResult};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::info;

/// Lifecycle events emitted by the call service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    Connected { participant: String },
    Ended { participant: String, duration_secs: u64 },
}

/// Internal connection state of the simulated call
enum CallStatus {
    Idle,
    Connecting {
        participant: String,
    },
    Connected {
        participant: String,
        connected_at: Instant,
    },
}

/// The call service actor that simulates a video call session
pub struct CallActor {
    status: CallStatus,
    connect_delay: Duration,
    command_tx: mpsc::Sender<CallCommand>,
    command_rx: mpsc::Receiver<CallCommand>,
    event_tx: mpsc::Sender<CallEvent>,
}

/// Commands that can be sent to the call actor
pub enum CallCommand {
    StartCall(String, mpsc::Sender<AppResult<()>>),
    /// Internal: the simulated connection delay has elapsed
    MarkConnected,
    EndCall(mpsc::Sender<AppResult<Option<CallEvent>>>),
    Shutdown,
}

/// Handle for communicating with the call actor
#[derive(Clone)]
pub struct CallActorHandle {
    command_tx: mpsc::Sender<CallCommand>,
}

impl CallActorHandle {
    /// Start a call with the given participant
    pub async fn start_call(&self, participant: impl Into<String>) -> AppResult<()> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CallCommand::StartCall(participant.into(), response_tx))
            .await
            .map_err(|e| call_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| call_error("Response channel closed"))?
    }

    /// End the current call, returning the emitted event if one was active
    pub async fn end_call(&self) -> AppResult<Option<CallEvent>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CallCommand::EndCall(response_tx))
            .await
            .map_err(|e| call_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| call_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(CallCommand::Shutdown).await;
        Ok(())
    }
}

impl CallActor {
    /// Create a new actor and return its handle and event stream
    pub fn new(connect_delay: Duration) -> (Self, CallActorHandle, mpsc::Receiver<CallEvent>) {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (event_tx, event_rx) = mpsc::channel(16);

        let actor = Self {
            status: CallStatus::Idle,
            connect_delay,
            command_tx: command_tx.clone(),
            command_rx,
            event_tx,
        };

        let handle = CallActorHandle { command_tx };

        (actor, handle, event_rx)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Call service actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CallCommand::StartCall(participant, response_tx) => {
                    let result = self.start_call(participant);
                    let _ = response_tx.send(result).await;
                }
                CallCommand::MarkConnected => {
                    self.mark_connected().await;
                }
                CallCommand::EndCall(response_tx) => {
                    let result = self.end_call().await;
                    let _ = response_tx.send(Ok(result)).await;
                }
                CallCommand::Shutdown => {
                    info!("Call service actor shutting down");
                    break;
                }
            }
        }

        info!("Call service actor shut down");
    }

    /// Begin connecting and schedule the simulated connection delay
    fn start_call(&mut self, participant: String) -> AppResult<()> {
        if !matches!(self.status, CallStatus::Idle) {
            return Err(call_error("A call is already in progress"));
        }

        info!("Starting call with {}", participant);
        self.status = CallStatus::Connecting { participant };

        // Report connected once the simulated delay has elapsed
        let delay = self.connect_delay;
        let command_tx = self.command_tx.clone();
        tokio::spawn(async move {
            sleep(delay).await;
            let _ = command_tx.send(CallCommand::MarkConnected).await;
        });

        Ok(())
    }

    /// Transition from connecting to connected and emit the event
    async fn mark_connected(&mut self) {
        if let CallStatus::Connecting { participant } =
            std::mem::replace(&mut self.status, CallStatus::Idle)
        {
            info!("Call with {} connected", participant);
            self.status = CallStatus::Connected {
                participant: participant.clone(),
                connected_at: Instant::now(),
            };
            let _ = self.event_tx.send(CallEvent::Connected { participant }).await;
        }
    }

    /// End whatever call is active and emit the closing event
    async fn end_call(&mut self) -> Option<CallEvent> {
        match std::mem::replace(&mut self.status, CallStatus::Idle) {
            CallStatus::Connected {
                participant,
                connected_at,
            } => {
                let event = CallEvent::Ended {
                    participant,
                    duration_secs: connected_at.elapsed().as_secs(),
                };
                let _ = self.event_tx.send(event.clone()).await;
                Some(event)
            }
            CallStatus::Connecting { participant } => {
                // Ended before the connection came up
                let event = CallEvent::Ended {
                    participant,
                    duration_secs: 0,
                };
                let _ = self.event_tx.send(event.clone()).await;
                Some(event)
            }
            CallStatus::Idle => None,
        }
    }
}
