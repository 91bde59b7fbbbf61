use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a collaboration request between an entrepreneur and an investor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ConnectionStatus {
    /// Short label for dashboard display
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Accepted => "accepted",
            ConnectionStatus::Rejected => "rejected",
        }
    }
}

/// An inbound collaboration request shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationRequest {
    pub id: String,
    pub counterpart: String,
    pub message: String,
    pub status: ConnectionStatus,
}

impl CollaborationRequest {
    /// Create a pending request from another platform member
    pub fn incoming(counterpart: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            counterpart: counterpart.into(),
            message: message.into(),
            status: ConnectionStatus::Pending,
        }
    }
}
