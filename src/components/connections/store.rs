use super::models::{CollaborationRequest, ConnectionStatus};
use tracing::debug;

/// In-memory inbox of collaboration requests for the dashboard.
///
/// Same forward-only lifecycle as meeting requests: a settled request never
/// returns to pending.
#[derive(Debug, Clone, Default)]
pub struct CollaborationStore {
    requests: Vec<CollaborationRequest>,
}

impl CollaborationStore {
    /// Create a store from the requests delivered with the session
    pub fn new(initial: Vec<CollaborationRequest>) -> Self {
        Self { requests: initial }
    }

    /// Accept a pending request; settled requests are left untouched
    pub fn accept(&mut self, id: &str) {
        self.transition(id, ConnectionStatus::Accepted);
    }

    /// Reject a pending request; settled requests are left untouched
    pub fn reject(&mut self, id: &str) {
        self.transition(id, ConnectionStatus::Rejected);
    }

    fn transition(&mut self, id: &str, status: ConnectionStatus) {
        match self.requests.iter_mut().find(|r| r.id == id) {
            Some(request) if request.status == ConnectionStatus::Pending => {
                request.status = status;
            }
            Some(_) | None => {
                debug!("Ignoring {} for collaboration request {}", status.label(), id);
            }
        }
    }

    /// All requests in arrival order
    pub fn list(&self) -> &[CollaborationRequest] {
        &self.requests
    }

    /// Requests still awaiting a decision
    pub fn pending(&self) -> Vec<&CollaborationRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == ConnectionStatus::Pending)
            .collect()
    }

    /// Number of accepted connections, shown on the dashboard header
    pub fn accepted_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| r.status == ConnectionStatus::Accepted)
            .count()
    }
}
