use super::models::{MeetingRequest, RequestStatus};
use tracing::debug;

/// In-memory inbox of meeting requests from other platform members.
///
/// Requests are never created here; they arrive with the session, modeling
/// inbound proposals from a counterpart system.
#[derive(Debug, Clone, Default)]
pub struct MeetingRequestStore {
    requests: Vec<MeetingRequest>,
}

impl MeetingRequestStore {
    /// Create a store from the requests delivered with the session
    pub fn new(initial: Vec<MeetingRequest>) -> Self {
        Self { requests: initial }
    }

    /// Accept a pending request.
    ///
    /// Status moves forward only: a request that is already accepted or
    /// declined is left untouched.
    pub fn accept(&mut self, id: &str) {
        self.transition(id, RequestStatus::Accepted);
    }

    /// Decline a pending request. Same no-op rules as accept.
    pub fn decline(&mut self, id: &str) {
        self.transition(id, RequestStatus::Declined);
    }

    fn transition(&mut self, id: &str, status: RequestStatus) {
        match self.requests.iter_mut().find(|r| r.id == id) {
            Some(request) if request.status == RequestStatus::Pending => {
                request.status = status;
            }
            Some(request) => {
                debug!(
                    "Ignoring {} for already {} request {}",
                    status.label(),
                    request.status.label(),
                    id
                );
            }
            None => {
                debug!("Ignoring {} for unknown request {}", status.label(), id);
            }
        }
    }

    /// All requests in arrival order
    pub fn list(&self) -> &[MeetingRequest] {
        &self.requests
    }

    /// Number of requests still awaiting a decision
    pub fn pending_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count()
    }
}
