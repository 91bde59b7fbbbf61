use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of entry shown on a calendar cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    Available,
    Other,
}

impl EventKind {
    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Meeting => "meeting",
            EventKind::Available => "available",
            EventKind::Other => "other",
        }
    }
}

/// A dated entry displayed on the calendar overlay.
///
/// Derived fresh on every render from the availability slots and the
/// accepted meeting requests, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: String,
    pub kind: EventKind,
}

/// A self-declared block of availability offered by the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
}

impl AvailabilitySlot {
    /// Create a slot with a fresh id
    pub fn new(
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            title: title.into(),
        }
    }
}

/// Input for a new availability slot; the store assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSlot {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
}

/// Lifecycle state of a meeting request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    /// Short label for panel display
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Declined => "declined",
        }
    }
}

/// An inbound meeting proposal from another platform member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub sender: String,
    pub status: RequestStatus,
}

impl MeetingRequest {
    /// Create a pending request as delivered by the counterpart system
    pub fn incoming(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            sender: sender.into(),
            status: RequestStatus::Pending,
        }
    }
}

/// Initial data injected into a fresh scheduler session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulerSeed {
    pub slots: Vec<AvailabilitySlot>,
    pub requests: Vec<MeetingRequest>,
}
