pub mod availability;
pub mod events;
pub mod grid;
pub mod models;
pub mod requests;
pub mod time;
pub mod view;

pub use models::{AvailabilitySlot, CalendarEvent, EventKind, MeetingRequest, RequestStatus};
pub use view::{MonthView, SchedulerView, SlotPresets};

use crate::config::Config;
use crate::error::{scheduler_error, AppResult};
use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use models::SchedulerSeed;
use std::fs;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Path of the optional seed-data file
const SEED_FILE: &str = "config/seed.json";

/// Shared handle to the single-user scheduling session
#[derive(Clone)]
pub struct SchedulerHandle {
    view: Arc<RwLock<SchedulerView>>,
}

impl SchedulerHandle {
    /// Wrap a session for shared use
    pub fn new(view: SchedulerView) -> Self {
        Self {
            view: Arc::new(RwLock::new(view)),
        }
    }

    /// Run a closure against the session. Each call holds the write lock
    /// for its duration, so every mutation applies atomically.
    pub async fn with_view<R>(&self, f: impl FnOnce(&mut SchedulerView) -> R) -> R {
        let mut view = self.view.write().await;
        f(&mut view)
    }

    /// Render the displayed month against the given current day
    pub async fn render(&self, today: NaiveDate) -> MonthView {
        self.view.read().await.render(today)
    }
}

/// Meeting scheduler component for the signed-in user
#[derive(Default)]
pub struct MeetingScheduler {
    handle: RwLock<Option<SchedulerHandle>>,
}

impl MeetingScheduler {
    /// Create a new scheduler component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<SchedulerHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

#[async_trait]
impl super::Component for MeetingScheduler {
    fn name(&self) -> &'static str {
        "scheduler"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> AppResult<()> {
        let presets = {
            let config_read = config.read().await;
            SlotPresets {
                title: config_read.slot_title.clone(),
                start_time: config_read.slot_start_time.clone(),
                end_time: config_read.slot_end_time.clone(),
            }
        };

        let today = Local::now().date_naive();
        let seed = match load_seed() {
            Ok(Some(seed)) => {
                info!(
                    "Loaded scheduler seed: {} slots, {} requests",
                    seed.slots.len(),
                    seed.requests.len()
                );
                seed
            }
            Ok(None) => demo_seed(today),
            Err(e) => {
                warn!("Failed to load scheduler seed, using demo data: {:?}", e);
                demo_seed(today)
            }
        };

        let view = SchedulerView::new(today, seed, presets);
        *self.handle.write().await = Some(SchedulerHandle::new(view));

        Ok(())
    }

    async fn shutdown(&self) -> AppResult<()> {
        // Nothing to stop; the session lives in memory only
        *self.handle.write().await = None;
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Load seed data from the config directory if the file exists
fn load_seed() -> AppResult<Option<SchedulerSeed>> {
    let content = match fs::read_to_string(SEED_FILE) {
        Ok(content) => content,
        Err(_) => return Ok(None),
    };

    let seed: SchedulerSeed = serde_json::from_str(&content)
        .map_err(|e| scheduler_error(&format!("Invalid seed file {}: {}", SEED_FILE, e)))?;
    Ok(Some(seed))
}

/// Demo session data: a few availability slots in the coming days plus two
/// inbound meeting requests
fn demo_seed(today: NaiveDate) -> SchedulerSeed {
    let day = |offset: i64| today + Duration::days(offset);

    let slots = vec![
        AvailabilitySlot::new(day(1), "10:00", "11:00", "Available"),
        AvailabilitySlot::new(day(3), "14:00", "15:00", "Available"),
        AvailabilitySlot::new(day(5), "09:00", "10:00", "Available"),
    ];

    let mut requests = vec![
        MeetingRequest::incoming("Business Discussion", day(2), "11:00", "12:00", "John Doe"),
        MeetingRequest::incoming("Project Review", day(4), "15:00", "16:00", "Jane Smith"),
    ];
    // The second request arrives already settled
    requests[1].status = RequestStatus::Accepted;

    SchedulerSeed { slots, requests }
}
