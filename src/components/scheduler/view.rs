use super::availability::AvailabilityStore;
use super::events::{events_for_date, overlay_events};
use super::grid::{first_of_month, month_grid};
use super::models::{
    AvailabilitySlot, CalendarEvent, MeetingRequest, NewSlot, SchedulerSeed,
};
use super::requests::MeetingRequestStore;
use super::time::normalize_time;
use crate::config::{DEFAULT_SLOT_END, DEFAULT_SLOT_START, DEFAULT_SLOT_TITLE};
use chrono::{Datelike, Months, NaiveDate};

/// Presets applied when the slot editor is submitted with missing or
/// malformed fields
#[derive(Debug, Clone)]
pub struct SlotPresets {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
}

impl Default for SlotPresets {
    fn default() -> Self {
        Self {
            title: DEFAULT_SLOT_TITLE.to_string(),
            start_time: DEFAULT_SLOT_START.to_string(),
            end_time: DEFAULT_SLOT_END.to_string(),
        }
    }
}

/// A slot being composed in the editor
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDraft {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
}

/// What the scheduler is currently editing, kept separate from what is
/// displayed
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Idle,
    ComposingSlot(SlotDraft),
}

/// One date-bearing cell of the rendered month view
#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_disabled: bool,
    pub events: Vec<CalendarEvent>,
}

/// Rendered state of the scheduler for one displayed month, including the
/// side-panel data
#[derive(Debug, Clone)]
pub struct MonthView {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub cells: Vec<DayCell>,
    pub slots: Vec<AvailabilitySlot>,
    pub requests: Vec<MeetingRequest>,
    pub pending_requests: usize,
}

/// The single-user scheduling session: displayed month, selected date,
/// optional date bounds, the two stores and the slot editor state machine.
#[derive(Debug, Clone)]
pub struct SchedulerView {
    reference_date: NaiveDate,
    selected_date: Option<NaiveDate>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    presets: SlotPresets,
    editor: EditorState,
    availability: AvailabilityStore,
    requests: MeetingRequestStore,
}

impl SchedulerView {
    /// Create a session showing the month of `reference_date`, populated
    /// with the given seed data
    pub fn new(reference_date: NaiveDate, seed: SchedulerSeed, presets: SlotPresets) -> Self {
        Self {
            reference_date,
            selected_date: None,
            min_date: None,
            max_date: None,
            presets,
            editor: EditorState::Idle,
            availability: AvailabilityStore::new(seed.slots),
            requests: MeetingRequestStore::new(seed.requests),
        }
    }

    /// Restrict clickable dates to the inclusive `[min, max]` range
    pub fn with_bounds(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    /// The date whose month is displayed
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// The currently selected date, if any
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Current editor state
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Move the displayed month forward or backward by whole months.
    ///
    /// The day of month is clamped when the target month is shorter, so
    /// Jan 31 navigates to Feb 28 (or 29 in a leap year).
    pub fn navigate_month(&mut self, delta: i32) {
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.reference_date.checked_add_months(months)
        } else {
            self.reference_date.checked_sub_months(months)
        };
        if let Some(date) = moved {
            self.reference_date = date;
        }
    }

    /// Promote a clicked date to the selected date.
    ///
    /// Disabled dates are rendered but not clickable, so clicks on them are
    /// ignored.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.is_date_disabled(date) {
            return;
        }
        self.selected_date = Some(date);
    }

    /// A date is disabled when it falls outside the optional bounds
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        if let Some(min) = self.min_date {
            if date < min {
                return true;
            }
        }
        if let Some(max) = self.max_date {
            if date > max {
                return true;
            }
        }
        false
    }

    /// Open the slot editor with a draft prefilled from the presets, dated
    /// to the selected date (or the displayed reference date)
    pub fn open_slot_editor(&mut self) {
        let date = self.selected_date.unwrap_or(self.reference_date);
        self.editor = EditorState::ComposingSlot(SlotDraft {
            date,
            start_time: self.presets.start_time.clone(),
            end_time: self.presets.end_time.clone(),
            title: self.presets.title.clone(),
        });
    }

    /// Replace the draft under composition. No-op while the editor is idle.
    pub fn update_draft(&mut self, draft: SlotDraft) {
        if let EditorState::ComposingSlot(_) = self.editor {
            self.editor = EditorState::ComposingSlot(draft);
        }
    }

    /// Close the editor without saving
    pub fn cancel_slot_editor(&mut self) {
        self.editor = EditorState::Idle;
    }

    /// Store the drafted slot and close the editor.
    ///
    /// An empty title and missing or malformed times fall back to the
    /// presets; nothing else is validated.
    pub fn submit_slot_editor(&mut self) -> Option<AvailabilitySlot> {
        let draft = match std::mem::replace(&mut self.editor, EditorState::Idle) {
            EditorState::ComposingSlot(draft) => draft,
            EditorState::Idle => return None,
        };

        let title = if draft.title.trim().is_empty() {
            self.presets.title.clone()
        } else {
            draft.title
        };

        Some(self.availability.add(NewSlot {
            date: draft.date,
            start_time: normalize_time(&draft.start_time, &self.presets.start_time),
            end_time: normalize_time(&draft.end_time, &self.presets.end_time),
            title,
        }))
    }

    /// Add a slot directly, bypassing the editor
    pub fn add_slot(&mut self, slot: NewSlot) -> AvailabilitySlot {
        self.availability.add(slot)
    }

    /// Remove a slot; unknown ids are a no-op
    pub fn remove_slot(&mut self, id: &str) {
        self.availability.remove(id);
    }

    /// Accept a pending meeting request
    pub fn accept_request(&mut self, id: &str) {
        self.requests.accept(id);
    }

    /// Decline a pending meeting request
    pub fn decline_request(&mut self, id: &str) {
        self.requests.decline(id);
    }

    /// Current slots for the side panel
    pub fn slots(&self) -> &[AvailabilitySlot] {
        self.availability.list()
    }

    /// Current requests for the side panel
    pub fn requests(&self) -> &[MeetingRequest] {
        self.requests.list()
    }

    /// Render the displayed month against the given current day
    pub fn render(&self, today: NaiveDate) -> MonthView {
        let overlay = overlay_events(self.availability.list(), self.requests.list());

        let cells = month_grid(self.reference_date)
            .into_iter()
            .map(|date| DayCell {
                date,
                is_current_month: date.year() == self.reference_date.year()
                    && date.month() == self.reference_date.month(),
                is_today: date == today,
                is_disabled: self.is_date_disabled(date),
                events: events_for_date(&overlay, date),
            })
            .collect();

        MonthView {
            month: first_of_month(self.reference_date),
            selected_date: self.selected_date,
            cells,
            slots: self.availability.list().to_vec(),
            requests: self.requests.list().to_vec(),
            pending_requests: self.requests.pending_count(),
        }
    }
}
