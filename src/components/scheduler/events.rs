use super::models::{AvailabilitySlot, CalendarEvent, EventKind, MeetingRequest, RequestStatus};
use chrono::NaiveDate;

/// Events whose date is the same calendar day as `date`, in input order
pub fn events_for_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.date == date)
        .cloned()
        .collect()
}

/// Derive the calendar overlay from the current slots and requests.
///
/// Slots appear as `Available` entries and accepted requests as `Meeting`
/// entries. Declined and pending requests stay off the calendar; they are
/// still listed in the request panel.
pub fn overlay_events(
    slots: &[AvailabilitySlot],
    requests: &[MeetingRequest],
) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = slots
        .iter()
        .map(|slot| CalendarEvent {
            date: slot.date,
            title: format!("{}-{} {}", slot.start_time, slot.end_time, slot.title),
            kind: EventKind::Available,
        })
        .collect();

    events.extend(
        requests
            .iter()
            .filter(|request| request.status == RequestStatus::Accepted)
            .map(|request| CalendarEvent {
                date: request.date,
                title: format!(
                    "{}-{} {}",
                    request.start_time, request.end_time, request.title
                ),
                kind: EventKind::Meeting,
            }),
    );

    events
}
