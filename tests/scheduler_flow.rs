use chrono::NaiveDate;
use venturelink::components::scheduler::events::{events_for_date, overlay_events};
use venturelink::components::scheduler::grid::month_grid;
use venturelink::components::scheduler::models::{
    AvailabilitySlot, EventKind, MeetingRequest, NewSlot, RequestStatus, SchedulerSeed,
};
use venturelink::components::scheduler::view::{EditorState, SchedulerView, SlotDraft, SlotPresets};
use venturelink::render;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One slot on June 10 and one pending request on June 12
fn june_seed() -> SchedulerSeed {
    SchedulerSeed {
        slots: vec![AvailabilitySlot::new(
            date(2025, 6, 10),
            "10:00",
            "11:00",
            "Available",
        )],
        requests: vec![MeetingRequest::incoming(
            "Sync",
            date(2025, 6, 12),
            "09:00",
            "10:00",
            "A",
        )],
    }
}

fn june_view() -> SchedulerView {
    SchedulerView::new(date(2025, 6, 15), june_seed(), SlotPresets::default())
}

/// Accepting a pending request moves its meeting onto the calendar overlay
#[test]
fn test_accept_request_end_to_end() {
    let mut view = june_view();
    let today = date(2025, 6, 15);

    let rendered = view.render(today);
    assert_eq!(rendered.pending_requests, 1);

    let june_10 = rendered
        .cells
        .iter()
        .find(|c| c.date == date(2025, 6, 10))
        .unwrap();
    assert_eq!(june_10.events.len(), 1);
    assert_eq!(june_10.events[0].kind, EventKind::Available);

    // Pending requests stay off the calendar
    let june_12 = rendered
        .cells
        .iter()
        .find(|c| c.date == date(2025, 6, 12))
        .unwrap();
    assert!(june_12.events.is_empty());

    let request_id = rendered.requests[0].id.clone();
    view.accept_request(&request_id);

    let rendered = view.render(today);
    assert_eq!(rendered.pending_requests, 0);
    let june_12 = rendered
        .cells
        .iter()
        .find(|c| c.date == date(2025, 6, 12))
        .unwrap();
    assert_eq!(june_12.events.len(), 1);
    assert_eq!(june_12.events[0].kind, EventKind::Meeting);
    assert_eq!(june_12.events[0].title, "09:00-10:00 Sync");

    // The request stays listed in the panel after settling
    assert_eq!(rendered.requests.len(), 1);
    assert_eq!(rendered.requests[0].status, RequestStatus::Accepted);
}

/// Accept is idempotent and decline cannot reverse an accepted request
#[test]
fn test_request_status_is_monotonic() {
    let mut view = june_view();
    let request_id = view.requests()[0].id.clone();

    view.accept_request(&request_id);
    assert_eq!(view.requests()[0].status, RequestStatus::Accepted);

    view.accept_request(&request_id);
    assert_eq!(view.requests()[0].status, RequestStatus::Accepted);

    view.decline_request(&request_id);
    assert_eq!(view.requests()[0].status, RequestStatus::Accepted);

    // Unknown ids are a silent no-op
    view.decline_request("no-such-request");
    assert_eq!(view.requests().len(), 1);
}

/// Adding and removing slots keeps ids unique and ordering stable
#[test]
fn test_slot_add_and_remove() {
    let mut view = june_view();
    assert_eq!(view.slots().len(), 1);

    let added = view.add_slot(NewSlot {
        date: date(2025, 6, 20),
        start_time: "14:00".to_string(),
        end_time: "15:00".to_string(),
        title: "Available".to_string(),
    });

    assert_eq!(view.slots().len(), 2);
    assert_ne!(added.id, view.slots()[0].id);
    assert_eq!(view.slots()[1].id, added.id);

    view.remove_slot(&added.id);
    assert_eq!(view.slots().len(), 1);
    assert!(view.slots().iter().all(|s| s.id != added.id));

    // Removing an unknown id is a no-op
    view.remove_slot(&added.id);
    assert_eq!(view.slots().len(), 1);
}

/// The editor drafts a slot, normalizes bad input and lands in the store
#[test]
fn test_slot_editor_state_machine() {
    let mut view = june_view();
    assert_eq!(*view.editor(), EditorState::Idle);

    view.select_date(date(2025, 6, 18));
    view.open_slot_editor();

    match view.editor() {
        EditorState::ComposingSlot(draft) => {
            assert_eq!(draft.date, date(2025, 6, 18));
            assert_eq!(draft.start_time, "09:00");
        }
        EditorState::Idle => panic!("editor should be composing"),
    }

    // Malformed times and an empty title fall back to the presets
    view.update_draft(SlotDraft {
        date: date(2025, 6, 18),
        start_time: "quarter past nine".to_string(),
        end_time: "25:99".to_string(),
        title: "   ".to_string(),
    });

    let slot = view.submit_slot_editor().expect("draft should be stored");
    assert_eq!(slot.date, date(2025, 6, 18));
    assert_eq!(slot.start_time, "09:00");
    assert_eq!(slot.end_time, "10:00");
    assert_eq!(slot.title, "Available");
    assert_eq!(*view.editor(), EditorState::Idle);

    // Submitting with an idle editor stores nothing
    assert!(view.submit_slot_editor().is_none());

    // Cancel drops the draft
    view.open_slot_editor();
    view.cancel_slot_editor();
    assert_eq!(*view.editor(), EditorState::Idle);
    assert_eq!(view.slots().len(), 2);
}

/// Month navigation rolls over year boundaries and back
#[test]
fn test_navigation_year_rollover() {
    let mut view = SchedulerView::new(
        date(2025, 12, 15),
        SchedulerSeed::default(),
        SlotPresets::default(),
    );

    view.navigate_month(1);
    assert_eq!(view.reference_date(), date(2026, 1, 15));

    view.navigate_month(-1);
    assert_eq!(view.reference_date(), date(2025, 12, 15));
}

/// Day of month is clamped when the target month is shorter
#[test]
fn test_navigation_clamps_short_months() {
    let mut view = SchedulerView::new(
        date(2025, 1, 31),
        SchedulerSeed::default(),
        SlotPresets::default(),
    );

    view.navigate_month(1);
    assert_eq!(view.reference_date(), date(2025, 2, 28));

    let mut leap = SchedulerView::new(
        date(2024, 1, 31),
        SchedulerSeed::default(),
        SlotPresets::default(),
    );
    leap.navigate_month(1);
    assert_eq!(leap.reference_date(), date(2024, 2, 29));
}

/// Dates outside the optional bounds render disabled and ignore clicks
#[test]
fn test_bounds_disable_dates() {
    let mut view = june_view().with_bounds(Some(date(2025, 6, 5)), Some(date(2025, 6, 20)));

    view.select_date(date(2025, 6, 1));
    assert_eq!(view.selected_date(), None);

    view.select_date(date(2025, 6, 25));
    assert_eq!(view.selected_date(), None);

    view.select_date(date(2025, 6, 5));
    assert_eq!(view.selected_date(), Some(date(2025, 6, 5)));

    let rendered = view.render(date(2025, 6, 15));
    let june_1 = rendered
        .cells
        .iter()
        .find(|c| c.date == date(2025, 6, 1))
        .unwrap();
    assert!(june_1.is_disabled);
    let june_10 = rendered
        .cells
        .iter()
        .find(|c| c.date == date(2025, 6, 10))
        .unwrap();
    assert!(!june_10.is_disabled);
}

/// Binding preserves input order and never places events outside the grid
#[test]
fn test_event_binding_order_and_range() {
    let slots = vec![
        AvailabilitySlot::new(date(2025, 6, 10), "08:00", "09:00", "Early"),
        AvailabilitySlot::new(date(2025, 6, 10), "16:00", "17:00", "Late"),
        // Outside the June grid entirely
        AvailabilitySlot::new(date(2025, 1, 2), "10:00", "11:00", "Elsewhere"),
    ];
    let overlay = overlay_events(&slots, &[]);

    let bound = events_for_date(&overlay, date(2025, 6, 10));
    assert_eq!(bound.len(), 2);
    assert_eq!(bound[0].title, "08:00-09:00 Early");
    assert_eq!(bound[1].title, "16:00-17:00 Late");

    let grid = month_grid(date(2025, 6, 15));
    let stray = &overlay[2];
    assert!(grid.iter().all(|day| events_for_date(&overlay, *day)
        .iter()
        .all(|event| event != stray)));
}

/// The text rendering truncates per-day listings after two events
#[test]
fn test_render_truncates_busy_days() {
    let mut view = june_view();
    for title in ["One", "Two", "Three", "Four"] {
        view.add_slot(NewSlot {
            date: date(2025, 6, 10),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            title: title.to_string(),
        });
    }

    let text = render::format_month(&view.render(date(2025, 6, 15)));
    assert!(text.contains("June 2025"));
    assert!(text.contains("+3 more"));
    assert!(text.contains("Meeting requests (1 pending):"));
}
