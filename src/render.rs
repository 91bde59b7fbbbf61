use crate::components::scheduler::models::{AvailabilitySlot, MeetingRequest};
use crate::components::scheduler::view::{DayCell, MonthView};
use chrono::Datelike;

/// Maximum events printed per day before collapsing into "+N more".
///
/// This is a display policy layered on top of the full binding result; the
/// cells themselves always carry every event for their date.
const MAX_EVENTS_PER_DAY: usize = 2;

/// Render a month view as plain text: header, weekday row, the day grid,
/// the per-day event overlay and the two side panels
pub fn format_month(view: &MonthView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:^28}\n", view.month.format("%B %Y").to_string()));
    for weekday in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
        out.push_str(&format!("{:>3} ", weekday));
    }
    out.push('\n');

    for week in view.cells.chunks(7) {
        for cell in week {
            out.push_str(&format_cell(cell));
        }
        out.push('\n');
    }

    let days_with_events: Vec<&DayCell> = view
        .cells
        .iter()
        .filter(|cell| cell.is_current_month && !cell.events.is_empty())
        .collect();

    if !days_with_events.is_empty() {
        out.push('\n');
        for cell in days_with_events {
            out.push_str(&format!("{}:\n", cell.date.format("%b %-d")));
            for event in cell.events.iter().take(MAX_EVENTS_PER_DAY) {
                out.push_str(&format!("  {} ({})\n", event.title, event.kind.label()));
            }
            if cell.events.len() > MAX_EVENTS_PER_DAY {
                out.push_str(&format!(
                    "  +{} more\n",
                    cell.events.len() - MAX_EVENTS_PER_DAY
                ));
            }
        }
    }

    out.push('\n');
    out.push_str(&format_slot_panel(&view.slots));
    out.push('\n');
    out.push_str(&format_request_panel(&view.requests, view.pending_requests));

    out
}

/// One four-column grid cell: day number (or a dot for padding days from
/// adjacent months) plus a marker for events or today
fn format_cell(cell: &DayCell) -> String {
    let day = if cell.is_current_month {
        format!("{:>3}", cell.date.day())
    } else {
        "  ·".to_string()
    };

    let marker = if !cell.events.is_empty() {
        '*'
    } else if cell.is_today {
        '+'
    } else {
        ' '
    };

    format!("{}{}", day, marker)
}

/// The "Your availability" side panel
fn format_slot_panel(slots: &[AvailabilitySlot]) -> String {
    let mut out = String::from("Your availability:\n");
    if slots.is_empty() {
        out.push_str("  No availability slots added yet.\n");
        return out;
    }

    for slot in slots {
        out.push_str(&format!(
            "  {} | {} - {} | {}\n",
            slot.date.format("%b %-d, %Y"),
            slot.start_time,
            slot.end_time,
            slot.title
        ));
    }
    out
}

/// The "Meeting requests" side panel; all requests stay listed here whatever
/// their status
fn format_request_panel(requests: &[MeetingRequest], pending: usize) -> String {
    let mut out = format!("Meeting requests ({} pending):\n", pending);
    if requests.is_empty() {
        out.push_str("  No meeting requests.\n");
        return out;
    }

    for request in requests {
        out.push_str(&format!(
            "  [{}] {} | {} | {} | {} - {}\n",
            request.status.label(),
            request.title,
            request.sender,
            request.date.format("%b %-d, %Y"),
            request.start_time,
            request.end_time
        ));
    }
    out
}
