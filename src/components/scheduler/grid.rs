use chrono::{Datelike, Duration, Months, NaiveDate};

/// First day of the month containing `reference`
pub fn first_of_month(reference: NaiveDate) -> NaiveDate {
    reference.with_day(1).unwrap_or(reference)
}

/// Last day of the month containing `reference`
pub fn last_of_month(reference: NaiveDate) -> NaiveDate {
    let first = first_of_month(reference);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// Build the month grid for the month containing `reference`.
///
/// Covers every day from the Sunday on or before the 1st through the
/// Saturday on or after the last day of the month, ascending, so the result
/// is always whole calendar weeks (length a multiple of seven).
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    let last = last_of_month(reference);

    let start = first
        .checked_sub_signed(Duration::days(
            first.weekday().num_days_from_sunday() as i64
        ))
        .unwrap_or(first);
    let end = last
        .checked_add_signed(Duration::days(
            (6 - last.weekday().num_days_from_sunday()) as i64,
        ))
        .unwrap_or(last);

    let mut days = Vec::new();
    let mut day = start;
    loop {
        days.push(day);
        if day >= end {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}
