//! Urgency classification and relative date labels.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike};

use super::CalendarDay;
use crate::types::Urgency;

/// Classify a scheduled date against the reference day.
pub fn classify_urgency(scheduled: impl CalendarDay, reference: impl CalendarDay) -> Urgency {
    let scheduled = scheduled.calendar_day();
    let reference = reference.calendar_day();

    if scheduled < reference {
        Urgency::Overdue
    } else if scheduled == reference {
        Urgency::Today
    } else {
        Urgency::Upcoming
    }
}

/// Signed number of calendar days from `reference` to `target`.
pub fn day_difference(target: impl CalendarDay, reference: impl CalendarDay) -> i64 {
    target
        .calendar_day()
        .signed_duration_since(reference.calendar_day())
        .num_days()
}

/// Describe `target` relative to `reference`: "Today", "In 3 days", ...
pub fn format_relative_label(target: impl CalendarDay, reference: impl CalendarDay) -> String {
    match day_difference(target, reference) {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        n if n > 0 => format!("In {n} {}", day_unit(n)),
        n => format!("{} {} ago", n.unsigned_abs(), day_unit(n)),
    }
}

fn day_unit(n: i64) -> &'static str {
    if n.unsigned_abs() == 1 {
        "day"
    } else {
        "days"
    }
}

/// The study day `now` belongs to.
///
/// Before `daily_reset_hour` the previous calendar day is still in progress,
/// so late-night reviews count towards it.
pub fn study_day<Tz: TimeZone>(now: &DateTime<Tz>, daily_reset_hour: u32) -> NaiveDate {
    let date = now.date_naive();
    if now.hour() < daily_reset_hour {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}

/// Today's study day in local time.
pub fn today(daily_reset_hour: u32) -> NaiveDate {
    study_day(&Local::now(), daily_reset_hour)
}
