//! Date helpers and task validation for the weekly and daily planners.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// Highest week number a month can be split into.
pub const MAX_WEEKS_PER_MONTH: u32 = 5;

/// Seven consecutive days making up one planner week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// Every day of the week, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(7).collect()
    }

    /// Short label such as "1 Feb - 7 Feb".
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%-d %b"),
            self.end.format("%-d %b")
        )
    }
}

/// Week `week_number` (1-based) of `month` (1-12).
///
/// Weeks start on day 1, 8, 15, 22 and 29 of the month regardless of
/// weekday, so the last week may spill into the next month.
pub fn week_range(year: i32, month: u32, week_number: u32) -> Result<WeekRange> {
    if !(1..=MAX_WEEKS_PER_MONTH).contains(&week_number) {
        return Err(SchedulerError::InvalidDate(format!(
            "week number out of range: {week_number}"
        )));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| SchedulerError::InvalidDate(format!("{year}-{month:02}")))?;
    let start = first
        .checked_add_days(Days::new(u64::from(week_number - 1) * 7))
        .ok_or_else(|| SchedulerError::InvalidDate(format!("{year}-{month:02} week {week_number}")))?;
    let end = start
        .checked_add_days(Days::new(6))
        .ok_or_else(|| SchedulerError::InvalidDate(format!("{year}-{month:02} week {week_number}")))?;

    Ok(WeekRange { start, end })
}

/// Task priority on the daily planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// A study task planned for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTask {
    pub subject: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<i32>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
}

/// Check a task before it is added to a plan, collecting every problem.
pub fn validate_task(task: &PlannedTask) -> std::result::Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if task.subject.trim().is_empty() {
        errors.push("Subject is required".to_string());
    }
    if task.title.trim().is_empty() {
        errors.push("Task title is required".to_string());
    }
    if matches!(task.estimated_minutes, Some(minutes) if minutes < 1) {
        errors.push("Time estimate must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
