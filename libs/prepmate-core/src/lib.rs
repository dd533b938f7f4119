//! Core revision scheduling library for PrepMate.
//!
//! Provides:
//! - Spaced repetition schedule generation over a configurable interval set
//! - Urgency classification and relative date labels at day granularity
//! - The in-memory revision catalogue (`RevisionScheduler`)
//! - Planner week ranges and task validation

pub mod error;
pub mod planner;
pub mod schedule;
pub mod scheduler;
pub mod types;

pub use error::{Result, SchedulerError};
pub use planner::{validate_task, week_range, PlannedTask, Priority, WeekRange};
pub use schedule::{
    classify_urgency, completion_percentage, day_difference, format_relative_label,
    generate_schedule, interval_label, study_day, today, CalendarDay, IntervalSet,
    DEFAULT_INTERVALS,
};
pub use scheduler::{group_by_topic, RevisionScheduler};
pub use types::{RevisionEntry, RevisionStats, TopicGroup, TopicRef, Urgency};
