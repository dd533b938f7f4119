//! Core types for the revision scheduler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency of a scheduled review relative to the study day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    Today,
    Upcoming,
}

/// Metadata of a studied topic, supplied when it is marked completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRef {
    pub id: String,
    pub name: String,
    pub subject: String,
}

impl TopicRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subject: subject.into(),
        }
    }
}

/// One scheduled review of one topic at one interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionEntry {
    pub id: String,
    pub topic_id: String,
    pub topic_name: String,
    pub subject: String,
    pub interval_day: u32,
    pub scheduled_date: NaiveDate,
    pub completed: bool,
}

/// Counts over the scheduler's current entries.
///
/// `overdue`, `today` and `upcoming` only count pending entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionStats {
    pub total: usize,
    pub overdue: usize,
    pub today: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub completion_percent: u8,
}

/// Entries of a single topic, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicGroup {
    pub topic_id: String,
    pub topic_name: String,
    pub subject: String,
    pub entries: Vec<RevisionEntry>,
}
