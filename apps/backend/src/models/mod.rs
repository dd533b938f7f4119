//! Session records and API types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from prepmate-core
pub use prepmate_core::types::{
    RevisionEntry, RevisionStats, TopicGroup, TopicRef, Urgency,
};
pub use prepmate_core::planner::{PlannedTask, Priority};

// === Session Types ===

/// Signed-in user as issued by the session registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub token: String,
    pub display_name: String,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub user_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user_id: Uuid,
    pub display_name: String,
    pub email: String,
    pub last_seen_at: DateTime<Utc>,
}

// === Revision Types ===

/// Entry decorated with everything a revision card displays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionView {
    #[serde(flatten)]
    pub entry: RevisionEntry,
    pub urgency: Urgency,
    pub relative_label: String,
    pub interval_label: String,
}

impl RevisionView {
    /// Describe `entry` as seen on study day `today`
    pub fn new(entry: RevisionEntry, today: NaiveDate) -> Self {
        Self {
            urgency: prepmate_core::classify_urgency(entry.scheduled_date, today),
            relative_label: prepmate_core::format_relative_label(entry.scheduled_date, today),
            interval_label: prepmate_core::interval_label(entry.interval_day),
            entry,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RevisionListQuery {
    #[serde(default)]
    pub include_completed: bool,
    pub urgency: Option<Urgency>,
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReferenceDayQuery {
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RevisionListResponse {
    pub today: NaiveDate,
    pub revisions: Vec<RevisionView>,
}

/// Pending entries of one topic, decorated for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicGroupView {
    pub topic_id: String,
    pub topic_name: String,
    pub subject: String,
    pub entries: Vec<RevisionView>,
}

impl TopicGroupView {
    pub fn new(group: TopicGroup, today: NaiveDate) -> Self {
        Self {
            topic_id: group.topic_id,
            topic_name: group.topic_name,
            subject: group.subject,
            entries: group
                .entries
                .into_iter()
                .map(|entry| RevisionView::new(entry, today))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupedRevisionsResponse {
    pub today: NaiveDate,
    pub groups: Vec<TopicGroupView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RevisionStatsResponse {
    pub today: NaiveDate,
    #[serde(flatten)]
    pub stats: RevisionStats,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ToggleRevisionRequest {
    pub expected_completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleRevisionResponse {
    pub revision: RevisionEntry,
}

// === Topic Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteTopicRequest {
    pub topic_id: String,
    pub topic_name: String,
    pub subject: String,
    pub completed_on: Option<NaiveDate>,
}

impl CompleteTopicRequest {
    /// Reject blank metadata before it reaches the scheduler
    pub fn to_topic(&self) -> Result<TopicRef, String> {
        let fields = [
            ("topic_id", &self.topic_id),
            ("topic_name", &self.topic_name),
            ("subject", &self.subject),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(format!("{name} is required"));
        }

        Ok(TopicRef::new(
            self.topic_id.trim(),
            self.topic_name.trim(),
            self.subject.trim(),
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteTopicResponse {
    pub topic_id: String,
    pub revisions: Vec<RevisionEntry>,
}

// === Planner Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekPlanQuery {
    pub year: i32,
    pub month: u32,
    pub week: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlannerDay {
    pub date: NaiveDate,
    pub day_name: String,
    pub day_number: u32,
    pub is_today: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekPlanResponse {
    pub year: i32,
    pub month: u32,
    pub week: u32,
    pub week_range: String,
    pub days: Vec<PlannerDay>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskValidationResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}
