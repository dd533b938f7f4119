//! Test fixtures and factory functions for request bodies.

use chrono::NaiveDate;
use serde_json::json;
use serde_json::Value;

/// Calendar date shorthand.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Create a sign-in request body.
pub fn create_session_request(display_name: &str, email: &str) -> Value {
    json!({ "display_name": display_name, "email": email })
}

/// Create a topic completion request body.
pub fn complete_topic_request(
    topic_id: &str,
    topic_name: &str,
    subject: &str,
    completed_on: Option<NaiveDate>,
) -> Value {
    json!({
        "topic_id": topic_id,
        "topic_name": topic_name,
        "subject": subject,
        "completed_on": completed_on,
    })
}

/// Create a conditional toggle request body.
pub fn toggle_request(expected_completed: bool) -> Value {
    json!({ "expected_completed": expected_completed })
}

/// Create a planned task body.
pub fn planned_task(subject: &str, title: &str, estimated_minutes: Option<i32>) -> Value {
    let mut obj = serde_json::Map::new();
    obj.insert("subject".to_string(), json!(subject));
    obj.insert("title".to_string(), json!(title));
    if let Some(minutes) = estimated_minutes {
        obj.insert("estimated_minutes".to_string(), json!(minutes));
    }
    Value::Object(obj)
}

/// Find the revision with the given interval in an API response array.
pub fn revision_for_interval(revisions: &[Value], interval_day: u64) -> &Value {
    revisions
        .iter()
        .find(|r| r["interval_day"].as_u64() == Some(interval_day))
        .expect("revision for interval")
}
