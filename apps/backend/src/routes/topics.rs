//! Topic completion endpoint

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// POST /api/topics/complete
/// Marks a topic as studied and schedules its revisions
pub async fn complete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<CompleteTopicRequest>,
) -> Result<(StatusCode, Json<CompleteTopicResponse>)> {
    let topic = payload.to_topic().map_err(ApiError::BadRequest)?;
    let completed_on = payload.completed_on.unwrap_or_else(|| state.today());

    let revisions = state
        .scheduler()?
        .record_topic_completion(&topic, completed_on)?;

    tracing::info!(
        "User {} completed topic {} on {}, scheduled {} revisions",
        auth.user_id,
        topic.id,
        completed_on,
        revisions.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(CompleteTopicResponse {
            topic_id: topic.id,
            revisions,
        }),
    ))
}
