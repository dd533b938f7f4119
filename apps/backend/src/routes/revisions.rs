//! Revision queue endpoints

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Extension, Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;
use prepmate_core::group_by_topic;

/// GET /api/revisions
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RevisionListQuery>,
) -> Result<Json<RevisionListResponse>> {
    let today = query.today.unwrap_or_else(|| state.today());

    let entries = {
        let scheduler = state.scheduler()?;
        match query.urgency {
            Some(urgency) => scheduler.query_by_urgency(urgency, today),
            None => scheduler.query_due(query.include_completed),
        }
    };

    Ok(Json(RevisionListResponse {
        today,
        revisions: entries
            .into_iter()
            .map(|entry| RevisionView::new(entry, today))
            .collect(),
    }))
}

/// GET /api/revisions/grouped
pub async fn grouped(
    State(state): State<AppState>,
    Query(query): Query<ReferenceDayQuery>,
) -> Result<Json<GroupedRevisionsResponse>> {
    let today = query.today.unwrap_or_else(|| state.today());
    let pending = state.scheduler()?.query_due(false);

    Ok(Json(GroupedRevisionsResponse {
        today,
        groups: group_by_topic(pending)
            .into_iter()
            .map(|group| TopicGroupView::new(group, today))
            .collect(),
    }))
}

/// GET /api/revisions/stats
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<ReferenceDayQuery>,
) -> Result<Json<RevisionStatsResponse>> {
    let today = query.today.unwrap_or_else(|| state.today());
    let stats = state.scheduler()?.compute_stats(today);

    Ok(Json(RevisionStatsResponse { today, stats }))
}

/// POST /api/revisions/:id/toggle
/// An empty body toggles unconditionally
pub async fn toggle(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(revision_id): Path<String>,
    body: Bytes,
) -> Result<Json<ToggleRevisionResponse>> {
    let request = parse_toggle_request(&body)?;

    let result = {
        let mut scheduler = state.scheduler()?;
        match request.expected_completed {
            Some(expected) => scheduler.toggle_completion_if(&revision_id, expected),
            None => scheduler.toggle_completion(&revision_id),
        }
    };

    let revision = result.map_err(|err| {
        tracing::warn!("Rejected toggle of {} by {}: {}", revision_id, auth.user_id, err);
        err
    })?;

    tracing::info!(
        "User {} marked revision {} as {}",
        auth.user_id,
        revision.id,
        if revision.completed { "completed" } else { "pending" }
    );

    Ok(Json(ToggleRevisionResponse { revision }))
}

fn parse_toggle_request(body: &[u8]) -> Result<ToggleRevisionRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ToggleRevisionRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid toggle request: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toggle_body_is_unconditional() {
        assert_eq!(parse_toggle_request(b"").unwrap().expected_completed, None);
        assert_eq!(parse_toggle_request(b" \n").unwrap().expected_completed, None);
    }

    #[test]
    fn toggle_body_with_expectation() {
        let request = parse_toggle_request(br#"{"expected_completed":true}"#).unwrap();
        assert_eq!(request.expected_completed, Some(true));
    }

    #[test]
    fn malformed_toggle_body_is_rejected() {
        assert!(matches!(
            parse_toggle_request(br#"{"expected_completed":"false"}"#),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            parse_toggle_request(b"{"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
