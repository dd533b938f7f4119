//! Sign-in and current-user endpoints

use axum::{extract::State, Extension, Json};

use crate::error::{ApiError, Result};
use crate::models::{CreateSessionRequest, CreateSessionResponse, CurrentUserResponse};
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// POST /api/session
/// Signs a user in and returns the session token
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>> {
    if payload.display_name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "display_name and email are required".to_string(),
        ));
    }

    let user = state
        .sessions
        .create_session(payload.display_name.trim(), payload.email.trim())?;

    tracing::info!("Signed in user: {}", user.id);

    Ok(Json(CreateSessionResponse {
        user_id: user.id,
        token: user.token,
    }))
}

/// GET /api/session
/// Returns the signed-in user
pub async fn current(
    Extension(auth): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<CurrentUserResponse>> {
    let user = state
        .sessions
        .get_by_token(&auth.token)?
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;

    Ok(Json(CurrentUserResponse {
        user_id: user.id,
        display_name: user.display_name,
        email: user.email,
        last_seen_at: user.last_seen_at,
    }))
}

/// DELETE /api/session
/// Signs the current user out
pub async fn delete(
    Extension(auth): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.sessions.remove(&auth.token)?;

    tracing::info!("Signed out user: {}", auth.user_id);

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
