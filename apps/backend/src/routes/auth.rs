//! Authentication middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::AppState;

/// Authenticated user info stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub token: String,
}

/// Auth middleware - extracts session token from Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    // Skip auth for sign-in and health check
    let path = request.uri().path();
    if (path == "/api/session" && request.method() == axum::http::Method::POST) || path == "/health" {
        return Ok(next.run(request).await);
    }

    // Extract Bearer token
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?
        .to_string();

    // Look up user by token
    let user = state
        .sessions
        .get_by_token(&token)?
        .ok_or_else(|| ApiError::Unauthorized("Invalid session token".to_string()))?;

    state.sessions.touch(&token, Utc::now())?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        token,
    });

    Ok(next.run(request).await)
}
