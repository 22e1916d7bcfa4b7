//! Authentication action handlers.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware::auth::{clear_current_user, set_current_user};
use crate::models::envelope::ApiEnvelope;
use crate::models::session::CurrentUser;
use crate::services::AuthService;
use crate::state::AppState;

use super::parse_lenient;

#[derive(Debug, Default, Deserialize)]
struct RegisterRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Default, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// `action=register` — create an account. Does not log the user in.
pub async fn register(state: &AppState, body: &[u8]) -> Result<Response> {
    let request: RegisterRequest = parse_lenient(body);

    let user = AuthService::new(state.pool())
        .register(&request.username, &request.email, &request.password)
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(ApiEnvelope::ok("Registration successful.")).into_response())
}

/// `action=login` — verify credentials and establish a session.
pub async fn login(state: &AppState, session: &Session, body: &[u8]) -> Result<Response> {
    let request: LoginRequest = parse_lenient(body);

    let user = AuthService::new(state.pool())
        .login(&request.username, &request.password)
        .await?;

    set_current_user(
        session,
        &CurrentUser {
            id: user.id,
            username: user.username.clone(),
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(ApiEnvelope::with_data(
        "Login successful.",
        json!({ "user": user }),
    ))
    .into_response())
}

/// `action=logout` — destroy the session. Succeeds even for guests.
pub async fn logout(session: &Session) -> Result<Response> {
    clear_current_user(session).await?;

    Ok(Json(ApiEnvelope::ok("Logout successful.")).into_response())
}

/// `action=get_session` — report the logged-in user, if any.
///
/// A guest gets a failure envelope with HTTP 200; no session is not an
/// error condition.
pub fn get_session(user: Option<&CurrentUser>) -> Response {
    match user {
        Some(user) => Json(ApiEnvelope::with_data(
            "Session active.",
            json!({ "user": { "id": user.id, "username": user.username } }),
        ))
        .into_response(),
        None => Json(ApiEnvelope::failure("No active session.")).into_response(),
    }
}
