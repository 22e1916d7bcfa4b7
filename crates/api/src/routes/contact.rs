//! Contact form action handler.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::envelope::ApiEnvelope;
use crate::services::ContactService;
use crate::state::AppState;

use super::parse_lenient;

#[derive(Debug, Default, Deserialize)]
struct ContactRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    number: String,
    #[serde(default)]
    message: String,
}

/// `action=submit_contact` — validate and store a contact message.
pub async fn submit(state: &AppState, body: &[u8]) -> Result<Response> {
    let request: ContactRequest = parse_lenient(body);

    ContactService::new(state.pool())
        .submit(
            &request.name,
            &request.email,
            &request.number,
            &request.message,
        )
        .await?;

    Ok(Json(ApiEnvelope::ok(
        "Message sent successfully. We will contact you soon.",
    ))
    .into_response())
}
