//! Checkout action handler.

use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::error::Result;
use crate::models::envelope::ApiEnvelope;
use crate::models::order::CheckoutRequest;
use crate::models::session::CurrentUser;
use crate::services::CheckoutService;
use crate::state::AppState;

use super::parse_strict;

/// `action=checkout` — place an order.
///
/// Unlike the other actions this rejects a malformed body outright
/// instead of validating defaults; an order built from a half-parsed
/// payload must never reach the database.
pub async fn place_order(
    state: &AppState,
    user: Option<&CurrentUser>,
    body: &[u8],
) -> Result<Response> {
    let request: CheckoutRequest = parse_strict(body)?;

    let order_id = CheckoutService::new(state.pool())
        .place_order(user, &request)
        .await?;

    tracing::info!(
        order_id = %order_id,
        lines = request.cart.len(),
        "order placed"
    );

    Ok(Json(ApiEnvelope::ok(
        "Order placed successfully! Thank you for your purchase.",
    ))
    .into_response())
}
