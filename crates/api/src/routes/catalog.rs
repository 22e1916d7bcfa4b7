//! Catalog action handlers.

use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::error::Result;
use crate::models::envelope::ApiEnvelope;
use crate::services::CatalogService;
use crate::state::AppState;

/// `action=get_products` — full catalog listing.
pub async fn get_products(state: &AppState) -> Result<Response> {
    let products = CatalogService::new(state.pool()).list().await?;

    Ok(Json(ApiEnvelope::with_data(
        "Products loaded successfully from database.",
        products,
    ))
    .into_response())
}
