//! Cart and favorites sync action handlers.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::cart::{ClientCartItem, ClientFavoriteItem};
use crate::models::envelope::ApiEnvelope;
use crate::models::session::CurrentUser;
use crate::services::SyncService;
use crate::state::AppState;

use super::parse_lenient;

#[derive(Debug, Default, Deserialize)]
struct SyncCartRequest {
    #[serde(default)]
    cart: Vec<ClientCartItem>,
}

#[derive(Debug, Default, Deserialize)]
struct SyncFavoritesRequest {
    #[serde(default)]
    favorites: Vec<ClientFavoriteItem>,
}

/// `action=sync_cart` — replace the stored cart. Auth required.
pub async fn sync_cart(
    state: &AppState,
    user: Option<&CurrentUser>,
    body: &[u8],
) -> Result<Response> {
    let request: SyncCartRequest = parse_lenient(body);

    SyncService::new(state.pool())
        .sync_cart(user, &request.cart)
        .await?;

    Ok(Json(ApiEnvelope::ok("Cart synced successfully.")).into_response())
}

/// `action=get_cart` — load the stored cart; guests get an empty list.
pub async fn get_cart(state: &AppState, user: Option<&CurrentUser>) -> Result<Response> {
    let entries = SyncService::new(state.pool()).get_cart(user).await?;

    let message = if user.is_some() {
        "Cart data loaded successfully from database."
    } else {
        "Cart data for guest user."
    };

    Ok(Json(ApiEnvelope::with_data(message, entries)).into_response())
}

/// `action=sync_favorites` — replace the stored favorites. Auth required.
pub async fn sync_favorites(
    state: &AppState,
    user: Option<&CurrentUser>,
    body: &[u8],
) -> Result<Response> {
    let request: SyncFavoritesRequest = parse_lenient(body);

    SyncService::new(state.pool())
        .sync_favorites(user, &request.favorites)
        .await?;

    Ok(Json(ApiEnvelope::ok("Favorites synced successfully.")).into_response())
}

/// `action=get_favorites` — load the stored favorites; guests get an
/// empty list.
pub async fn get_favorites(state: &AppState, user: Option<&CurrentUser>) -> Result<Response> {
    let entries = SyncService::new(state.pool()).get_favorites(user).await?;

    let message = if user.is_some() {
        "Favorite data loaded successfully from database."
    } else {
        "Favorite data for guest user."
    };

    Ok(Json(ApiEnvelope::with_data(message, entries)).into_response())
}
