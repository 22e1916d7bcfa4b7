//! HTTP route handlers.
//!
//! The storefront client speaks to one endpoint and selects the
//! operation with a query parameter:
//!
//! ```text
//! GET|POST /api?action=<name>
//!
//! register        - Create an account
//! login           - Log in, establishes a session
//! logout          - Destroy the session
//! get_session     - Report the logged-in user, if any
//! get_products    - Full catalog listing
//! sync_cart       - Replace the stored cart (auth required)
//! get_cart        - Load the stored cart
//! sync_favorites  - Replace the stored favorites (auth required)
//! get_favorites   - Load the stored favorites
//! submit_contact  - Store a contact form message
//! checkout        - Place an order
//! ```
//!
//! Every response uses the `{success, message, data}` envelope. The
//! dispatcher resolves the session user once and hands it to the
//! handlers; nothing below this layer touches the session.

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod sync;

use std::str::FromStr;

use axum::{
    Router,
    body::Bytes,
    extract::{Query, State},
    response::Response,
    routing::get,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::auth::current_user;
use crate::state::AppState;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api", get(dispatch).post(dispatch))
}

/// The operations reachable through the dispatch endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Register,
    Login,
    Logout,
    GetSession,
    GetProducts,
    SyncCart,
    GetCart,
    SyncFavorites,
    GetFavorites,
    SubmitContact,
    Checkout,
}

/// Marker error for an unrecognized action name.
struct UnknownAction;

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "register" => Ok(Self::Register),
            "login" => Ok(Self::Login),
            "logout" => Ok(Self::Logout),
            "get_session" => Ok(Self::GetSession),
            "get_products" => Ok(Self::GetProducts),
            "sync_cart" => Ok(Self::SyncCart),
            "get_cart" => Ok(Self::GetCart),
            "sync_favorites" => Ok(Self::SyncFavorites),
            "get_favorites" => Ok(Self::GetFavorites),
            "submit_contact" => Ok(Self::SubmitContact),
            "checkout" => Ok(Self::Checkout),
            _ => Err(UnknownAction),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ActionQuery {
    action: Option<String>,
}

/// Single entry point for every API action.
async fn dispatch(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ActionQuery>,
    body: Bytes,
) -> Result<Response> {
    let action = query
        .action
        .as_deref()
        .unwrap_or_default()
        .parse::<Action>()
        .map_err(|UnknownAction| AppError::BadRequest("Invalid action specified.".to_owned()))?;

    let user = current_user(&session).await?;

    match action {
        Action::Register => auth::register(&state, &body).await,
        Action::Login => auth::login(&state, &session, &body).await,
        Action::Logout => auth::logout(&session).await,
        Action::GetSession => Ok(auth::get_session(user.as_ref())),
        Action::GetProducts => catalog::get_products(&state).await,
        Action::SyncCart => sync::sync_cart(&state, user.as_ref(), &body).await,
        Action::GetCart => sync::get_cart(&state, user.as_ref()).await,
        Action::SyncFavorites => sync::sync_favorites(&state, user.as_ref(), &body).await,
        Action::GetFavorites => sync::get_favorites(&state, user.as_ref()).await,
        Action::SubmitContact => contact::submit(&state, &body).await,
        Action::Checkout => checkout::place_order(&state, user.as_ref(), &body).await,
    }
}

/// Parse a JSON body, falling back to the type's default on failure.
///
/// Most actions treat a malformed body the same as an empty one and let
/// field validation produce the error message. Checkout is the
/// exception; see [`parse_strict`].
fn parse_lenient<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Parse a JSON body, rejecting malformed input outright.
///
/// # Errors
///
/// Returns `AppError::BadRequest` ("Invalid JSON data received.") if the
/// body is not valid JSON for `T`.
fn parse_strict<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest("Invalid JSON data received.".to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names() {
        assert_eq!("register".parse::<Action>().ok(), Some(Action::Register));
        assert_eq!("checkout".parse::<Action>().ok(), Some(Action::Checkout));
        assert_eq!(
            "sync_favorites".parse::<Action>().ok(),
            Some(Action::SyncFavorites)
        );
        assert!("".parse::<Action>().is_err());
        assert!("drop_tables".parse::<Action>().is_err());
        assert!("Register".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_lenient_falls_back_to_default() {
        #[derive(Debug, Default, serde::Deserialize, PartialEq)]
        struct Req {
            #[serde(default)]
            name: String,
        }

        assert_eq!(parse_lenient::<Req>(b"not json"), Req::default());
        assert_eq!(
            parse_lenient::<Req>(br#"{"name": "x"}"#),
            Req {
                name: "x".to_string()
            }
        );
    }

    #[test]
    fn test_parse_strict_rejects_bad_json() {
        #[derive(Debug, serde::Deserialize)]
        struct Req {}

        let err = parse_strict::<Req>(b"{").unwrap_err();
        assert_eq!(err.client_message(), "Invalid JSON data received.");
    }
}
