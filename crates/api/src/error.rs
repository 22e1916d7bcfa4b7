//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All action handlers return
//! `Result<Response, AppError>`; the `IntoResponse` impl turns every error
//! into the uniform `{success, message, data}` envelope.
//!
//! Internal error detail (storage errors in particular) never reaches the
//! client; the boundary maps each error kind to a fixed public message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::envelope::ApiEnvelope;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::services::contact::ContactError;
use crate::services::sync::SyncError;

/// Application-level error type for the API boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed outside any service.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Cart/favorites sync failed.
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// Contact form submission failed.
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Session store failure.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Bad request from client (unknown action, malformed body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Session(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Auth(err) => match err {
                AuthError::MissingFields | AuthError::MissingCredentials => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::PasswordHash | AuthError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Sync(err) => match err {
                SyncError::NotAuthenticated => StatusCode::UNAUTHORIZED,
                SyncError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Contact(err) => match err {
                ContactError::MissingFields | ContactError::InvalidEmail(_) => {
                    StatusCode::BAD_REQUEST
                }
                ContactError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Checkout(err) => match err {
                CheckoutError::Validation(_) => StatusCode::BAD_REQUEST,
                CheckoutError::InsufficientStock { .. } => StatusCode::CONFLICT,
                CheckoutError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The message exposed to the client in the response envelope.
    ///
    /// Internal error details are deliberately not included here.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Session(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
            Self::Auth(err) => match err {
                AuthError::MissingFields => "All fields are required.".to_string(),
                AuthError::MissingCredentials => "Username and password are required.".to_string(),
                AuthError::InvalidCredentials => "Invalid username or password.".to_string(),
                AuthError::UserAlreadyExists => "Username or email already exists.".to_string(),
                AuthError::PasswordHash | AuthError::Repository(_) => {
                    "Registration failed due to a server error.".to_string()
                }
            },
            Self::Sync(err) => match err {
                SyncError::NotAuthenticated => "User not authenticated.".to_string(),
                SyncError::Repository(_) => "Internal server error".to_string(),
            },
            Self::Contact(err) => match err {
                ContactError::MissingFields => {
                    "Name, email, number, and message are required fields.".to_string()
                }
                ContactError::InvalidEmail(_) => "Invalid email format.".to_string(),
                ContactError::Repository(_) => {
                    "Failed to send message. Please try again later.".to_string()
                }
            },
            Self::Checkout(err) => match err {
                CheckoutError::Validation(message) => (*message).to_string(),
                CheckoutError::InsufficientStock { product } => {
                    format!("Insufficient stock for product: {product}")
                }
                CheckoutError::Repository(_) => "Order failed due to a server error.".to_string(),
            },
            Self::BadRequest(message) => message.clone(),
        }
    }

    /// Whether this error represents a server-side failure worth tracking.
    fn is_server_error(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status_code();
        let body = ApiEnvelope::failure(self.client_message());

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
