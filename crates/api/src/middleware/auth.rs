//! Session helpers for the logged-in user.
//!
//! The dispatcher resolves the current user once per request with
//! [`current_user`] and passes it into the services explicitly.

use tower_sessions::Session;

use crate::models::session::{CurrentUser, keys};

/// Get the current user from the session, if logged in.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn current_user(
    session: &Session,
) -> Result<Option<CurrentUser>, tower_sessions::session::Error> {
    session.get(keys::CURRENT_USER).await
}

/// Store the current user in the session after login or registration.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CURRENT_USER, user).await
}

/// Clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<CurrentUser>(keys::CURRENT_USER).await?;
    session.flush().await?;
    Ok(())
}
