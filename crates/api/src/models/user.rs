//! User types.

use serde::Serialize;

use blonde_shop_core::UserId;

/// A user row joined with its password hash, used during login.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserAuthRow {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// The public view of a user, safe to return to the client.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<UserAuthRow> for PublicUser {
    fn from(row: UserAuthRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
        }
    }
}
