//! Cart and favorites sync service.
//!
//! The client keeps cart and favorites state locally and pushes the
//! whole list on every change; the server stores it verbatim for
//! logged-in users. Guests can read (and get an empty list) but never
//! write.

use sqlx::PgPool;
use thiserror::Error;

use crate::db::{CartRepository, FavoritesRepository, RepositoryError};
use crate::models::cart::{CartEntry, ClientCartItem, ClientFavoriteItem, FavoriteEntry};
use crate::models::session::CurrentUser;

/// Errors that can occur during sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A write was attempted without a logged-in user.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Sync service over the cart and favorites repositories.
pub struct SyncService<'a> {
    cart: CartRepository<'a>,
    favorites: FavoritesRepository<'a>,
}

impl<'a> SyncService<'a> {
    /// Create a new sync service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            cart: CartRepository::new(pool),
            favorites: FavoritesRepository::new(pool),
        }
    }

    /// Replace the user's stored cart.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::NotAuthenticated` if no user is logged in.
    pub async fn sync_cart(
        &self,
        user: Option<&CurrentUser>,
        items: &[ClientCartItem],
    ) -> Result<(), SyncError> {
        let user = user.ok_or(SyncError::NotAuthenticated)?;
        self.cart.replace_for_user(user.id, items).await?;
        Ok(())
    }

    /// Load the stored cart; guests get an empty list.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Repository` if the query fails.
    pub async fn get_cart(&self, user: Option<&CurrentUser>) -> Result<Vec<CartEntry>, SyncError> {
        let Some(user) = user else {
            return Ok(Vec::new());
        };

        let rows = self.cart.items_for_user(user.id).await?;
        Ok(rows.into_iter().map(CartEntry::from).collect())
    }

    /// Replace the user's stored favorites.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::NotAuthenticated` if no user is logged in.
    pub async fn sync_favorites(
        &self,
        user: Option<&CurrentUser>,
        items: &[ClientFavoriteItem],
    ) -> Result<(), SyncError> {
        let user = user.ok_or(SyncError::NotAuthenticated)?;
        self.favorites.replace_for_user(user.id, items).await?;
        Ok(())
    }

    /// Load the stored favorites; guests get an empty list.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Repository` if the query fails.
    pub async fn get_favorites(
        &self,
        user: Option<&CurrentUser>,
    ) -> Result<Vec<FavoriteEntry>, SyncError> {
        let Some(user) = user else {
            return Ok(Vec::new());
        };

        let rows = self.favorites.items_for_user(user.id).await?;
        Ok(rows.into_iter().map(FavoriteEntry::from).collect())
    }
}
