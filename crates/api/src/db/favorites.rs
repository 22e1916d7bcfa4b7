//! Favorites repository.
//!
//! Same full-replace model as the cart, without sizes or quantities.

use sqlx::PgPool;

use blonde_shop_core::UserId;

use super::RepositoryError;
use crate::models::cart::{ClientFavoriteItem, FavoriteItemRow};

/// Repository for persisted favorites.
pub struct FavoritesRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoritesRepository<'a> {
    /// Create a new favorites repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Replace the user's stored favorites with the given items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn replace_for_user(
        &self,
        user_id: UserId,
        items: &[ClientFavoriteItem],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM favorite_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for item in items.iter().filter(|item| !item.name.is_empty()) {
            sqlx::query(
                r"
                INSERT INTO favorite_items (user_id, product_id)
                SELECT $1, p.id
                FROM products p
                WHERE p.name = $2
                ORDER BY p.id ASC
                LIMIT 1
                ON CONFLICT (user_id, product_id) DO NOTHING
                ",
            )
            .bind(user_id)
            .bind(&item.name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Load the user's stored favorites joined with current product data.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FavoriteItemRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, FavoriteItemRow>(
            r"
            SELECT p.id AS product_id, p.name, p.price, p.image_url
            FROM favorite_items f
            JOIN products p ON p.id = f.product_id
            WHERE f.user_id = $1
            ORDER BY f.id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
