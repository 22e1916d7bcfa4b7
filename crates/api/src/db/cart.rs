//! Cart repository.
//!
//! The client owns cart state; a sync replaces the user's stored cart
//! wholesale inside a transaction. Items are matched to products by
//! name; unknown names insert zero rows, and when several products
//! share a name the lowest id wins.

use sqlx::PgPool;

use blonde_shop_core::UserId;

use super::RepositoryError;
use crate::models::cart::{CartItemRow, ClientCartItem};

/// Repository for persisted cart state.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Replace the user's stored cart with the given items.
    ///
    /// Deletes all existing rows for the user, then inserts one row per
    /// valid item whose name matches a product. Runs in a transaction so
    /// a failed insert leaves the previous cart intact.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn replace_for_user(
        &self,
        user_id: UserId,
        items: &[ClientCartItem],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for item in items.iter().filter(|item| item.is_valid()) {
            sqlx::query(
                r"
                INSERT INTO cart_items (user_id, product_id, size, quantity)
                SELECT $1, p.id, $3, $4
                FROM products p
                WHERE p.name = $2
                ORDER BY p.id ASC
                LIMIT 1
                ON CONFLICT (user_id, product_id, size) DO NOTHING
                ",
            )
            .bind(user_id)
            .bind(&item.name)
            .bind(&item.size)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Load the user's stored cart joined with current product data.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CartItemRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r"
            SELECT p.id AS product_id, p.name, p.price, p.image_url,
                   c.size, c.quantity
            FROM cart_items c
            JOIN products p ON p.id = c.product_id
            WHERE c.user_id = $1
            ORDER BY c.id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
