//! Catalog service.

use sqlx::PgPool;

use crate::db::{ProductRepository, RepositoryError};
use crate::models::product::Product;

/// Read-only catalog access.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// List every product, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.products.list_all().await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }
}
