//! Cart and favorites types.
//!
//! Client payloads reference products by name; the sync services drop
//! unmatched names silently, so these types carry no product ids on the
//! way in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use blonde_shop_core::ProductId;

/// The size label attached to every favorite entry.
pub const FAVORITE_SIZE: &str = "One Size";

/// A cart line as submitted by the client during a sync.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientCartItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

impl ClientCartItem {
    /// Whether this line is eligible for persistence.
    ///
    /// A valid line still gets dropped if its name matches no product.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.size.is_empty() && self.quantity >= 1
    }
}

/// A favorite as submitted by the client during a sync.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientFavoriteItem {
    #[serde(default)]
    pub name: String,
}

/// A stored cart row joined with live product data.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CartItemRow {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub size: String,
    pub quantity: i32,
}

/// A cart entry as returned to the client.
///
/// Price and image are the product's current values, not snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub size: String,
    pub quantity: i32,
}

impl From<CartItemRow> for CartEntry {
    fn from(row: CartItemRow) -> Self {
        Self {
            id: row.product_id,
            name: row.name,
            price: row.price,
            image: row.image_url.unwrap_or_default(),
            size: row.size,
            quantity: row.quantity,
        }
    }
}

/// A stored favorite row joined with live product data.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FavoriteItemRow {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// A favorite entry as returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteEntry {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub size: &'static str,
}

impl From<FavoriteItemRow> for FavoriteEntry {
    fn from(row: FavoriteItemRow) -> Self {
        Self {
            id: row.product_id,
            name: row.name,
            price: row.price,
            image: row.image_url.unwrap_or_default(),
            size: FAVORITE_SIZE,
        }
    }
}
