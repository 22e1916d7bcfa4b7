//! Product types.

use rust_decimal::Decimal;
use serde::Serialize;

use blonde_shop_core::ProductId;

/// The fixed size options attached to every product.
///
/// Per-product size availability is not modelled.
pub const SIZE_OPTIONS: [&str; 4] = ["S", "M", "L", "XL"];

/// A product row as stored in the catalog.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: String,
    pub stock: i32,
}

/// A catalog product as returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub sizes: &'static [&'static str],
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            image: row.image_url.unwrap_or_default(),
            category: row.category,
            sizes: &SIZE_OPTIONS,
        }
    }
}
