//! Catalog seeding command.
//!
//! Inserts a small sample catalog for local development. Re-running is
//! safe; existing product names are left untouched.

use rust_decimal::Decimal;

use super::{CommandError, connect};

/// (name, price in cents, image, category, stock)
const SAMPLE_PRODUCTS: &[(&str, i64, &str, &str, i32)] = &[
    ("Linen Shirt", 2999, "img/linen-shirt.jpg", "tops", 25),
    ("Denim Jacket", 7950, "img/denim-jacket.jpg", "outerwear", 10),
    ("Pleated Skirt", 4500, "img/pleated-skirt.jpg", "bottoms", 18),
    ("Silk Scarf", 1550, "img/silk-scarf.jpg", "accessories", 40),
    ("Wool Cardigan", 6200, "img/wool-cardigan.jpg", "tops", 12),
    ("Slim Chinos", 3899, "img/slim-chinos.jpg", "bottoms", 22),
];

/// Seed the catalog with sample products.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or an insert
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    let mut inserted = 0_u64;
    for &(name, price_cents, image_url, category, stock) in SAMPLE_PRODUCTS {
        let result = sqlx::query(
            r"
            INSERT INTO products (name, price, image_url, category, stock)
            SELECT $1, $2, $3, $4, $5
            WHERE NOT EXISTS (SELECT 1 FROM products WHERE name = $1)
            ",
        )
        .bind(name)
        .bind(Decimal::new(price_cents, 2))
        .bind(image_url)
        .bind(category)
        .bind(stock)
        .execute(&pool)
        .await?;

        inserted += result.rows_affected();
    }

    tracing::info!(inserted, total = SAMPLE_PRODUCTS.len(), "Catalog seeded");
    Ok(())
}
