//! Order persistence.
//!
//! These run inside the checkout transaction, so they operate on a
//! `PgConnection` rather than owning a pool. The caller decides when to
//! commit or roll back.

use rust_decimal::Decimal;
use sqlx::PgConnection;

use blonde_shop_core::{OrderId, ProductId, UserId};

use super::RepositoryError;
use crate::models::order::NewOrder;

/// Insert the order header and return its id.
///
/// Orders are not tied to an account; guests can check out, so the
/// contact details on the order are the only link to the buyer.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert_order(
    conn: &mut PgConnection,
    order: &NewOrder<'_>,
) -> Result<OrderId, RepositoryError> {
    // Value-to-string serialization is infallible; the cast to jsonb
    // happens in the statement.
    let payment_info = order.payment_info.to_string();

    let id = sqlx::query_scalar::<_, OrderId>(
        r"
        INSERT INTO orders
            (user_name, contact_number, address,
             payment_method, payment_info, total_amount)
        VALUES ($1, $2, $3, $4, $5::jsonb, $6)
        RETURNING id
        ",
    )
    .bind(order.user_name)
    .bind(order.contact_number)
    .bind(order.address)
    .bind(order.payment_method.as_str())
    .bind(payment_info)
    .bind(order.total_amount)
    .fetch_one(conn)
    .await?;

    Ok(id)
}

/// Insert one order line with its client-submitted name/price snapshot.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert_order_item(
    conn: &mut PgConnection,
    order_id: OrderId,
    product_id: ProductId,
    product_name: &str,
    price: Decimal,
    quantity: i32,
    size: &str,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO order_items
            (order_id, product_id, product_name, price, quantity, size)
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(order_id)
    .bind(product_id)
    .bind(product_name)
    .bind(price)
    .bind(quantity)
    .bind(size)
    .execute(conn)
    .await?;

    Ok(())
}

/// Atomically decrement stock for a product if enough is available.
///
/// Returns `false` when the product does not exist or its stock is below
/// the requested quantity; no row is changed in that case.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the update fails.
pub async fn try_decrement_stock(
    conn: &mut PgConnection,
    product_id: ProductId,
    quantity: i32,
) -> Result<bool, RepositoryError> {
    let result = sqlx::query(
        r"
        UPDATE products
        SET stock = stock - $2
        WHERE id = $1 AND stock >= $2
        ",
    )
    .bind(product_id)
    .bind(quantity)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove the user's persisted cart after a successful order.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the delete fails.
pub async fn clear_user_cart(
    conn: &mut PgConnection,
    user_id: UserId,
) -> Result<(), RepositoryError> {
    sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
        .bind(user_id)
        .execute(conn)
        .await?;

    Ok(())
}
