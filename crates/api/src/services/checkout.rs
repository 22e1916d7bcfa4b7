//! Checkout service.
//!
//! Places an order inside a single transaction: insert the order
//! header, then per cart line decrement stock with a guarded update and
//! snapshot the line. Any line with insufficient stock aborts the whole
//! order; on success the user's persisted cart is cleared in the same
//! transaction.

use sqlx::PgPool;
use thiserror::Error;

use blonde_shop_core::{OrderId, PaymentMethod};

use crate::db::{RepositoryError, orders};
use crate::models::order::{CheckoutRequest, NewOrder};
use crate::models::session::CurrentUser;

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A checkout field failed validation; carries the client message.
    #[error("{0}")]
    Validation(&'static str),

    /// Stock was below the requested quantity for a product.
    #[error("insufficient stock for product: {product}")]
    InsufficientStock {
        /// Client-submitted name of the product that ran out.
        product: String,
    },

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Checkout service.
pub struct CheckoutService<'a> {
    pool: &'a PgPool,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Validate the request and place the order.
    ///
    /// Guests can check out; when a user is logged in their persisted
    /// cart is cleared as part of the transaction.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Validation` for bad input,
    /// `CheckoutError::InsufficientStock` when a line cannot be filled,
    /// `CheckoutError::Repository` if the transaction fails.
    pub async fn place_order(
        &self,
        user: Option<&CurrentUser>,
        request: &CheckoutRequest,
    ) -> Result<OrderId, CheckoutError> {
        let payment_method = validate(request)?;

        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;

        let order = NewOrder {
            user_name: request.user_name.trim(),
            contact_number: request.contact_number.trim(),
            address: request.address.trim(),
            payment_method,
            payment_info: &request.payment_info,
            total_amount: request.total_amount,
        };
        let order_id = orders::insert_order(&mut *tx, &order).await?;

        for line in &request.cart {
            let Some(product_id) = line.orderable_product() else {
                continue;
            };

            orders::insert_order_item(
                &mut *tx,
                order_id,
                product_id,
                &line.name,
                line.price,
                line.quantity,
                &line.size,
            )
            .await?;

            let decremented =
                orders::try_decrement_stock(&mut *tx, product_id, line.quantity).await?;
            if !decremented {
                tx.rollback().await.map_err(RepositoryError::from)?;
                tracing::warn!(
                    product = %line.name,
                    quantity = line.quantity,
                    "insufficient stock, order rolled back"
                );
                return Err(CheckoutError::InsufficientStock {
                    product: line.name.clone(),
                });
            }
        }

        if let Some(user) = user {
            orders::clear_user_cart(&mut *tx, user.id).await?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(order_id)
    }
}

/// Validate the checkout fields and resolve the payment method.
///
/// Checks run in a fixed order so the client always sees the first
/// failing field's message.
///
/// # Errors
///
/// Returns `CheckoutError::Validation` with the client-facing message.
fn validate(request: &CheckoutRequest) -> Result<PaymentMethod, CheckoutError> {
    if request.cart.is_empty() {
        return Err(CheckoutError::Validation("Cart is empty."));
    }
    if request.user_name.trim().is_empty() {
        return Err(CheckoutError::Validation("Name is required."));
    }
    if request.contact_number.trim().is_empty() {
        return Err(CheckoutError::Validation("Contact number is required."));
    }
    if request.address.trim().is_empty() {
        return Err(CheckoutError::Validation("Address is required."));
    }
    if request.payment_method.trim().is_empty() {
        return Err(CheckoutError::Validation("Payment method is required."));
    }

    let cleaned = sanitize_payment_method(&request.payment_method);
    cleaned
        .parse()
        .map_err(|_| CheckoutError::Validation("Invalid payment method selected."))
}

/// Strip non-printable characters from the payment method and trim it.
///
/// Clients occasionally submit the label with zero-width or control
/// characters embedded; only printable ASCII survives.
fn sanitize_payment_method(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| (' '..='~').contains(c)).collect();
    cleaned.trim().to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::order::CheckoutLine;

    fn valid_request() -> CheckoutRequest {
        CheckoutRequest {
            cart: vec![CheckoutLine {
                id: Some(blonde_shop_core::ProductId::new(1)),
                name: "Linen Shirt".to_string(),
                quantity: 1,
                size: "M".to_string(),
                ..CheckoutLine::default()
            }],
            user_name: "Ana".to_string(),
            contact_number: "0123456789".to_string(),
            address: "1 Main St".to_string(),
            payment_method: "PayPal".to_string(),
            ..CheckoutRequest::default()
        }
    }

    fn validation_message(request: &CheckoutRequest) -> &'static str {
        match validate(request).unwrap_err() {
            CheckoutError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request_resolves_payment_method() {
        assert_eq!(validate(&valid_request()).unwrap(), PaymentMethod::PayPal);
    }

    #[test]
    fn test_validation_order() {
        let mut request = CheckoutRequest::default();
        assert_eq!(validation_message(&request), "Cart is empty.");

        request.cart = valid_request().cart;
        assert_eq!(validation_message(&request), "Name is required.");

        request.user_name = "Ana".to_string();
        assert_eq!(validation_message(&request), "Contact number is required.");

        request.contact_number = "0123456789".to_string();
        assert_eq!(validation_message(&request), "Address is required.");

        request.address = "1 Main St".to_string();
        assert_eq!(validation_message(&request), "Payment method is required.");

        request.payment_method = "Bitcoin".to_string();
        assert_eq!(validation_message(&request), "Invalid payment method selected.");
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let mut request = valid_request();
        request.address = "   ".to_string();
        assert_eq!(validation_message(&request), "Address is required.");
    }

    #[test]
    fn test_payment_method_is_sanitized() {
        let mut request = valid_request();
        request.payment_method = " Cash\u{200b} on Delivery\u{0} ".to_string();
        assert_eq!(validate(&request).unwrap(), PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_sanitize_keeps_printable_ascii_only() {
        assert_eq!(sanitize_payment_method("Credit\u{a0} Card"), "Credit Card");
        assert_eq!(sanitize_payment_method("\tPayPal\n"), "PayPal");
    }
}
