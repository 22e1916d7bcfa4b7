//! Checkout request types.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use blonde_shop_core::{PaymentMethod, ProductId};

/// The checkout submission as received from the client.
///
/// Every field is defaulted so that validation, not deserialization,
/// decides which error the caller sees.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub cart: Vec<CheckoutLine>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(default)]
    pub payment_info: Value,
}

/// One cart line in a checkout submission.
///
/// Name and price are client-submitted snapshots that are stored with the
/// order as-is; they are not re-validated against the catalog (see the
/// order-items repository for the snapshot insert).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutLine {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub size: String,
}

impl CheckoutLine {
    /// The product id to order against, if this line should be processed.
    ///
    /// Lines without a positive product id or a positive quantity are
    /// skipped silently.
    #[must_use]
    pub fn orderable_product(&self) -> Option<ProductId> {
        self.id
            .filter(|id| id.as_i32() > 0 && self.quantity > 0)
    }
}

/// The validated order header inserted inside the checkout transaction.
#[derive(Debug, Clone)]
pub struct NewOrder<'a> {
    pub user_name: &'a str,
    pub contact_number: &'a str,
    pub address: &'a str,
    pub payment_method: PaymentMethod,
    pub payment_info: &'a Value,
    pub total_amount: Decimal,
}
