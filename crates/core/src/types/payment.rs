//! Payment method enumeration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of payment methods an order may carry.
///
/// Parsing is case-sensitive and matches the exact labels the storefront
/// presents at checkout. Anything else is rejected before an order
/// transaction begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    /// Card details collected client-side and stored opaquely.
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// PayPal account reference stored opaquely.
    #[serde(rename = "PayPal")]
    PayPal,
}

impl PaymentMethod {
    /// The label stored with the order and shown to the customer.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a payment method label is not in the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid payment method")]
pub struct InvalidPaymentMethod;

impl std::str::FromStr for PaymentMethod {
    type Err = InvalidPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash on Delivery" => Ok(Self::CashOnDelivery),
            "Credit Card" => Ok(Self::CreditCard),
            "PayPal" => Ok(Self::PayPal),
            _ => Err(InvalidPaymentMethod),
        }
    }
}
