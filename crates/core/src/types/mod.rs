//! Core types for the Blonde Shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod payment;

pub use email::{Email, EmailError};
pub use id::*;
pub use payment::PaymentMethod;
