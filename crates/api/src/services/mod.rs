//! Business logic services.
//!
//! Services validate input, call into the repositories, and translate
//! repository failures into their own error types. They never touch the
//! session; the caller passes the current user in explicitly.

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod sync;

pub use auth::{AuthError, AuthService};
pub use catalog::CatalogService;
pub use checkout::{CheckoutError, CheckoutService};
pub use contact::{ContactError, ContactService};
pub use sync::{SyncError, SyncService};
