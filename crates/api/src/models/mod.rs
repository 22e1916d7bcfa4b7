//! Data types for the API: database rows, client payloads, response DTOs,
//! and session state.

pub mod cart;
pub mod envelope;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use envelope::ApiEnvelope;
pub use session::CurrentUser;
