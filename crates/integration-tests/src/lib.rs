//! Integration tests for Blonde Shop.
//!
//! The tests in `tests/` exercise the API over HTTP and are `#[ignore]`d
//! by default; they need a migrated database and a running server.
//!
//! # Running Tests
//!
//! ```bash
//! # Migrate and seed the database
//! cargo run -p blonde-shop-cli -- migrate
//! cargo run -p blonde-shop-cli -- seed
//!
//! # Start the server
//! cargo run -p blonde-shop-api
//!
//! # Run the tests
//! cargo test -p blonde-shop-integration-tests -- --ignored
//! ```
//!
//! The target server is selected with `SHOP_BASE_URL`
//! (default `http://localhost:3000`).
