//! Integration tests for the storefront API.
//!
//! These tests require:
//! - A migrated `PostgreSQL` database (shop-cli migrate, shop-cli seed)
//! - The API server running (cargo run -p blonde-shop-api)
//!
//! Run with: cargo test -p blonde-shop-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("SHOP_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A client with a cookie store, so the session survives across calls.
fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

async fn call(client: &Client, action: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let url = format!("{}/api?action={action}", base_url());
    let request = match body {
        Some(body) => client.post(url).json(body),
        None => client.get(url),
    };

    let resp = request.send().await.expect("request failed");
    let status = resp.status();
    let value: Value = resp.json().await.expect("response was not JSON");
    (status, value)
}

/// A unique username for tests that create accounts.
fn fresh_username() -> String {
    let suffix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("it_user_{suffix}")
}

/// Register a new account and log its session into the client.
async fn register_and_login(client: &Client) -> String {
    let username = fresh_username();

    let (status, body) = call(
        client,
        "register",
        Some(&json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "hunter22",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");

    let (status, body) = call(
        client,
        "login",
        Some(&json!({"username": username, "password": "hunter22"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");

    username
}

/// Look up a seeded product by name via the catalog action.
async fn seeded_product(client: &Client, name: &str) -> Value {
    let (status, body) = call(client, "get_products", None).await;
    assert_eq!(status, StatusCode::OK);

    body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .find(|p| p["name"] == json!(name))
        .unwrap_or_else(|| panic!("seeded product {name} not found; run shop-cli seed"))
        .clone()
}

fn assert_envelope(value: &Value) {
    assert!(value["success"].is_boolean(), "missing success: {value}");
    assert!(value["message"].is_string(), "missing message: {value}");
    assert!(
        value.get("data").is_some(),
        "missing data field (must be present, possibly null): {value}"
    );
}

// ============================================================================
// Health & dispatch
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_health() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_unknown_action_is_rejected() {
    let (status, body) = call(&client(), "drop_tables", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body);
    assert_eq!(body["message"], "Invalid action specified.");
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_get_products_shape() {
    let (status, body) = call(&client(), "get_products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body);
    assert_eq!(body["success"], json!(true));

    let products = body["data"].as_array().expect("data should be an array");
    for product in products {
        assert!(product["id"].is_i64());
        assert!(product["price"].is_number());
        assert!(product["image"].is_string());
        assert_eq!(product["sizes"], json!(["S", "M", "L", "XL"]));
    }
}

// ============================================================================
// Auth & session flow
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_register_login_session_logout_flow() {
    let client = client();
    let username = fresh_username();

    let (status, body) = call(
        &client,
        "register",
        Some(&json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "hunter22",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registration successful.");

    // Registration does not log in
    let (_, body) = call(&client, "get_session", None).await;
    assert_eq!(body["message"], "No active session.");

    let (status, body) = call(
        &client,
        "login",
        Some(&json!({"username": username, "password": "hunter22"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful.");
    assert_eq!(body["data"]["user"]["username"], json!(username));

    let (_, body) = call(&client, "get_session", None).await;
    assert_eq!(body["message"], "Session active.");
    assert_eq!(body["data"]["user"]["username"], json!(username));

    let (_, body) = call(&client, "logout", Some(&json!({}))).await;
    assert_eq!(body["message"], "Logout successful.");

    let (_, body) = call(&client, "get_session", None).await;
    assert_eq!(body["message"], "No active session.");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_duplicate_registration_is_conflict() {
    let client = client();
    let username = fresh_username();
    let payload = json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "hunter22",
    });

    let (status, _) = call(&client, "register", Some(&payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&client, "register", Some(&payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_envelope(&body);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Username or email already exists.");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_login_with_wrong_password() {
    let (status, body) = call(
        &client(),
        "login",
        Some(&json!({"username": "nobody-here", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password.");
}

// ============================================================================
// Cart & favorites
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_guest_cart_is_empty_success() {
    let (status, body) = call(&client(), "get_cart", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], "Cart data for guest user.");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_guest_cannot_sync_cart() {
    let (status, body) = call(&client(), "sync_cart", Some(&json!({"cart": []}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User not authenticated.");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_sync_cart_is_idempotent_and_drops_unknown_names() {
    let client = client();
    register_and_login(&client).await;

    let cart = json!([
        {"name": "Linen Shirt", "size": "M", "quantity": 2},
        {"name": "No Such Product", "size": "L", "quantity": 1},
    ]);

    let (status, body) = call(&client, "sync_cart", Some(&json!({"cart": cart}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart synced successfully.");

    let (_, body) = call(&client, "get_cart", None).await;
    let first = body["data"].clone();
    let rows = first.as_array().expect("data should be an array");
    assert_eq!(rows.len(), 1, "unknown names should be dropped: {first}");
    assert_eq!(rows[0]["name"], json!("Linen Shirt"));
    assert_eq!(rows[0]["quantity"], json!(2));

    // Repeating the same sync leaves the stored cart unchanged.
    let (status, _) = call(&client, "sync_cart", Some(&json!({"cart": cart}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&client, "get_cart", None).await;
    assert_eq!(body["data"], first);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_guest_favorites_is_empty_success() {
    let (status, body) = call(&client(), "get_favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite data for guest user.");
    assert_eq!(body["data"], json!([]));
}

// ============================================================================
// Contact
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_contact_requires_all_fields() {
    let (status, body) = call(
        &client(),
        "submit_contact",
        Some(&json!({"name": "Ana", "email": "ana@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Name, email, number, and message are required fields."
    );
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_contact_rejects_bad_email() {
    let (status, body) = call(
        &client(),
        "submit_contact",
        Some(&json!({
            "name": "Ana",
            "email": "not-an-email",
            "number": "0123456789",
            "message": "hello",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email format.");
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_checkout_rejects_malformed_json() {
    let resp = client()
        .post(format!("{}/api?action=checkout", base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("response was not JSON");
    assert_eq!(body["message"], "Invalid JSON data received.");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_checkout_validation_messages() {
    let client = client();

    let (_, body) = call(&client, "checkout", Some(&json!({"cart": []}))).await;
    assert_eq!(body["message"], "Cart is empty.");

    let cart = json!([{"id": 1, "name": "Linen Shirt", "price": 29.99, "quantity": 1, "size": "M"}]);

    let (_, body) = call(&client, "checkout", Some(&json!({"cart": cart}))).await;
    assert_eq!(body["message"], "Name is required.");

    let (_, body) = call(
        &client,
        "checkout",
        Some(&json!({
            "cart": cart,
            "user_name": "Ana",
            "contact_number": "0123456789",
            "address": "1 Main St",
            "payment_method": "Bitcoin",
        })),
    )
    .await;
    assert_eq!(body["message"], "Invalid payment method selected.");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_checkout_with_excessive_quantity_fails() {
    let client = client();
    let product = seeded_product(&client, "Linen Shirt").await;

    let (status, body) = call(
        &client,
        "checkout",
        Some(&json!({
            "cart": [{
                "id": product["id"],
                "name": product["name"],
                "price": product["price"],
                "quantity": 999_999,
                "size": "M",
            }],
            "user_name": "Ana",
            "contact_number": "0123456789",
            "address": "1 Main St",
            "payment_method": "Cash on Delivery",
            "total_amount": 0,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_envelope(&body);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Insufficient stock for product: Linen Shirt");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_checkout_clears_logged_in_cart() {
    let client = client();
    register_and_login(&client).await;

    let product = seeded_product(&client, "Silk Scarf").await;
    let (status, _) = call(
        &client,
        "sync_cart",
        Some(&json!({"cart": [{"name": product["name"], "size": "S", "quantity": 1}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(
        &client,
        "checkout",
        Some(&json!({
            "cart": [{
                "id": product["id"],
                "name": product["name"],
                "price": product["price"],
                "quantity": 1,
                "size": "S",
            }],
            "user_name": "Ana",
            "contact_number": "0123456789",
            "address": "1 Main St",
            "payment_method": "PayPal",
            "total_amount": product["price"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "checkout failed: {body}");
    assert_eq!(
        body["message"],
        "Order placed successfully! Thank you for your purchase."
    );

    let (_, body) = call(&client, "get_cart", None).await;
    assert_eq!(body["message"], "Cart data loaded successfully from database.");
    assert_eq!(body["data"], json!([]));
}
