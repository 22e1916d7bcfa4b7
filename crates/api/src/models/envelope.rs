//! The uniform response envelope.
//!
//! Every action responds with the same schema: `{success, message, data}`.
//! `data` is `null` when an action has nothing to return; handlers never
//! nest a second ad-hoc wrapper inside it.

use serde::Serialize;
use serde_json::Value;

/// Uniform JSON response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEnvelope<T = Value> {
    /// Whether the action succeeded.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Action-specific payload, `null` when there is none.
    pub data: T,
}

impl ApiEnvelope<Value> {
    /// A successful response with no payload.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Value::Null,
        }
    }

    /// A failed response. Used for both handled errors and non-error
    /// negative results such as "no active session".
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Value::Null,
        }
    }
}

impl<T: Serialize> ApiEnvelope<T> {
    /// A successful response carrying a payload.
    #[must_use]
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_shape() {
        let envelope = ApiEnvelope::ok("Logout successful.");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "message": "Logout successful.", "data": null})
        );
    }

    #[test]
    fn test_failure_shape() {
        let envelope = ApiEnvelope::failure("No active session.");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "message": "No active session.", "data": null})
        );
    }

    #[test]
    fn test_with_data_shape() {
        let envelope = ApiEnvelope::with_data("Session active.", json!({"user": {"id": 3}}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"]["user"]["id"], json!(3));
    }
}
