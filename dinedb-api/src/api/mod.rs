//! HTTP API handlers for dinedb-api

pub mod dishes;
pub mod error;
pub mod health;
pub mod restaurants;

pub use dishes::dish_routes;
pub use error::{ApiError, ApiResult};
pub use health::health_routes;
pub use restaurants::restaurant_routes;

use axum::Json;
use serde_json::{Map, Value};

/// Wrap rows as `{ <key>: [...] }`, or a not-found error when there are none
///
/// The message is only built on the empty path.
pub(crate) fn envelope(
    key: &'static str,
    rows: Vec<Value>,
    not_found: impl FnOnce() -> String,
) -> ApiResult {
    if rows.is_empty() {
        return Err(ApiError::NotFound(not_found()));
    }

    let mut body = Map::with_capacity(1);
    body.insert(key.to_string(), Value::Array(rows));
    Ok(Json(Value::Object(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_wraps_rows_under_key() {
        let Json(body) = envelope("dishes", vec![json!({"id": 1})], String::new).unwrap();
        assert_eq!(body, json!({"dishes": [{"id": 1}]}));
    }

    #[test]
    fn test_envelope_empty_is_not_found() {
        let result = envelope("restaurants", Vec::new(), || "No restaurants found.".to_string());
        assert!(matches!(result, Err(ApiError::NotFound(msg)) if msg == "No restaurants found."));
    }
}
