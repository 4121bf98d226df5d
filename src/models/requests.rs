//! Request DTOs for the cache admin API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{TtlPreset, MAX_KEY_LENGTH};

/// Request body for storing an entry (PUT /cache/entries)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any JSON document
/// - `ttl_ms`: Optional TTL in milliseconds
/// - `preset`: Optional named TTL, mutually exclusive with `ttl_ms`
#[derive(Debug, Clone, Deserialize)]
pub struct SetEntryRequest {
    pub key: String,
    pub value: Value,
    #[serde(default)]
    pub ttl_ms: Option<u64>,
    #[serde(default)]
    pub preset: Option<TtlPreset>,
}

impl SetEntryRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(error) = validate_key(&self.key) {
            return Some(error);
        }
        if self.ttl_ms.is_some() && self.preset.is_some() {
            return Some("Specify either ttl_ms or preset, not both".to_string());
        }
        None
    }

    /// Resolves the TTL to apply, falling back to `default`.
    pub fn ttl(&self, default: Duration) -> Duration {
        match (self.ttl_ms, self.preset) {
            (Some(ms), _) => Duration::from_millis(ms),
            (None, Some(preset)) => preset.duration(),
            (None, None) => default,
        }
    }
}

/// Request body for pattern invalidation (POST /cache/invalidate)
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidateRequest {
    /// Substring matched anywhere in a key
    pub pattern: String,
}

impl InvalidateRequest {
    /// An empty pattern would match every key; clearing goes through
    /// `DELETE /cache` instead.
    pub fn validate(&self) -> Option<String> {
        if self.pattern.is_empty() {
            return Some("Pattern cannot be empty".to_string());
        }
        None
    }
}

/// Checks a cache key supplied by a client.
fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} characters",
            MAX_KEY_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "projects:all", "value": [{"id": 1}]}"#;
        let req: SetEntryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "projects:all");
        assert!(req.value.is_array());
        assert!(req.ttl_ms.is_none());
        assert!(req.preset.is_none());
    }

    #[test]
    fn test_set_request_ttl_resolution() {
        let default = Duration::from_secs(60);

        let req: SetEntryRequest =
            serde_json::from_str(r#"{"key": "k", "value": 1, "ttl_ms": 1500}"#).unwrap();
        assert_eq!(req.ttl(default), Duration::from_millis(1500));

        let req: SetEntryRequest =
            serde_json::from_str(r#"{"key": "k", "value": 1, "preset": "hour"}"#).unwrap();
        assert_eq!(req.ttl(default), Duration::from_secs(3600));

        let req: SetEntryRequest = serde_json::from_str(r#"{"key": "k", "value": 1}"#).unwrap();
        assert_eq!(req.ttl(default), default);
    }

    #[test]
    fn test_validate_empty_key() {
        let req: SetEntryRequest = serde_json::from_str(r#"{"key": "", "value": 1}"#).unwrap();
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_long_key() {
        assert!(validate_key(&"x".repeat(MAX_KEY_LENGTH + 1)).is_some());
        assert!(validate_key(&"x".repeat(MAX_KEY_LENGTH)).is_none());
    }

    #[test]
    fn test_validate_conflicting_ttl() {
        let req: SetEntryRequest = serde_json::from_str(
            r#"{"key": "k", "value": 1, "ttl_ms": 10, "preset": "short"}"#,
        )
        .unwrap();
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_invalidate_request_validation() {
        let empty = InvalidateRequest {
            pattern: String::new(),
        };
        let valid = InvalidateRequest {
            pattern: "projects:".to_string(),
        };
        assert!(empty.validate().is_some());
        assert!(valid.validate().is_none());
    }
}
