// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of the JSON envelope wrapped around every device response.
//!
//! The heater answers every request with a JSON object whose `status` field
//! is `"ok"` on success. On failure the same field carries a human readable
//! message, and the HTTP status may or may not reflect the failure. Some
//! firmware versions send no body at all on errors.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// JSON object fields of a device response.
pub type Fields = Map<String, Value>;

/// The value of `status` that marks a successful response.
pub const STATUS_OK: &str = "ok";

const STATUS_KEY: &str = "status";

/// A decoded response body.
///
/// Fields are kept as received, without schema validation, so payloads from
/// newer firmware pass through untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Envelope {
    fields: Fields,
}

impl Envelope {
    /// Parses a raw response body.
    ///
    /// Bodies that are empty, not JSON, or not a JSON object yield the
    /// sentinel envelope `{"status": ""}`.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => Self { fields },
            Ok(_) | Err(_) => {
                tracing::debug!(body = %body, "Response body is not a JSON object");
                Self::sentinel()
            }
        }
    }

    /// Returns the envelope substituted for unusable bodies.
    #[must_use]
    pub fn sentinel() -> Self {
        let mut fields = Fields::new();
        fields.insert(STATUS_KEY.to_string(), Value::String(String::new()));
        Self { fields }
    }

    /// Returns the `status` reported by the device.
    ///
    /// Non-string values are rendered as JSON text; a missing field is empty.
    #[must_use]
    pub fn device_status(&self) -> String {
        match self.fields.get(STATUS_KEY) {
            Some(Value::String(status)) => status.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// Returns `true` if the body signals success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self.fields.get(STATUS_KEY), Some(Value::String(s)) if s == STATUS_OK)
    }

    /// Returns the response fields, `status` included.
    #[must_use]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes the envelope and returns its fields.
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl From<Fields> for Envelope {
    fn from(fields: Fields) -> Self {
        Self { fields }
    }
}

/// Applies the success check to a response.
///
/// A response succeeds only when the HTTP status is 2xx and the body's
/// `status` is `"ok"`.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the HTTP status, its reason phrase and
/// the device-reported status text for every other combination.
pub fn decode(status: StatusCode, envelope: Envelope) -> Result<Envelope, ApiError> {
    if status.is_success() && envelope.is_ok() {
        return Ok(envelope);
    }

    Err(ApiError {
        status: status.as_u16(),
        reason: status.canonical_reason().map(str::to_string),
        device_status: envelope.device_status(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        match value {
            Value::Object(fields) => Envelope::from(fields),
            _ => panic!("test envelope must be an object"),
        }
    }

    #[test]
    fn parse_object() {
        let env = Envelope::parse(r#"{"status":"ok","name":"Mill panel"}"#);
        assert!(env.is_ok());
        assert_eq!(env.fields().len(), 2);
        assert_eq!(env.fields()["name"], "Mill panel");
    }

    #[test]
    fn parse_empty_body_gives_sentinel() {
        assert_eq!(Envelope::parse(""), Envelope::sentinel());
        assert_eq!(Envelope::parse("   "), Envelope::sentinel());
    }

    #[test]
    fn parse_garbage_gives_sentinel() {
        assert_eq!(Envelope::parse("<html>oops</html>"), Envelope::sentinel());
        assert_eq!(Envelope::parse("[1, 2]"), Envelope::sentinel());
        assert_eq!(Envelope::parse("\"ok\""), Envelope::sentinel());
    }

    #[test]
    fn sentinel_is_not_ok() {
        let env = Envelope::sentinel();
        assert!(!env.is_ok());
        assert_eq!(env.device_status(), "");
    }

    #[test]
    fn decode_success_passes_fields_through() {
        let env = envelope(json!({"status": "ok", "value": 60, "extra": {"a": 1}}));
        let decoded = decode(StatusCode::OK, env.clone()).unwrap();
        assert_eq!(decoded, env);
    }

    #[test]
    fn decode_http_error_with_body() {
        let env = envelope(json!({"status": "Failed to parse message body"}));
        let err = decode(StatusCode::BAD_REQUEST, env).unwrap_err();
        assert_eq!(err.status, 400);
        assert_eq!(err.reason.as_deref(), Some("Bad Request"));
        assert_eq!(err.device_status, "Failed to parse message body");
    }

    #[test]
    fn decode_http_error_without_body() {
        let err = decode(StatusCode::INTERNAL_SERVER_ERROR, Envelope::parse("")).unwrap_err();
        assert_eq!(err.status, 500);
        assert_eq!(err.device_status, "");
    }

    #[test]
    fn decode_http_error_with_ok_body_still_fails() {
        let env = envelope(json!({"status": "ok"}));
        let err = decode(StatusCode::SERVICE_UNAVAILABLE, env).unwrap_err();
        assert_eq!(err.status, 503);
        assert_eq!(err.device_status, "ok");
    }

    #[test]
    fn decode_body_failure_on_http_success() {
        let env = envelope(json!({"status": "Heater is locked"}));
        let err = decode(StatusCode::OK, env).unwrap_err();
        assert_eq!(err.status, 200);
        assert_eq!(err.device_status, "Heater is locked");
    }

    #[test]
    fn decode_missing_status_field() {
        let env = envelope(json!({"name": "Mill panel"}));
        let err = decode(StatusCode::OK, env).unwrap_err();
        assert_eq!(err.device_status, "");
    }

    #[test]
    fn decode_non_string_status_field() {
        let env = envelope(json!({"status": 1}));
        let err = decode(StatusCode::OK, env).unwrap_err();
        assert_eq!(err.device_status, "1");
    }

    #[test]
    fn status_ok_is_case_sensitive() {
        let env = envelope(json!({"status": "OK"}));
        assert!(decode(StatusCode::OK, env).is_err());
    }
}
