// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Payload of `GET /status`.

use serde_json::Value;

use crate::protocol::Fields;

/// Last status reported by a heater.
///
/// The payload is kept whole. Only `version`, `name` and `mac_address` are
/// interpreted; every other field is reachable through [`get`](Self::get).
///
/// # Examples
///
/// ```
/// use mill_local::StatusSnapshot;
///
/// let fields = serde_json::json!({"status": "ok", "name": "Mill panel"});
/// let snapshot = StatusSnapshot::from(fields.as_object().unwrap().clone());
///
/// assert_eq!(snapshot.name(), "Mill panel");
/// assert_eq!(snapshot.version(), "");
/// assert_eq!(snapshot.mac_address(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusSnapshot {
    fields: Fields,
}

impl StatusSnapshot {
    /// Firmware version, empty when not reported.
    #[must_use]
    pub fn version(&self) -> &str {
        self.str_field("version").unwrap_or_default()
    }

    /// Device name, empty when not reported.
    #[must_use]
    pub fn name(&self) -> &str {
        self.str_field("name").unwrap_or_default()
    }

    /// MAC address, if reported.
    #[must_use]
    pub fn mac_address(&self) -> Option<&str> {
        self.str_field("mac_address")
    }

    /// Returns a raw field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields, `status` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the payload has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns all fields.
    #[must_use]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes the snapshot and returns its fields.
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl From<Fields> for StatusSnapshot {
    fn from(fields: Fields) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: Value) -> StatusSnapshot {
        StatusSnapshot::from(value.as_object().cloned().unwrap())
    }

    #[test]
    fn derived_fields() {
        let status = snapshot(json!({
            "status": "ok",
            "name": "Mill panel",
            "version": "0x221017",
            "mac_address": "13:37:A6:5E:D3:CB"
        }));
        assert_eq!(status.name(), "Mill panel");
        assert_eq!(status.version(), "0x221017");
        assert_eq!(status.mac_address(), Some("13:37:A6:5E:D3:CB"));
        assert_eq!(status.len(), 4);
    }

    #[test]
    fn empty_snapshot_defaults() {
        let status = StatusSnapshot::default();
        assert!(status.is_empty());
        assert_eq!(status.name(), "");
        assert_eq!(status.version(), "");
        assert_eq!(status.mac_address(), None);
    }

    #[test]
    fn non_string_values_are_ignored() {
        let status = snapshot(json!({"name": 42, "mac_address": null}));
        assert_eq!(status.name(), "");
        assert_eq!(status.mac_address(), None);
        assert_eq!(status.get("name"), Some(&json!(42)));
    }
}
