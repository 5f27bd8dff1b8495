// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request/response plumbing for the heater local API.
//!
//! - [`HttpTransport`]: performs one GET or POST against a heater
//! - [`envelope`]: interprets the JSON body and the HTTP status together
//!
//! The API has one fixed base URL per heater and the closed set of
//! endpoints listed in [`Endpoint`].

pub mod envelope;
mod http;

use std::fmt;

pub use envelope::{Envelope, Fields};
pub use http::{HttpConfig, HttpTransport};

/// HTTP methods used by the heater API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Send a command.
    Post,
}

impl Method {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoints exposed by the heater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /status`: identity and firmware information.
    Status,
    /// `GET /control-status`: heater and sensor telemetry.
    ControlStatus,
    /// `POST /set-temperature`: target temperature.
    SetTemperature,
    /// `POST /operation-mode`: control strategy.
    OperationMode,
    /// `GET`/`POST /oil-heater-power`: oil heater power level.
    OilHeaterPower,
}

impl Endpoint {
    /// Returns the path relative to the device base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::ControlStatus => "control-status",
            Self::SetTemperature => "set-temperature",
            Self::OperationMode => "operation-mode",
            Self::OilHeaterPower => "oil-heater-power",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn endpoint_display_matches_path() {
        assert_eq!(Endpoint::ControlStatus.to_string(), "control-status");
        assert_eq!(Endpoint::OilHeaterPower.path(), "oil-heater-power");
    }
}
