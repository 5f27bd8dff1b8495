// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request bodies of heater commands.
//!
//! Each command serializes to the exact JSON object its endpoint expects.
//! Field order is part of the wire format observed on real devices.

use serde::Serialize;

use crate::protocol::Endpoint;
use crate::types::{OilHeaterPowerLevel, OperationMode};

/// A command posted to the heater.
pub trait Command: Serialize {
    /// The endpoint the command is posted to.
    const ENDPOINT: Endpoint;
}

/// Sets the target temperature, in the unit configured on the device.
///
/// # Examples
///
/// ```
/// use mill_local::command::SetTemperature;
///
/// let json = serde_json::to_string(&SetTemperature::normal(20.5)).unwrap();
/// assert_eq!(json, r#"{"type":"Normal","value":20.5}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetTemperature {
    #[serde(rename = "type")]
    kind: &'static str,
    value: f64,
}

impl SetTemperature {
    /// Target temperature of the normal (non-program) setpoint.
    #[must_use]
    pub const fn normal(value: f64) -> Self {
        Self {
            kind: "Normal",
            value,
        }
    }

    /// Returns the requested temperature.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl Command for SetTemperature {
    const ENDPOINT: Endpoint = Endpoint::SetTemperature;
}

/// Switches the operation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetOperationMode {
    mode: OperationMode,
}

impl SetOperationMode {
    /// Creates the command.
    #[must_use]
    pub const fn new(mode: OperationMode) -> Self {
        Self { mode }
    }
}

impl Command for SetOperationMode {
    const ENDPOINT: Endpoint = Endpoint::OperationMode;
}

/// Sets the heating power of an oil heater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetHeaterPower {
    heating_level_percentage: OilHeaterPowerLevel,
}

impl SetHeaterPower {
    /// Creates the command.
    #[must_use]
    pub const fn new(level: OilHeaterPowerLevel) -> Self {
        Self {
            heating_level_percentage: level,
        }
    }
}

impl Command for SetHeaterPower {
    const ENDPOINT: Endpoint = Endpoint::OilHeaterPower;
}
