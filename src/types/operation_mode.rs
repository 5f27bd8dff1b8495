// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater operation modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Control strategy of a heater.
///
/// # Examples
///
/// ```
/// use mill_local::types::OperationMode;
///
/// assert_eq!(OperationMode::Off.as_str(), "Off");
/// assert_eq!(
///     "Weekly program".parse::<OperationMode>(),
///     Ok(OperationMode::WeeklyProgram)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationMode {
    /// Manual control with a fixed target temperature.
    #[serde(rename = "Control individually")]
    ControlIndividually,
    /// Heater switched off.
    #[serde(rename = "Off")]
    Off,
    /// Follows the weekly program stored on the device.
    #[serde(rename = "Weekly program")]
    WeeklyProgram,
    /// Runs on the device's own timers, detached from any program.
    #[serde(rename = "Independent device")]
    IndependentDevice,
}

impl OperationMode {
    /// Every operation mode, in wire order.
    pub const ALL: [Self; 4] = [
        Self::ControlIndividually,
        Self::Off,
        Self::WeeklyProgram,
        Self::IndependentDevice,
    ];

    /// Returns the string the device API uses for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ControlIndividually => "Control individually",
            Self::Off => "Off",
            Self::WeeklyProgram => "Weekly program",
            Self::IndependentDevice => "Independent device",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known operation mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation mode: {0}")]
pub struct UnknownOperationMode(pub String);

impl FromStr for OperationMode {
    type Err = UnknownOperationMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownOperationMode(s.to_string()))
    }
}
