// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heating power levels of the oil heater.

use std::fmt;

use serde::{Serialize, Serializer};

/// Heating power of a Mill oil heater, as a percentage of full power.
///
/// # Examples
///
/// ```
/// use mill_local::types::OilHeaterPowerLevel;
///
/// assert_eq!(OilHeaterPowerLevel::High.percentage(), 100);
/// assert_eq!(
///     OilHeaterPowerLevel::from_percentage(40),
///     Some(OilHeaterPowerLevel::Low)
/// );
/// assert_eq!(OilHeaterPowerLevel::from_percentage(50), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum OilHeaterPowerLevel {
    /// Heating element off.
    Off = 0,
    /// 40 % power.
    Low = 40,
    /// 60 % power.
    Medium = 60,
    /// Full power.
    High = 100,
}

impl OilHeaterPowerLevel {
    /// Every power level, lowest first.
    pub const ALL: [Self; 4] = [Self::Off, Self::Low, Self::Medium, Self::High];

    /// Returns the value sent as `heating_level_percentage`.
    #[must_use]
    pub const fn percentage(&self) -> u8 {
        *self as u8
    }

    /// Maps a percentage reported by the device back to a level.
    #[must_use]
    pub fn from_percentage(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.percentage() == value)
    }
}

impl fmt::Display for OilHeaterPowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

impl Serialize for OilHeaterPowerLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.percentage())
    }
}
