// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mill oil heater.

use std::ops::Deref;
use std::time::Duration;

use reqwest::Client;

use crate::command::SetHeaterPower;
use crate::device::Mill;
use crate::error::Result;
use crate::protocol::{Endpoint, HttpConfig};
use crate::response::HeaterPowerData;
use crate::types::OilHeaterPowerLevel;

/// A Mill oil heater.
///
/// Supports everything [`Mill`] does, plus control of the heating power.
///
/// # Examples
///
/// ```no_run
/// use mill_local::{MillOilHeater, OilHeaterPowerLevel};
///
/// # async fn example() -> mill_local::Result<()> {
/// let heater = MillOilHeater::new("192.168.2.124", reqwest::Client::new())?;
///
/// heater.set_heater_power(OilHeaterPowerLevel::Medium).await?;
/// let power = heater.fetch_heater_power_data().await?;
/// println!("heating at {:?}", power.get("value"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MillOilHeater {
    mill: Mill,
}

impl MillOilHeater {
    /// Creates a client with the default 15 second timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if the address is empty once
    /// normalized.
    pub fn new(address: impl AsRef<str>, client: Client) -> Result<Self> {
        Mill::new(address, client).map(Self::from)
    }

    /// Creates a client from an explicit configuration.
    #[must_use]
    pub fn from_config(config: HttpConfig, client: Client) -> Self {
        Self::from(Mill::from_config(config, client))
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self::from(self.mill.with_timeout(timeout))
    }

    /// Sets the heating power.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn set_heater_power(&self, level: OilHeaterPowerLevel) -> Result<()> {
        self.mill.send(&SetHeaterPower::new(level)).await
    }

    /// Fetches the current heating power from `/oil-heater-power`.
    ///
    /// The payload is not cached.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn fetch_heater_power_data(&self) -> Result<HeaterPowerData> {
        self.mill.fetch(Endpoint::OilHeaterPower).await
    }

    /// Returns the underlying heater client.
    #[must_use]
    pub fn into_inner(self) -> Mill {
        self.mill
    }
}

impl From<Mill> for MillOilHeater {
    fn from(mill: Mill) -> Self {
        Self { mill }
    }
}

impl Deref for MillOilHeater {
    type Target = Mill;

    fn deref(&self) -> &Mill {
        &self.mill
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_base_client() {
        let heater = MillOilHeater::new("192.168.2.124", Client::new()).unwrap();
        assert_eq!(heater.base_url(), "http://192.168.2.124");
        assert_eq!(heater.timeout(), Duration::from_secs(15));
        assert_eq!(heater.name(), "");
        assert!(!heater.is_connected());
    }

    #[test]
    fn with_timeout() {
        let heater = MillOilHeater::new("192.168.2.124", Client::new())
            .unwrap()
            .with_timeout(Duration::from_secs(2));
        assert_eq!(heater.timeout(), Duration::from_secs(2));
        assert_eq!(heater.into_inner().timeout(), Duration::from_secs(2));
    }
}
