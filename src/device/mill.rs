// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client for one Mill heater.

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::Client;

use crate::command::{Command, SetOperationMode, SetTemperature};
use crate::error::Result;
use crate::protocol::{Endpoint, Fields, HttpConfig, HttpTransport};
use crate::response::{ControlStatus, StatusSnapshot};
use crate::types::{DeviceAddress, OperationMode};

/// A Mill heater reachable through its local HTTP API.
///
/// The client caches the last successful `/status` response. Until the
/// first successful [`get_status`](Self::get_status) the derived attributes
/// return their defaults. A failed refresh leaves the cached status intact.
///
/// The [`Client`] is supplied by the caller and may be shared between many
/// heaters. No request is retried; retry policy belongs to the caller.
///
/// # Examples
///
/// ```no_run
/// use mill_local::{Mill, OperationMode};
///
/// # async fn example() -> mill_local::Result<()> {
/// let mill = Mill::new("192.168.2.123", reqwest::Client::new())?;
///
/// let status = mill.connect().await?;
/// println!("{} runs firmware {}", status.name(), status.version());
///
/// mill.set_operation_mode(OperationMode::ControlIndividually).await?;
/// mill.set_target_temperature(21.5).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Mill {
    address: DeviceAddress,
    transport: HttpTransport,
    status: RwLock<Option<StatusSnapshot>>,
}

impl Mill {
    /// Creates a client with the default 15 second timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if the address is empty once
    /// normalized.
    pub fn new(address: impl AsRef<str>, client: Client) -> Result<Self> {
        let address = DeviceAddress::new(address)?;
        Ok(Self::from_config(HttpConfig::new(address), client))
    }

    /// Creates a client from an explicit configuration.
    #[must_use]
    pub fn from_config(config: HttpConfig, client: Client) -> Self {
        let address = config.address().clone();
        Self {
            address,
            transport: config.into_transport(client),
            status: RwLock::new(None),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let client = self.transport.client().clone();
        self.transport = HttpConfig::new(self.address.clone())
            .with_timeout(timeout)
            .into_transport(client);
        self
    }

    /// Returns the normalized device address.
    #[must_use]
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    /// Returns the base URL of the device API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.transport.timeout()
    }

    /// Firmware version from the cached status, empty if never fetched.
    #[must_use]
    pub fn version(&self) -> String {
        self.status
            .read()
            .as_ref()
            .map(|s| s.version().to_string())
            .unwrap_or_default()
    }

    /// Device name from the cached status, empty if never fetched.
    #[must_use]
    pub fn name(&self) -> String {
        self.status
            .read()
            .as_ref()
            .map(|s| s.name().to_string())
            .unwrap_or_default()
    }

    /// MAC address from the cached status.
    #[must_use]
    pub fn mac_address(&self) -> Option<String> {
        self.status
            .read()
            .as_ref()
            .and_then(|s| s.mac_address().map(str::to_string))
    }

    /// Returns `true` once a status fetch has succeeded.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status.read().is_some()
    }

    /// Returns a copy of the cached status.
    #[must_use]
    pub fn status(&self) -> Option<StatusSnapshot> {
        self.status.read().clone()
    }

    /// Fetches the device status. Same as [`get_status`](Self::get_status).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn connect(&self) -> Result<StatusSnapshot> {
        self.get_status().await
    }

    /// Fetches `/status` and replaces the cached status.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it. The
    /// cached status is left unchanged.
    pub async fn get_status(&self) -> Result<StatusSnapshot> {
        let snapshot = StatusSnapshot::from(self.transport.get(Endpoint::Status).await?);
        *self.status.write() = Some(snapshot.clone());
        tracing::debug!(
            address = %self.address,
            name = snapshot.name(),
            version = snapshot.version(),
            "Heater status updated"
        );
        Ok(snapshot)
    }

    /// Fetches heater and sensor telemetry from `/control-status`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn fetch_heater_and_sensor_data(&self) -> Result<ControlStatus> {
        self.transport.get(Endpoint::ControlStatus).await
    }

    /// Sets the target temperature. The device validates the range.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn set_target_temperature(&self, value: f64) -> Result<()> {
        self.send(&SetTemperature::normal(value)).await
    }

    /// Sets the operation mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn set_operation_mode(&self, mode: OperationMode) -> Result<()> {
        self.send(&SetOperationMode::new(mode)).await
    }

    /// Switches to [`OperationMode::ControlIndividually`].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn set_operation_mode_control_individually(&self) -> Result<()> {
        self.set_operation_mode(OperationMode::ControlIndividually)
            .await
    }

    /// Switches to [`OperationMode::Off`].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn set_operation_mode_off(&self) -> Result<()> {
        self.set_operation_mode(OperationMode::Off).await
    }

    /// Posts a command and discards the success payload.
    pub(crate) async fn send<C: Command + Sync>(&self, command: &C) -> Result<()> {
        self.transport.post(C::ENDPOINT, command).await.map(drop)
    }

    /// Fetches a raw payload.
    pub(crate) async fn fetch(&self, endpoint: Endpoint) -> Result<Fields> {
        self.transport.get(endpoint).await
    }
}
