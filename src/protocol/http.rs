// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the heater local API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;

use crate::error::Error;
use crate::protocol::envelope::{Envelope, Fields, decode};
use crate::protocol::{Endpoint, Method};
use crate::types::DeviceAddress;

// ============================================================================
// HttpConfig - Connection parameters of one heater
// ============================================================================

/// Configuration for a heater on the local network.
///
/// # Examples
///
/// ```
/// use mill_local::protocol::HttpConfig;
/// use mill_local::types::DeviceAddress;
/// use std::time::Duration;
///
/// let address = DeviceAddress::new("192.168.2.123").unwrap();
/// let config = HttpConfig::new(address).with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://192.168.2.123");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    address: DeviceAddress,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    /// Creates a configuration with the default timeout.
    #[must_use]
    pub fn new(address: DeviceAddress) -> Self {
        Self {
            address,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the timeout covering connection and full response read.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the device address.
    #[must_use]
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.address.base_url()
    }

    /// Creates an `HttpTransport` that sends requests through `client`.
    #[must_use]
    pub fn into_transport(self, client: Client) -> HttpTransport {
        HttpTransport {
            base_url: self.base_url(),
            client,
            timeout: self.timeout,
        }
    }
}

// ============================================================================
// HttpTransport - One request/response exchange per call
// ============================================================================

/// Sends single requests to one heater.
///
/// The underlying [`Client`] is shared: cloning the transport or handing the
/// same client to several transports reuses one connection pool. The
/// transport itself holds no mutable state.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Builds the URL for an endpoint.
    fn build_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    /// Performs one request and returns the HTTP status with the parsed body.
    ///
    /// The body is parsed whatever the status; an empty or unparsable body
    /// becomes [`Envelope::sentinel`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Timeout` if the exchange exceeds the timeout and
    /// `Error::Transport` on connection failures.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<(StatusCode, Envelope), Error> {
        let url = self.build_url(endpoint);

        tracing::debug!(method = %method, url = %url, "Sending heater request");

        let builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let (status, body) = tokio::time::timeout(self.timeout, self.exchange(builder))
            .await
            .map_err(|_| Error::Timeout(self.timeout))??;

        tracing::debug!(status = status.as_u16(), body = %body, "Received heater response");

        Ok((status, Envelope::parse(&body)))
    }

    async fn exchange(&self, builder: RequestBuilder) -> Result<(StatusCode, String), Error> {
        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_error(e))?;
        Ok((status, body))
    }

    fn map_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout)
        } else {
            Error::Transport(err)
        }
    }

    /// Sends a GET request and applies the success check.
    ///
    /// # Errors
    ///
    /// Returns `Error::Api` if the device rejects the request, or the
    /// transport errors of [`request`](Self::request).
    pub async fn get(&self, endpoint: Endpoint) -> Result<Fields, Error> {
        let (status, envelope) = self.request::<()>(Method::Get, endpoint, None).await?;
        Self::finish(Method::Get, endpoint, status, envelope)
    }

    /// Sends a POST request with a JSON body and applies the success check.
    ///
    /// # Errors
    ///
    /// Returns `Error::Api` if the device rejects the request, or the
    /// transport errors of [`request`](Self::request).
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<Fields, Error> {
        let (status, envelope) = self.request(Method::Post, endpoint, Some(body)).await?;
        Self::finish(Method::Post, endpoint, status, envelope)
    }

    fn finish(
        method: Method,
        endpoint: Endpoint,
        status: StatusCode,
        envelope: Envelope,
    ) -> Result<Fields, Error> {
        match decode(status, envelope) {
            Ok(envelope) => Ok(envelope.into_fields()),
            Err(err) => {
                tracing::warn!(
                    method = %method,
                    endpoint = endpoint.path(),
                    status = err.status,
                    device_status = %err.device_status,
                    "Heater request failed"
                );
                Err(err.into())
            }
        }
    }
}
