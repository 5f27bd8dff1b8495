// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device address normalization.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Host (and optional port) of a heater on the local network.
///
/// The raw address is stripped of any scheme, surrounding whitespace and
/// slashes. Normalizing an already normalized address yields the same value.
///
/// # Examples
///
/// ```
/// use mill_local::types::DeviceAddress;
///
/// let address = DeviceAddress::new("http://192.168.2.123/").unwrap();
/// assert_eq!(address.as_str(), "192.168.2.123");
/// assert_eq!(address.base_url(), "http://192.168.2.123");
///
/// assert!(DeviceAddress::new("http://").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceAddress(String);

impl DeviceAddress {
    /// Normalizes a raw address.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if nothing is left after normalization.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, Error> {
        let raw = raw.as_ref();
        let host = normalize(raw);
        if host.is_empty() {
            return Err(Error::InvalidAddress(raw.to_string()));
        }
        Ok(Self(host.to_string()))
    }

    /// Returns the normalized host.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the base URL of the device API.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.0)
    }
}

fn normalize(raw: &str) -> &str {
    let mut host = raw;
    loop {
        host = host.trim();
        if let Some(rest) = strip_scheme(host) {
            host = rest;
            continue;
        }
        let trimmed = host.trim_matches('/');
        if trimmed.len() == host.len() {
            return host;
        }
        host = trimmed;
    }
}

fn strip_scheme(host: &str) -> Option<&str> {
    SCHEMES.iter().find_map(|scheme| {
        let prefix = host.get(..scheme.len())?;
        if prefix.eq_ignore_ascii_case(scheme) {
            host.get(scheme.len()..)
        } else {
            None
        }
    })
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DeviceAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DeviceAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
