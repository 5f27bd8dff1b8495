// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `mill_local` library.
//!
//! Every failure a heater call can produce is surfaced through [`Error`]:
//! the request timed out, the connection could not be made, or the device
//! answered but rejected the request. Nothing is swallowed into a default
//! value, so callers decide on retries themselves.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The device answered but the response failed the success check.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// Connection-level failure (DNS, refused, reset).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The device address is empty once normalized.
    #[error("invalid device address: {0:?}")]
    InvalidAddress(String),
}

impl Error {
    /// Returns the HTTP status code if the device sent a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Returns `true` if the device rejected the request.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// A response that was received but did not signal success.
///
/// The heater reports failures in two places: the HTTP status line and the
/// `status` field of the JSON body. Both are kept here, together with the
/// reason phrase of the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Canonical reason phrase for the status code, if known.
    pub reason: Option<String>,
    /// The `status` field reported by the device, empty when absent.
    pub device_status: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device returned HTTP {}", self.status)?;
        if let Some(reason) = &self.reason {
            write!(f, " {reason}")?;
        }
        if !self.device_status.is_empty() {
            write!(f, ": {}", self.device_status)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
