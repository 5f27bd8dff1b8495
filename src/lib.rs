// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `mill_local` - A Rust library to control Mill wifi heaters.
//!
//! Mill heaters expose a small HTTP API on the local network. This library
//! wraps it in an async client: read the heater identity and telemetry, set
//! the target temperature, switch the operation mode and, on oil heaters,
//! change the heating power.
//!
//! # Error handling
//!
//! The device signals failure both through the HTTP status and through a
//! `status` field in its JSON body. A call succeeds only when the status is
//! 2xx and the body says `"ok"`; anything else is an [`ApiError`]. Timeouts
//! and connection failures are reported as [`Error::Timeout`] and
//! [`Error::Transport`]. Nothing is retried.
//!
//! # Quick Start
//!
//! ```no_run
//! use mill_local::{Mill, OperationMode};
//!
//! #[tokio::main]
//! async fn main() -> mill_local::Result<()> {
//!     // One client can be shared by every heater in the house
//!     let client = reqwest::Client::new();
//!     let mill = Mill::new("192.168.2.123", client)?;
//!
//!     mill.connect().await?;
//!     println!("Connected to {} ({})", mill.name(), mill.version());
//!
//!     let telemetry = mill.fetch_heater_and_sensor_data().await?;
//!     println!("Ambient: {:?}", telemetry.get("ambient_temperature"));
//!
//!     mill.set_operation_mode(OperationMode::ControlIndividually).await?;
//!     mill.set_target_temperature(21.0).await?;
//!     Ok(())
//! }
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use device::{Mill, MillOilHeater};
pub use error::{ApiError, Error, Result};
pub use protocol::{HttpConfig, HttpTransport};
pub use response::{ControlStatus, HeaterPowerData, StatusSnapshot};
pub use types::{DeviceAddress, OilHeaterPowerLevel, OperationMode};
