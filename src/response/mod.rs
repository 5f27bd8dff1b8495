// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Payloads returned by the heater.
//!
//! Only the `/status` payload is wrapped, because the client caches it and
//! derives attributes from it. Telemetry payloads are handed to the caller
//! as received.

mod status;

pub use status::StatusSnapshot;

use crate::protocol::Fields;

/// Payload of `GET /control-status`: heater and sensor telemetry.
pub type ControlStatus = Fields;

/// Payload of `GET /oil-heater-power`.
pub type HeaterPowerData = Fields;
