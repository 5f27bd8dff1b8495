// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types accepted by the heater API.
//!
//! These types only admit values the device understands, so commands built
//! from them cannot carry an unknown mode or power setting.

mod address;
mod heater_power;
mod operation_mode;

pub use address::DeviceAddress;
pub use heater_power::OilHeaterPowerLevel;
pub use operation_mode::{OperationMode, UnknownOperationMode};
