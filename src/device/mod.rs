// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater clients.
//!
//! [`Mill`] covers the API shared by every heater; [`MillOilHeater`] adds
//! the power level endpoint of oil heaters.

mod mill;
mod oil_heater;

pub use mill::Mill;
pub use oil_heater::MillOilHeater;
