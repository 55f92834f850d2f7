// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Calculators for the preflight of small aircraft.
//!
//! Two independent calculators share this crate:
//!
//! - The [pressure altitude] at an airport, derived from its field elevation
//!   and the QNH.
//! - The [takeoff distance] of a weight class, interpolated linearly over
//!   the pressure altitude from tabulated performance data and adjusted by
//!   wind, slope and surface corrections.
//!
//! Reference data is loaded once into a [`Toolbox`], which can't be modified
//! afterwards.
//!
//! [pressure altitude]: airport::Airports::pressure_altitude
//! [takeoff distance]: perf::PerformanceTable::takeoff_distance
//! [`Toolbox`]: toolbox::Toolbox

pub mod airport;
mod error;
mod loader;
pub mod measurements;
pub mod perf;
pub mod toolbox;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::airport::{Airport, Airports, PressureAltitudeReport};
    pub use crate::error::Error;
    pub use crate::measurements::{Length, Mass, Pressure};
    pub use crate::perf::{
        Corrections, PerformanceTable, PerformanceTables, PerformanceTablesBuilder, WeightClass,
    };
    pub use crate::toolbox::{DataFiles, Toolbox};
}
