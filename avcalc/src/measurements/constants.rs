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

pub const FEET_IN_METER: f32 = 0.3048;
/// Altitude change per hPa used for the pressure altitude.
///
/// The hydrostatic value is closer to 27 ft/hPa. This rounded factor is what
/// the calculator is defined with and must not be changed silently.
pub const FEET_PER_HECTOPASCAL: f32 = 30.0;
pub const HECTOPASCAL_IN_PASCAL: f32 = 100.0;
pub const INCH_OF_MERCURY_IN_PASCAL: f32 = 3386.389;
pub const POUNDS_IN_KILOGRAMS: f32 = 0.4535924;
/// ISA sea-level pressure in hPa.
pub const STD_PRESSURE_HPA: f32 = 1013.25;
