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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Measurement, UnitOfMeasure};

/// Pressure unit with _Pa_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum PressureUnit {
    Pascal,
    HectoPascal,
    InchesOfMercury,
}

impl UnitOfMeasure<f32> for PressureUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Pascal => "Pa",
            Self::HectoPascal => "hPa",
            Self::InchesOfMercury => "inHg",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Pascal => value,
            Self::HectoPascal => value / constants::HECTOPASCAL_IN_PASCAL,
            Self::InchesOfMercury => value / constants::INCH_OF_MERCURY_IN_PASCAL,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Pascal => *value,
            Self::HectoPascal => value * constants::HECTOPASCAL_IN_PASCAL,
            Self::InchesOfMercury => value * constants::INCH_OF_MERCURY_IN_PASCAL,
        }
    }
}

/// Air pressure, e.g. the QNH.
pub type Pressure = Measurement<f32, PressureUnit>;

impl Pressure {
    /// Standard pressure at sea level.
    pub const STD: Self = Self::h_pa(constants::STD_PRESSURE_HPA);

    pub const fn h_pa(value: f32) -> Self {
        Self {
            value,
            unit: PressureUnit::HectoPascal,
        }
    }

    pub const fn in_hg(value: f32) -> Self {
        Self {
            value,
            unit: PressureUnit::InchesOfMercury,
        }
    }
}
