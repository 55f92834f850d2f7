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

//! Takeoff performance.
//!
//! The takeoff distance of a [`WeightClass`] is read from a
//! [`PerformanceTable`] by interpolating linearly over the pressure altitude.
//! The weight isn't interpolated, each supported weight class has its own
//! table. Wind, slope and surface [`Corrections`] are added to the tabulated
//! distances before the interpolation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measurements::{Length, LengthUnit, Mass};

mod builder;
mod interpolation;
mod table;

pub use builder::PerformanceTablesBuilder;
pub use interpolation::{find_bounds, interpolate};
pub use table::{PerformanceRow, PerformanceTable};

/// A takeoff weight for which performance data is published.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum WeightClass {
    Kg1157,
    Kg1134,
    Kg1111,
}

impl WeightClass {
    /// All weight classes, heaviest first.
    pub const ALL: [Self; 3] = [Self::Kg1157, Self::Kg1134, Self::Kg1111];

    /// The takeoff weight in kg.
    pub fn kg(&self) -> u16 {
        match self {
            Self::Kg1157 => 1157,
            Self::Kg1134 => 1134,
            Self::Kg1111 => 1111,
        }
    }

    pub fn mass(&self) -> Mass {
        Mass::kg(self.kg().into())
    }

    /// The default file name of the weight class' performance table.
    pub fn file_name(&self) -> String {
        format!("takeoff_{}kg_clean.csv", self.kg())
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<u16> for WeightClass {
    type Error = Error;

    fn try_from(kg: u16) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|weight| weight.kg() == kg)
            .ok_or(Error::UnsupportedWeight(kg))
    }
}

impl FromStr for WeightClass {
    type Err = Error;

    /// Parses a weight in kg like `1134` or `1134 kg`.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_end_matches("kg").trim_end();
        let kg: u16 = digits.parse().map_err(|_| Error::UnexpectedString)?;
        Self::try_from(kg)
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.kg())
    }
}

/// Corrections added to a tabulated takeoff distance.
///
/// Each correction is a signed distance. A positive value lengthens the
/// takeoff distance.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Corrections {
    pub wind: Length,
    pub slope: Length,
    pub surface: Length,
}

impl Corrections {
    pub fn new(wind: Length, slope: Length, surface: Length) -> Self {
        Self {
            wind,
            slope,
            surface,
        }
    }

    /// The sum of all corrections in meters.
    pub fn total(&self) -> Length {
        self.wind.convert_to(LengthUnit::Meters) + self.slope + self.surface
    }
}

impl Default for Corrections {
    fn default() -> Self {
        Self::new(Length::m(0.0), Length::m(0.0), Length::m(0.0))
    }
}

/// The performance tables of all weight classes.
///
/// Build with the [`PerformanceTablesBuilder`], which ensures that there is a
/// table for every [`WeightClass`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "Vec<(WeightClass, PerformanceTable)>",
        into = "Vec<(WeightClass, PerformanceTable)>"
    )
)]
pub struct PerformanceTables {
    // indexed by WeightClass::index
    tables: Vec<PerformanceTable>,
}

impl PerformanceTables {
    pub fn table(&self, weight: WeightClass) -> &PerformanceTable {
        &self.tables[weight.index()]
    }

    /// Returns the takeoff distance for the weight class at the pressure
    /// altitude.
    ///
    /// See [`PerformanceTable::takeoff_distance`].
    pub fn takeoff_distance(
        &self,
        weight: WeightClass,
        pressure_altitude: Length,
        corrections: &Corrections,
    ) -> Length {
        self.table(weight)
            .takeoff_distance(pressure_altitude, corrections)
    }
}

impl TryFrom<Vec<(WeightClass, PerformanceTable)>> for PerformanceTables {
    type Error = Error;

    /// Builds the tables from pairs of weight class and table.
    ///
    /// A later table of the same weight class replaces an earlier one.
    fn try_from(tables: Vec<(WeightClass, PerformanceTable)>) -> Result<Self> {
        let mut builder = PerformanceTablesBuilder::new();
        for (weight, table) in tables {
            builder.add_table(weight, table);
        }
        builder.build()
    }
}

impl From<PerformanceTables> for Vec<(WeightClass, PerformanceTable)> {
    fn from(tables: PerformanceTables) -> Self {
        WeightClass::ALL.into_iter().zip(tables.tables).collect()
    }
}
