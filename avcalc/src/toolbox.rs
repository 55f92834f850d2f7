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

//! Loading of the reference data and access to both calculators.
//!
//! The data is read once by [`Toolbox::load`]. The returned toolbox is
//! immutable and every calculation depends only on its arguments and the
//! loaded tables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::info;

use crate::airport::{Airports, PressureAltitudeReport};
use crate::error::Result;
use crate::measurements::{Length, Pressure};
use crate::perf::{
    Corrections, PerformanceTable, PerformanceTables, PerformanceTablesBuilder, WeightClass,
};

const AIRPORTS_FILE_NAME: &str = "airports.csv";

/// The files from which the toolbox is loaded.
///
/// Files which aren't set explicitly are expected in the data directory
/// under their default name, `airports.csv` for the airports and e.g.
/// `takeoff_1157kg_clean.csv` for the performance table of 1157 kg.
#[derive(Clone, PartialEq, Debug)]
pub struct DataFiles {
    dir: PathBuf,
    airports: Option<PathBuf>,
    tables: HashMap<WeightClass, PathBuf>,
}

impl DataFiles {
    /// Uses the default file names within the directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            airports: None,
            tables: HashMap::new(),
        }
    }

    pub fn with_airports<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.airports = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_table<P: AsRef<Path>>(mut self, weight: WeightClass, path: P) -> Self {
        self.tables.insert(weight, path.as_ref().to_path_buf());
        self
    }

    pub fn airports(&self) -> PathBuf {
        self.airports
            .clone()
            .unwrap_or_else(|| self.dir.join(AIRPORTS_FILE_NAME))
    }

    pub fn table(&self, weight: WeightClass) -> PathBuf {
        self.tables
            .get(&weight)
            .cloned()
            .unwrap_or_else(|| self.dir.join(weight.file_name()))
    }
}

impl Default for DataFiles {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// The pressure altitude and takeoff performance calculators.
///
/// # Examples
///
/// ```no_run
/// # use avcalc::prelude::*;
/// # fn main() -> Result<(), Error> {
/// let toolbox = Toolbox::load(&DataFiles::in_dir("data"))?;
///
/// let report = toolbox.pressure_altitude("EDDF", Pressure::h_pa(1003.0))?;
/// println!("{report}");
///
/// let distance = toolbox.takeoff_distance(
///     WeightClass::Kg1157,
///     report.pressure_altitude,
///     &Corrections::default(),
/// );
/// println!("takeoff distance {distance:.1}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Toolbox {
    airports: Airports,
    tables: PerformanceTables,
}

impl Toolbox {
    pub fn from_parts(airports: Airports, tables: PerformanceTables) -> Self {
        Self { airports, tables }
    }

    /// Loads the airports and the performance tables of all weight classes.
    ///
    /// # Errors
    ///
    /// Fails if any file is missing or malformed.
    pub fn load(files: &DataFiles) -> Result<Self> {
        let airports = Airports::from_path(files.airports())?;

        let mut builder = PerformanceTablesBuilder::new();
        for weight in WeightClass::ALL {
            builder.add_table(weight, PerformanceTable::from_path(files.table(weight))?);
        }
        let tables = builder.build()?;

        info!(
            "toolbox loaded with {} airport(s) and {} weight class(es)",
            airports.len(),
            WeightClass::ALL.len()
        );

        Ok(Self { airports, tables })
    }

    pub fn airports(&self) -> &Airports {
        &self.airports
    }

    pub fn tables(&self) -> &PerformanceTables {
        &self.tables
    }

    /// See [`Airports::pressure_altitude`].
    pub fn pressure_altitude(&self, ident: &str, qnh: Pressure) -> Result<PressureAltitudeReport> {
        self.airports.pressure_altitude(ident, qnh)
    }

    /// See [`PerformanceTables::takeoff_distance`].
    pub fn takeoff_distance(
        &self,
        weight: WeightClass,
        pressure_altitude: Length,
        corrections: &Corrections,
    ) -> Length {
        self.tables
            .takeoff_distance(weight, pressure_altitude, corrections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_names() {
        let files = DataFiles::in_dir("/data");

        assert_eq!(files.airports(), PathBuf::from("/data/airports.csv"));
        assert_eq!(
            files.table(WeightClass::Kg1111),
            PathBuf::from("/data/takeoff_1111kg_clean.csv")
        );
    }

    #[test]
    fn overridden_file_names() {
        let files = DataFiles::default()
            .with_airports("/srv/ourairports.csv")
            .with_table(WeightClass::Kg1134, "/srv/c172_1134.csv");

        assert_eq!(files.airports(), PathBuf::from("/srv/ourairports.csv"));
        assert_eq!(
            files.table(WeightClass::Kg1134),
            PathBuf::from("/srv/c172_1134.csv")
        );
        assert_eq!(
            files.table(WeightClass::Kg1157),
            PathBuf::from("./takeoff_1157kg_clean.csv")
        );
    }
}
