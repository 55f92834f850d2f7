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

//! Airport reference data and the pressure altitude calculator.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::loader;
use crate::measurements::constants::{FEET_PER_HECTOPASCAL, STD_PRESSURE_HPA};
use crate::measurements::{Length, LengthUnit, Pressure, PressureUnit};

/// An airport of the reference table.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    pub(crate) ident: String,
    pub(crate) name: String,
    pub(crate) elevation: Option<Length>,
}

impl Airport {
    pub fn new(ident: String, name: String, elevation: Option<Length>) -> Self {
        Self {
            ident,
            name,
            elevation,
        }
    }

    /// The ICAO code as stored in the reference table.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field elevation or `None` if it's unknown.
    pub fn elevation(&self) -> Option<Length> {
        self.elevation
    }
}

/// Returns the pressure altitude in feet at an elevation for the QNH.
///
/// The altitude changes by 30 ft per hPa the QNH deviates from standard
/// pressure:
///
/// ```text
/// PA = elevation + (1013.25 hPa - QNH) * 30 ft/hPa
/// ```
///
/// # Examples
///
/// ```
/// # use avcalc::airport::pressure_altitude;
/// # use avcalc::measurements::{Length, Pressure};
/// let pa = pressure_altitude(Length::ft(400.0), Pressure::h_pa(1003.25));
/// assert_eq!(pa, Length::ft(700.0));
/// ```
pub fn pressure_altitude(elevation: Length, qnh: Pressure) -> Length {
    let elevation_ft = *elevation.convert_to(LengthUnit::Feet).value();
    let qnh_hpa = *qnh.convert_to(PressureUnit::HectoPascal).value();

    Length::ft(elevation_ft + (STD_PRESSURE_HPA - qnh_hpa) * FEET_PER_HECTOPASCAL)
}

/// The outcome of a pressure altitude lookup.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureAltitudeReport {
    /// The ICAO code as entered by the user in upper case.
    pub ident: String,
    pub name: String,
    pub elevation: Length,
    pub pressure_altitude: Length,
}

impl fmt::Display for PressureAltitudeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): elevation {:.1}, pressure altitude {:.1}",
            self.name, self.ident, self.elevation, self.pressure_altitude
        )
    }
}

/// The airport reference table.
///
/// The table is read once and never modified afterwards. Idents are matched
/// case-insensitive and only in full. If an ident appears more than once, the
/// first record wins.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Airport>", into = "Vec<Airport>")
)]
pub struct Airports {
    airports: Vec<Airport>,
    index: HashMap<String, usize>,
}

impl Airports {
    pub fn new(airports: Vec<Airport>) -> Self {
        let mut index = HashMap::with_capacity(airports.len());

        for (i, airport) in airports.iter().enumerate() {
            index.entry(normalize_ident(&airport.ident)).or_insert(i);
        }

        Self { airports, index }
    }

    /// Reads the reference table from CSV data.
    ///
    /// The header needs an `ident`, an `elevation_ft` and a `name` column.
    /// Other columns are ignored.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        loader::read_airports(rdr).map(Self::new)
    }

    /// Reads the reference table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading airports from {}", path.display());

        let file = File::open(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        Self::from_reader(file)
    }

    /// Returns the airport with the ident.
    pub fn find(&self, ident: &str) -> Option<&Airport> {
        self.index
            .get(&normalize_ident(ident))
            .and_then(|&i| self.airports.get(i))
    }

    /// Calculates the pressure altitude at the airport for the QNH.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownIdent`] if the airport isn't in the table or if its
    /// elevation is unknown.
    ///
    /// [`UnknownIdent`]: Error::UnknownIdent
    ///
    /// # Examples
    ///
    /// ```
    /// # use avcalc::prelude::*;
    /// # fn main() -> Result<(), Error> {
    /// let airports = Airports::from_reader("ident,name,elevation_ft\nEDHL,Lübeck Airport,53\n".as_bytes())?;
    /// let report = airports.pressure_altitude("edhl", Pressure::h_pa(1013.25))?;
    ///
    /// assert_eq!(report.pressure_altitude, Length::ft(53.0));
    /// assert!(airports.pressure_altitude("EDDX", Pressure::STD).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn pressure_altitude(&self, ident: &str, qnh: Pressure) -> Result<PressureAltitudeReport> {
        let ident = normalize_ident(ident);

        let (airport, elevation) = self
            .find(&ident)
            .and_then(|airport| airport.elevation.map(|elevation| (airport, elevation)))
            .ok_or_else(|| Error::UnknownIdent(ident.clone()))?;

        let pressure_altitude = pressure_altitude(elevation, qnh);
        debug!("pressure altitude at {ident} with QNH {qnh:.2} is {pressure_altitude:.1}");

        Ok(PressureAltitudeReport {
            ident,
            name: airport.name.clone(),
            elevation,
            pressure_altitude,
        })
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }
}

impl From<Vec<Airport>> for Airports {
    fn from(airports: Vec<Airport>) -> Self {
        Self::new(airports)
    }
}

impl From<Airports> for Vec<Airport> {
    fn from(airports: Airports) -> Self {
        airports.airports
    }
}

fn normalize_ident(ident: &str) -> String {
    ident.trim().to_uppercase()
}
