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

use std::ops::RangeInclusive;

use avcalc::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;

const QNH_RANGE_HPA: RangeInclusive<f32> = 800.0..=1100.0;
const PRESSURE_ALTITUDE_RANGE_FT: RangeInclusive<f32> = 0.0..=10_000.0;

/// Returns the value if it's within the range.
///
/// NaN is never within a range.
fn check_range(value: f32, range: &RangeInclusive<f32>) -> Result<f32, Error> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(Error::ImplausibleValue)
    }
}

/// Rounds to one decimal in `f64`, which is the number type of JavaScript.
fn round_to_tenth(value: f32) -> f64 {
    (f64::from(value) * 10.0).round() / 10.0
}

/// Returns the supported takeoff weights in kg, heaviest first.
#[wasm_bindgen]
pub fn weights() -> Vec<u16> {
    WeightClass::ALL.iter().map(WeightClass::kg).collect()
}

/// Pressure altitude result handed to JavaScript with plain numbers in feet.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPressureAltitude {
    ident: String,
    name: String,
    elevation: f64,
    pressure_altitude: f64,
}

impl From<PressureAltitudeReport> for JsPressureAltitude {
    fn from(report: PressureAltitudeReport) -> Self {
        Self {
            ident: report.ident,
            name: report.name,
            elevation: round_to_tenth(*report.elevation.value()),
            pressure_altitude: round_to_tenth(*report.pressure_altitude.value()),
        }
    }
}

#[wasm_bindgen(js_name = Toolbox)]
pub struct JsToolbox {
    inner: Toolbox,
}

#[wasm_bindgen(js_class = Toolbox)]
impl JsToolbox {
    /// Creates the toolbox from the CSV content of the airport table and of
    /// the performance tables, which are ordered heaviest first.
    #[wasm_bindgen(constructor)]
    pub fn new(
        airports: &str,
        takeoff_1157kg: &str,
        takeoff_1134kg: &str,
        takeoff_1111kg: &str,
    ) -> Result<Self, JsError> {
        let airports = Airports::from_reader(airports.as_bytes())?;

        let mut builder = PerformanceTablesBuilder::new();
        for (weight, csv) in WeightClass::ALL
            .into_iter()
            .zip([takeoff_1157kg, takeoff_1134kg, takeoff_1111kg])
        {
            builder.add_table(weight, PerformanceTable::from_reader(csv.as_bytes())?);
        }

        Ok(Self {
            inner: Toolbox::from_parts(airports, builder.build()?),
        })
    }

    /// Returns `{ ident, name, elevation, pressureAltitude }` in feet.
    #[wasm_bindgen(js_name = pressureAltitude)]
    pub fn pressure_altitude(&self, ident: &str, qnh: f32) -> Result<JsValue, JsError> {
        let qnh = check_range(qnh, &QNH_RANGE_HPA)?;
        let report = self.inner.pressure_altitude(ident, Pressure::h_pa(qnh))?;

        Ok(serde_wasm_bindgen::to_value(&JsPressureAltitude::from(
            report,
        ))?)
    }

    /// Returns the takeoff distance in meters rounded to one decimal.
    ///
    /// The weight is one of the [weights] in kg.
    #[wasm_bindgen(js_name = takeoffDistance)]
    pub fn takeoff_distance(
        &self,
        weight_kg: u16,
        pressure_altitude: f32,
        wind: f32,
        slope: f32,
        surface: f32,
    ) -> Result<f64, JsError> {
        let weight = WeightClass::try_from(weight_kg)?;
        let pa = check_range(pressure_altitude, &PRESSURE_ALTITUDE_RANGE_FT)?;
        let corrections = Corrections::new(Length::m(wind), Length::m(slope), Length::m(surface));

        let distance = self
            .inner
            .takeoff_distance(weight, Length::ft(pa), &corrections);

        Ok(round_to_tenth(*distance.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qnh_range_is_inclusive() {
        assert_eq!(check_range(800.0, &QNH_RANGE_HPA), Ok(800.0));
        assert_eq!(check_range(1100.0, &QNH_RANGE_HPA), Ok(1100.0));
        assert_eq!(check_range(1013.25, &QNH_RANGE_HPA), Ok(1013.25));
        assert_eq!(
            check_range(799.99, &QNH_RANGE_HPA),
            Err(Error::ImplausibleValue)
        );
        assert_eq!(
            check_range(1100.01, &QNH_RANGE_HPA),
            Err(Error::ImplausibleValue)
        );
    }

    #[test]
    fn pressure_altitude_range_is_inclusive() {
        let range = &PRESSURE_ALTITUDE_RANGE_FT;

        assert_eq!(check_range(0.0, range), Ok(0.0));
        assert_eq!(check_range(10_000.0, range), Ok(10_000.0));
        assert_eq!(check_range(-1.0, range), Err(Error::ImplausibleValue));
        assert_eq!(check_range(10_001.0, range), Err(Error::ImplausibleValue));
    }

    #[test]
    fn nan_is_out_of_range() {
        assert_eq!(
            check_range(f32::NAN, &QNH_RANGE_HPA),
            Err(Error::ImplausibleValue)
        );
        assert_eq!(
            check_range(f32::NAN, &PRESSURE_ALTITUDE_RANGE_FT),
            Err(Error::ImplausibleValue)
        );
    }

    #[test]
    fn rounds_to_tenth_in_f64() {
        assert_eq!(round_to_tenth(312.3), 312.3_f64);
        assert_eq!(round_to_tenth(320.04), 320.0_f64);
        assert_eq!(round_to_tenth(-12.25), -12.3_f64);
        assert_eq!(round_to_tenth(664.0), 664.0_f64);
    }

    #[test]
    fn weights_heaviest_first() {
        assert_eq!(weights(), vec![1157, 1134, 1111]);
    }
}
