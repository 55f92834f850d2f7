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

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, trace, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::interpolation::{bracket, interpolate};
use super::Corrections;
use crate::error::{Error, Result};
use crate::loader;
use crate::measurements::{Length, LengthUnit};

/// A row of a performance table.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceRow {
    /// Pressure altitude in feet.
    pub pressure_altitude: f32,
    /// Takeoff distance in meters.
    pub distance: f32,
}

/// Takeoff distances tabulated over the pressure altitude.
///
/// The rows are kept in their source order. The distinct pressure altitudes
/// form the interpolation domain together with the first row that has each
/// altitude. The table is never modified after it is created.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<PerformanceRow>", into = "Vec<PerformanceRow>")
)]
pub struct PerformanceTable {
    rows: Vec<PerformanceRow>,
    altitudes: Vec<f32>,
    first_rows: Vec<usize>,
}

impl PerformanceTable {
    /// Creates a table from rows.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTable`] if there are no rows with a finite pressure
    /// altitude.
    ///
    /// [`EmptyTable`]: Error::EmptyTable
    pub fn new(rows: Vec<PerformanceRow>) -> Result<Self> {
        let mut domain: Vec<(f32, usize)> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.pressure_altitude.is_finite())
            .map(|(i, row)| (row.pressure_altitude, i))
            .collect();

        if domain.is_empty() {
            return Err(Error::EmptyTable);
        }

        // stable sort to keep the first row of equal altitudes in front
        domain.sort_by(|a, b| a.0.total_cmp(&b.0));
        domain.dedup_by(|a, b| a.0 == b.0);

        let (altitudes, first_rows) = domain.into_iter().unzip();

        Ok(Self {
            rows,
            altitudes,
            first_rows,
        })
    }

    /// Reads the table from CSV data.
    ///
    /// The header needs a pressure altitude column, either `Pressure Altitude
    /// (ft)` or `Pressure Altitude [ft]`, and a `Distance (m)` column.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        loader::read_performance_rows(rdr).and_then(Self::new)
    }

    /// Reads the table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading performance table from {}", path.display());

        let file = File::open(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        Self::from_reader(file)
    }

    /// The rows in their source order.
    pub fn rows(&self) -> &[PerformanceRow] {
        &self.rows
    }

    /// The distinct pressure altitudes sorted ascending.
    pub fn pressure_altitudes(&self) -> &[f32] {
        &self.altitudes
    }

    pub fn min_pressure_altitude(&self) -> Length {
        Length::ft(self.altitudes[0])
    }

    pub fn max_pressure_altitude(&self) -> Length {
        Length::ft(self.altitudes[self.altitudes.len() - 1])
    }

    /// Returns the tabulated pressure altitudes bracketing the target.
    ///
    /// A target below the table is bracketed by the lowest altitude on both
    /// sides, a target above by the highest.
    pub fn bounds(&self, target: Length) -> (Length, Length) {
        let (lower, upper) = self.bracket(target_ft(target));
        (
            Length::ft(self.altitudes[lower]),
            Length::ft(self.altitudes[upper]),
        )
    }

    /// Returns the first row with the pressure altitude.
    pub fn row_at(&self, pressure_altitude: Length) -> Option<&PerformanceRow> {
        let pa = target_ft(pressure_altitude);
        self.rows.iter().find(|row| row.pressure_altitude == pa)
    }

    /// Returns the takeoff distance at the pressure altitude.
    ///
    /// The corrections are added to the distances of both bracketing rows,
    /// before the distance is interpolated linearly between them. A pressure
    /// altitude outside the table isn't extrapolated but returns the
    /// corrected distance of the nearest edge.
    ///
    /// # Examples
    ///
    /// ```
    /// # use avcalc::prelude::*;
    /// # use avcalc::perf::PerformanceRow;
    /// # fn main() -> Result<(), Error> {
    /// let table = PerformanceTable::new(vec![
    ///     PerformanceRow { pressure_altitude: 0.0, distance: 300.0 },
    ///     PerformanceRow { pressure_altitude: 1000.0, distance: 340.0 },
    /// ])?;
    ///
    /// let distance = table.takeoff_distance(Length::ft(500.0), &Corrections::default());
    /// assert_eq!(format!("{distance:.1}"), "320.0 m");
    /// # Ok(())
    /// # }
    /// ```
    pub fn takeoff_distance(&self, pressure_altitude: Length, corrections: &Corrections) -> Length {
        let target = target_ft(pressure_altitude);
        let (lower, upper) = self.bracket(target);

        let (pa_low, pa_up) = (self.altitudes[lower], self.altitudes[upper]);

        if target < pa_low || target > pa_up {
            warn!(
                "pressure altitude {target} ft is outside the table ({} ft to {} ft), using {pa_low} ft",
                self.altitudes[0],
                self.altitudes[self.altitudes.len() - 1],
            );
        }

        let correction = *corrections.total().value();
        let dist_low = self.rows[self.first_rows[lower]].distance + correction;
        let dist_up = self.rows[self.first_rows[upper]].distance + correction;

        trace!("bracket {pa_low} ft ({dist_low} m) to {pa_up} ft ({dist_up} m)");

        Length::m(interpolate(dist_low, dist_up, pa_low, pa_up, target))
    }

    fn bracket(&self, target: f32) -> (usize, usize) {
        // the domain is never empty
        bracket(&self.altitudes, target).unwrap_or((0, 0))
    }
}

impl TryFrom<Vec<PerformanceRow>> for PerformanceTable {
    type Error = Error;

    fn try_from(rows: Vec<PerformanceRow>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<PerformanceTable> for Vec<PerformanceRow> {
    fn from(table: PerformanceTable) -> Self {
        table.rows
    }
}

fn target_ft(pressure_altitude: Length) -> f32 {
    *pressure_altitude.convert_to(LengthUnit::Feet).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pressure_altitude: f32, distance: f32) -> PerformanceRow {
        PerformanceRow {
            pressure_altitude,
            distance,
        }
    }

    fn table() -> PerformanceTable {
        PerformanceTable::new(vec![
            row(2000.0, 380.0),
            row(0.0, 300.0),
            row(1000.0, 340.0),
            row(4000.0, 470.0),
        ])
        .expect("table should not be empty")
    }

    fn distance(table: &PerformanceTable, pa: f32, corrections: &Corrections) -> f32 {
        *table
            .takeoff_distance(Length::ft(pa), corrections)
            .value()
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(PerformanceTable::new(Vec::new()), Err(Error::EmptyTable));
        assert_eq!(
            PerformanceTable::new(vec![row(f32::NAN, 300.0)]),
            Err(Error::EmptyTable)
        );
    }

    #[test]
    fn domain_is_sorted() {
        assert_eq!(
            table().pressure_altitudes(),
            &[0.0, 1000.0, 2000.0, 4000.0]
        );
        assert_eq!(table().min_pressure_altitude(), Length::ft(0.0));
        assert_eq!(table().max_pressure_altitude(), Length::ft(4000.0));
    }

    #[test]
    fn interpolates_between_rows() {
        let c = Corrections::default();
        assert_eq!(distance(&table(), 500.0, &c), 320.0);
        assert_eq!(distance(&table(), 3000.0, &c), 425.0);
    }

    #[test]
    fn tabulated_altitude_is_exact() {
        let c = Corrections::new(Length::m(-12.5), Length::m(7.0), Length::m(30.0));

        for r in table().rows() {
            assert_eq!(
                distance(&table(), r.pressure_altitude, &c),
                r.distance + *c.total().value()
            );
        }
    }

    #[test]
    fn clamps_to_edges() {
        let c = Corrections::new(Length::m(10.0), Length::m(0.0), Length::m(0.0));

        assert_eq!(distance(&table(), -1.0, &c), 310.0);
        assert_eq!(distance(&table(), -5000.0, &c), 310.0);
        assert_eq!(distance(&table(), 4500.0, &c), 480.0);
        assert_eq!(distance(&table(), 10_000.0, &c), 480.0);
        assert_eq!(
            table().bounds(Length::ft(10_000.0)),
            (Length::ft(4000.0), Length::ft(4000.0))
        );
    }

    #[test]
    fn monotonic_between_rows() {
        let c = Corrections::default();
        let mut last = distance(&table(), 1000.0, &c);

        for pa in (1000..=2000).step_by(50) {
            let d = distance(&table(), pa as f32, &c);
            assert!(d >= last, "{d} < {last} at {pa} ft");
            last = d;
        }
    }

    #[test]
    fn corrections_shift_result() {
        let base = distance(&table(), 1500.0, &Corrections::default());

        for delta in [-40.0, -5.0, 25.0, 100.0] {
            let wind = Corrections::new(Length::m(delta), Length::m(0.0), Length::m(0.0));
            let slope = Corrections::new(Length::m(0.0), Length::m(delta), Length::m(0.0));
            let surface = Corrections::new(Length::m(0.0), Length::m(0.0), Length::m(delta));

            for c in [wind, slope, surface] {
                assert_eq!(distance(&table(), 1500.0, &c), base + delta);
            }
        }
    }

    #[test]
    fn first_row_wins_on_duplicates() {
        let table = PerformanceTable::new(vec![
            row(0.0, 300.0),
            row(1000.0, 340.0),
            row(1000.0, 999.0),
        ])
        .expect("table should not be empty");

        assert_eq!(table.pressure_altitudes(), &[0.0, 1000.0]);
        assert_eq!(
            table.row_at(Length::ft(1000.0)).map(|r| r.distance),
            Some(340.0)
        );
        assert_eq!(
            distance(&table, 1000.0, &Corrections::default()),
            340.0
        );
    }

    #[test]
    fn table_from_rows() {
        assert_eq!(
            PerformanceTable::try_from(Vec::<PerformanceRow>::new()),
            Err(Error::EmptyTable)
        );
        assert_eq!(Vec::<PerformanceRow>::from(table()).len(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_builds_domain() {
        let json = r#"[
            {"pressure_altitude": 1000.0, "distance": 340.0},
            {"pressure_altitude": 0.0, "distance": 300.0}
        ]"#;
        let table: PerformanceTable = serde_json::from_str(json).expect("table should deserialize");

        assert_eq!(table.pressure_altitudes(), &[0.0, 1000.0]);
        assert_eq!(distance(&table, 500.0, &Corrections::default()), 320.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_empty_table() {
        let err = serde_json::from_str::<PerformanceTable>("[]")
            .expect_err("empty table should be rejected");
        assert!(err.to_string().contains("no usable rows"));
    }

    #[test]
    fn target_in_meters() {
        let d = table().takeoff_distance(Length::m(304.8), &Corrections::default());
        assert!((d.value() - 340.0).abs() < 0.01);
    }
}
