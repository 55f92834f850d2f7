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

//! CSV ingestion of the airport reference table and the performance tables.
//!
//! Column names differ between data sources, e.g. `Pressure Altitude [ft]`
//! and `Pressure Altitude (ft)`. Headers are normalized before they are
//! matched against the known aliases of a column.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, trace};

use crate::airport::Airport;
use crate::error::{Error, Result};
use crate::measurements::Length;
use crate::perf::PerformanceRow;

mod columns {
    pub const IDENT: (&str, &[&str]) = ("ident", &["ident", "identifier", "icao"]);
    pub const ELEVATION: (&str, &[&str]) = ("elevation_ft", &["elevation_ft", "elevation"]);
    pub const NAME: (&str, &[&str]) = ("name", &["name"]);
    pub const PRESSURE_ALTITUDE: (&str, &[&str]) = (
        "Pressure Altitude (ft)",
        &["pressure altitude (ft)", "pressure altitude"],
    );
    pub const DISTANCE: (&str, &[&str]) = ("Distance (m)", &["distance (m)", "distance"]);
}

/// Normalizes a column header for comparison.
///
/// The header is trimmed, lower-cased, square brackets become parentheses and
/// runs of whitespace collapse into a single space.
pub(crate) fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace('[', "(")
        .replace(']', ")")
}

/// Returns the index of the column matching one of the aliases.
fn find_column(
    headers: &StringRecord,
    (canonical, aliases): (&'static str, &[&str]),
) -> Result<usize> {
    headers
        .iter()
        .map(normalize_header)
        .position(|header| aliases.contains(&header.as_str()))
        .ok_or(Error::MissingColumn(canonical))
}

/// Parses a numeric cell, returning `None` for empty or non-numeric input.
pub(crate) fn parse_number(cell: &str) -> Option<f32> {
    cell.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}

fn line(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}

fn reader<R: Read>(rdr: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(rdr)
}

/// Reads the airport reference table.
///
/// Records without an ident are skipped. An empty or non-numeric elevation is
/// read as unknown.
pub(crate) fn read_airports<R: Read>(rdr: R) -> Result<Vec<Airport>> {
    let mut rdr = reader(rdr);
    let headers = rdr.headers()?.clone();

    let ident_col = find_column(&headers, columns::IDENT)?;
    let elevation_col = find_column(&headers, columns::ELEVATION)?;
    let name_col = find_column(&headers, columns::NAME)?;

    let mut airports = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let ident = record.get(ident_col).unwrap_or_default();

        if ident.is_empty() {
            trace!("skipping airport without ident on line {}", line(&record));
            continue;
        }

        airports.push(Airport {
            ident: ident.to_string(),
            name: record.get(name_col).unwrap_or_default().to_string(),
            elevation: record
                .get(elevation_col)
                .and_then(parse_number)
                .map(Length::ft),
        });
    }

    debug!("read {} airport(s)", airports.len());
    Ok(airports)
}

/// Reads the rows of a performance table in source order.
///
/// Rows whose pressure altitude isn't numeric are dropped. A kept row with a
/// distance that isn't numeric fails the whole table.
pub(crate) fn read_performance_rows<R: Read>(rdr: R) -> Result<Vec<PerformanceRow>> {
    let mut rdr = reader(rdr);
    let headers = rdr.headers()?.clone();

    let pa_col = find_column(&headers, columns::PRESSURE_ALTITUDE)?;
    let distance_col = find_column(&headers, columns::DISTANCE)?;

    let mut rows = Vec::new();

    for record in rdr.records() {
        let record = record?;

        let Some(pressure_altitude) = record.get(pa_col).and_then(parse_number) else {
            trace!(
                "dropping row without numeric pressure altitude on line {}",
                line(&record)
            );
            continue;
        };

        let cell = record.get(distance_col).unwrap_or_default();
        let distance = parse_number(cell).ok_or_else(|| Error::InvalidValue {
            field: columns::DISTANCE.0,
            value: cell.to_string(),
            line: line(&record),
        })?;

        rows.push(PerformanceRow {
            pressure_altitude,
            distance,
        });
    }

    debug!("read {} performance row(s)", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers() {
        assert_eq!(
            normalize_header(" Pressure  Altitude [ft] "),
            "pressure altitude (ft)"
        );
        assert_eq!(normalize_header("Distance (m)"), "distance (m)");
        assert_eq!(normalize_header("\u{feff}ident"), "ident");
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_number(" 1000 "), Some(1000.0));
        assert_eq!(parse_number("-12.5"), Some(-12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn reads_airports_with_extra_columns() {
        let data = "\
id,ident,type,name,elevation_ft
1,EDDH,large_airport,Hamburg Airport,53
2,EDHL,medium_airport,Lübeck Airport,
3,,closed,Nowhere,10
";
        let airports = read_airports(data.as_bytes()).expect("airports should be read");

        assert_eq!(airports.len(), 2);
        assert_eq!(airports[0].ident, "EDDH");
        assert_eq!(airports[0].name, "Hamburg Airport");
        assert_eq!(airports[0].elevation, Some(Length::ft(53.0)));
        assert_eq!(airports[1].elevation, None);
    }

    #[test]
    fn airport_table_requires_elevation() {
        let data = "ident,name\nEDDH,Hamburg Airport\n";
        assert_eq!(
            read_airports(data.as_bytes()),
            Err(Error::MissingColumn("elevation_ft"))
        );
    }

    #[test]
    fn reads_bracketed_performance_header() {
        let data = "\
Pressure Altitude [ft],Distance (m)
0,300
1000,340
";
        let rows = read_performance_rows(data.as_bytes()).expect("rows should be read");

        assert_eq!(
            rows,
            vec![
                PerformanceRow {
                    pressure_altitude: 0.0,
                    distance: 300.0
                },
                PerformanceRow {
                    pressure_altitude: 1000.0,
                    distance: 340.0
                },
            ]
        );
    }

    #[test]
    fn drops_rows_without_pressure_altitude() {
        let data = "\
Pressure Altitude (ft),Distance (m)
0,300
ISA+20,999
,999
2000,380
";
        let rows = read_performance_rows(data.as_bytes()).expect("rows should be read");
        let pas: Vec<f32> = rows.iter().map(|row| row.pressure_altitude).collect();

        assert_eq!(pas, vec![0.0, 2000.0]);
    }

    #[test]
    fn malformed_distance_fails() {
        let data = "Pressure Altitude (ft),Distance (m)\n0,300\n1000,abc\n";

        assert_eq!(
            read_performance_rows(data.as_bytes()),
            Err(Error::InvalidValue {
                field: "Distance (m)",
                value: "abc".to_string(),
                line: 3,
            })
        );
    }

    #[test]
    fn missing_distance_column_fails() {
        let data = "Pressure Altitude (ft),Ground Roll (m)\n0,300\n";

        assert_eq!(
            read_performance_rows(data.as_bytes()),
            Err(Error::MissingColumn("Distance (m)"))
        );
    }
}
