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

use std::fmt;

use crate::perf::WeightClass;

/// Errors raised while loading reference data or running a calculation.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The airport is not in the reference table or has no known elevation.
    UnknownIdent(String),
    /// No performance data exists for this takeoff weight in kg.
    UnsupportedWeight(u16),
    /// The performance table of a weight class was never provided.
    MissingTable(WeightClass),
    /// A performance table without a single usable row.
    EmptyTable,
    /// A required column is absent from the source header.
    MissingColumn(&'static str),
    /// A cell could not be parsed.
    InvalidValue {
        field: &'static str,
        value: String,
        line: u64,
    },
    /// A string that doesn't describe the expected value.
    UnexpectedString,
    /// An input outside the range the calculator accepts.
    ImplausibleValue,
    Io(String),
    Csv(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIdent(ident) => {
                write!(f, "ICAO code {ident} not found or missing elevation")
            }
            Self::UnsupportedWeight(kg) => {
                write!(f, "no performance data for a takeoff weight of {kg} kg")
            }
            Self::MissingTable(weight) => {
                write!(f, "performance table for {weight} is missing")
            }
            Self::EmptyTable => write!(f, "performance table has no usable rows"),
            Self::MissingColumn(column) => write!(f, "missing required column: {column}"),
            Self::InvalidValue { field, value, line } => {
                write!(f, "invalid value for {field} on line {line}: \"{value}\"")
            }
            Self::UnexpectedString => write!(f, "unexpected string"),
            Self::ImplausibleValue => write!(f, "implausible value"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
