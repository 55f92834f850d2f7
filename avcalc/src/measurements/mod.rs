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

//! Physical quantities with their unit of measure.
//!
//! A [`Measurement`] couples a value with a unit. Conversions go through the
//! SI unit of the quantity, except when the target unit is the unit the value
//! is already in. In that case the value is returned untouched, which keeps
//! tabulated feet and meters exact.

use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) mod constants;
mod length;
mod mass;
mod pressure;

pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use pressure::{Pressure, PressureUnit};

/// A unit in which a physical quantity is measured.
///
/// Each quantity has an SI unit through which conversions are done.
pub trait UnitOfMeasure<T>: Copy + PartialEq {
    fn symbol(&self) -> &'static str;

    /// Converts a value given in the SI unit into the unit `to`.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts a value given in this unit into the SI unit.
    fn to_si(&self, value: &T) -> T;
}

/// A value with a unit of measure.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

impl<U> Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    pub fn value(&self) -> &f32 {
        &self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Returns the value in the SI unit.
    pub fn to_si(&self) -> f32 {
        self.unit.to_si(&self.value)
    }

    /// Returns the measurement converted into the unit.
    pub fn convert_to(&self, unit: U) -> Self {
        if self.unit == unit {
            return *self;
        }

        Self {
            value: U::from_si(self.to_si(), &unit),
            unit,
        }
    }
}

impl<U> fmt::Display for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, self.unit.symbol()),
            None => write!(f, "{} {}", self.value, self.unit.symbol()),
        }
    }
}

impl<U> Add for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    /// Adds `rhs` in the unit of `self`.
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl<U> Sub for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    /// Subtracts `rhs` in the unit of `self`.
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value - rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl<U> Neg for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_unit_conversion_is_exact() {
        let d = Length::ft(1234.5);
        assert_eq!(d.convert_to(LengthUnit::Feet), d);
    }

    #[test]
    fn feet_to_meters() {
        let d = Length::ft(1000.0).convert_to(LengthUnit::Meters);
        assert!((d.value() - 304.8).abs() < 0.001);
    }

    #[test]
    fn add_converts_into_lhs_unit() {
        let sum = Length::m(100.0) + Length::ft(1000.0);
        assert_eq!(sum.unit(), &LengthUnit::Meters);
        assert!((sum.value() - 404.8).abs() < 0.001);
    }

    #[test]
    fn sub_and_neg() {
        assert_eq!(Length::m(50.0) - Length::m(20.0), Length::m(30.0));
        assert_eq!(-Length::m(20.0), Length::m(-20.0));
    }

    #[test]
    fn display_honours_precision() {
        assert_eq!(format!("{:.1}", Length::m(320.0)), "320.0 m");
        assert_eq!(format!("{:.2}", Pressure::STD), "1013.25 hPa");
        assert_eq!(format!("{}", Mass::kg(1157.0)), "1157 kg");
    }
}
