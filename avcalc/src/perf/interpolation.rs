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

/// Returns the indices of the values bracketing the target.
///
/// The values must be sorted ascending and distinct. The lower index points
/// to the largest value less than or equal to the target, the upper index to
/// the smallest value greater than or equal to it. A target outside the
/// values is clamped to the nearest edge, i.e. both indices point to the
/// first or last value.
pub(crate) fn bracket(values: &[f32], target: f32) -> Option<(usize, usize)> {
    if values.is_empty() {
        return None;
    }

    let lower = values.partition_point(|&v| v <= target).saturating_sub(1);
    let upper = values
        .partition_point(|&v| v < target)
        .min(values.len() - 1);

    Some((lower, upper))
}

/// Returns the values bracketing the target.
///
/// The values must be sorted ascending and distinct. A target outside the
/// values is clamped to the nearest edge, which then bounds it on both sides.
/// Returns `None` if there are no values.
///
/// # Examples
///
/// ```
/// # use avcalc::perf::find_bounds;
/// let pa = [0.0, 1000.0, 2000.0];
///
/// assert_eq!(find_bounds(&pa, 1500.0), Some((1000.0, 2000.0)));
/// assert_eq!(find_bounds(&pa, 1000.0), Some((1000.0, 1000.0)));
/// assert_eq!(find_bounds(&pa, 5000.0), Some((2000.0, 2000.0)));
/// ```
pub fn find_bounds(values: &[f32], target: f32) -> Option<(f32, f32)> {
    bracket(values, target).map(|(lower, upper)| (values[lower], values[upper]))
}

/// Interpolates linearly between `(p1, v1)` and `(p2, v2)` at the target.
///
/// Returns `v1` if both points are equal.
pub fn interpolate(v1: f32, v2: f32, p1: f32, p2: f32, target: f32) -> f32 {
    if p1 == p2 {
        return v1;
    }

    v1 + (v2 - v1) * (target - p1) / (p2 - p1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PA: [f32; 4] = [0.0, 1000.0, 2000.0, 4000.0];

    #[test]
    fn brackets_between_points() {
        assert_eq!(find_bounds(&PA, 500.0), Some((0.0, 1000.0)));
        assert_eq!(find_bounds(&PA, 3999.0), Some((2000.0, 4000.0)));
    }

    #[test]
    fn brackets_on_point() {
        for pa in PA {
            assert_eq!(find_bounds(&PA, pa), Some((pa, pa)));
        }
    }

    #[test]
    fn clamps_at_edges() {
        assert_eq!(find_bounds(&PA, -1.0), Some((0.0, 0.0)));
        assert_eq!(find_bounds(&PA, -10_000.0), Some((0.0, 0.0)));
        assert_eq!(find_bounds(&PA, 4001.0), Some((4000.0, 4000.0)));
        assert_eq!(find_bounds(&PA, 1.0e9), Some((4000.0, 4000.0)));
    }

    #[test]
    fn single_value() {
        assert_eq!(find_bounds(&[500.0], 0.0), Some((500.0, 500.0)));
        assert_eq!(find_bounds(&[500.0], 900.0), Some((500.0, 500.0)));
    }

    #[test]
    fn no_values() {
        assert_eq!(find_bounds(&[], 0.0), None);
    }

    #[test]
    fn interpolates_linearly() {
        assert_eq!(interpolate(300.0, 340.0, 0.0, 1000.0, 500.0), 320.0);
        assert_eq!(interpolate(300.0, 340.0, 0.0, 1000.0, 0.0), 300.0);
        assert_eq!(interpolate(300.0, 340.0, 0.0, 1000.0, 1000.0), 340.0);
    }

    #[test]
    fn equal_points_return_first_value() {
        assert_eq!(interpolate(300.0, 999.0, 1000.0, 1000.0, 5000.0), 300.0);
    }
}
