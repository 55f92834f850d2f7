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

use std::collections::HashMap;

use log::debug;

use super::*;

/// Performance tables factory, which is used to build [performance tables].
///
/// [performance tables]: super::PerformanceTables
#[derive(Default)]
pub struct PerformanceTablesBuilder {
    tables: HashMap<WeightClass, PerformanceTable>,
}

impl PerformanceTablesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the table of a weight class, replacing a previously added one.
    pub fn add_table(&mut self, weight: WeightClass, table: PerformanceTable) -> &mut Self {
        debug!(
            "adding performance table for {weight} with {} row(s)",
            table.rows().len()
        );
        self.tables.insert(weight, table);
        self
    }

    /// Builds the tables.
    ///
    /// # Errors
    ///
    /// Returns [`MissingTable`] for the first weight class without a table.
    ///
    /// [`MissingTable`]: Error::MissingTable
    pub fn build(mut self) -> Result<PerformanceTables> {
        let tables = WeightClass::ALL
            .into_iter()
            .map(|weight| {
                self.tables
                    .remove(&weight)
                    .ok_or(Error::MissingTable(weight))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PerformanceTables { tables })
    }
}
