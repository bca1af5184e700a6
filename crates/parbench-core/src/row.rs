// Dweve Parbench - Parallel Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Raw tabular rows as handed over by an input loader.
//!
//! Field names are matched exactly: no case folding and no whitespace
//! trimming is applied to headers.

use std::collections::BTreeMap;

/// Implementation identifier column.
pub const FIELD_IMPLEMENTATION: &str = "Implementation";
/// Execution time column, short spelling. Preferred when both are present.
pub const FIELD_TIME: &str = "Time(s)";
/// Execution time column, long spelling.
pub const FIELD_EXECUTION_TIME: &str = "ExecutionTime(s)";
/// Throughput column in megapixels per second.
pub const FIELD_SPEED: &str = "Speed(Mpx/s)";
/// Grouping key column.
pub const FIELD_IMAGE_SIZE: &str = "ImageSize";
/// Pixel count column.
pub const FIELD_PIXELS: &str = "Pixels";
/// Thread or process count column.
pub const FIELD_DEGREE: &str = "Threads/Processes";

/// One row of named string cells.
///
/// # Examples
///
/// ```
/// use parbench_core::RawRow;
///
/// let row = RawRow::new(2)
///     .with("Implementation", "OpenMP-4T")
///     .with("Time(s)", "3.0");
///
/// assert_eq!(row.get("Implementation"), Some("OpenMP-4T"));
/// assert_eq!(row.get("implementation"), None);
/// assert_eq!(row.line(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    line: usize,
    fields: BTreeMap<String, String>,
}

impl RawRow {
    /// Creates an empty row originating from `line` (1-based, 0 if unknown).
    pub fn new(line: usize) -> Self {
        Self {
            line,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces a cell.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the raw cell for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Source line of the row.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the row carries no cells.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new(0);
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
