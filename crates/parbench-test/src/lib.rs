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

//! Shared test fixtures for Parbench crates.
//!
//! - **CSV samples** ([`fixtures`]): benchmark result files in both column
//!   layouts the loaders must accept.
//! - **Row builders** ([`fixtures::builders`]): terse construction of
//!   [`RawRow`] values.
//!
//! # Quick Start
//!
//! ```rust
//! use parbench_test::fixtures::{self, builders::row};
//!
//! let csv = fixtures::REFERENCE_CSV;
//! assert!(csv.starts_with("Implementation,"));
//!
//! let rows = vec![row("Serial", "10.0"), row("OpenMP-2T", "6.0")];
//! assert_eq!(rows[1].get("Time(s)"), Some("6.0"));
//! ```

use parbench_core::RawRow;

/// Canonical test fixtures.
pub mod fixtures;

pub use fixtures::builders::{row, row_at, sized_row};

/// Type alias for a list of named CSV fixtures.
pub type FixtureList = Vec<(&'static str, &'static str)>;

/// Splits CSV text into [`RawRow`]s without any CSV library.
///
/// Only for fixtures: no quoting support. Line numbers are 1-based with the
/// header on line 1.
pub fn naive_rows(csv: &str) -> Vec<RawRow> {
    let mut lines = csv.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());
    let Some((_, header)) = lines.next() else {
        return Vec::new();
    };
    let names: Vec<&str> = header.split(',').collect();

    lines
        .map(|(i, line)| {
            names
                .iter()
                .zip(line.split(','))
                .fold(RawRow::new(i + 1), |row, (name, cell)| row.with(*name, cell))
        })
        .collect()
}
