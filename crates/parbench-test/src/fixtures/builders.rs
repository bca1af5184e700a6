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

//! Builders for [`RawRow`] values.

use parbench_core::{RawRow, FIELD_DEGREE, FIELD_EXECUTION_TIME, FIELD_IMAGE_SIZE, FIELD_IMPLEMENTATION, FIELD_TIME};

/// A thread-sweep row with no source line.
pub fn row(label: &str, time: &str) -> RawRow {
    row_at(0, label, time)
}

/// A thread-sweep row at `line`.
pub fn row_at(line: usize, label: &str, time: &str) -> RawRow {
    RawRow::new(line)
        .with(FIELD_IMPLEMENTATION, label)
        .with(FIELD_TIME, time)
}

/// An image-size row using the long time spelling.
pub fn sized_row(label: &str, size: &str, degree: u32, time: &str) -> RawRow {
    RawRow::new(0)
        .with(FIELD_IMPLEMENTATION, label)
        .with(FIELD_IMAGE_SIZE, size)
        .with(FIELD_DEGREE, degree.to_string())
        .with(FIELD_EXECUTION_TIME, time)
}

/// Rows for `(label, time)` pairs, numbered from line 2.
pub fn rows(pairs: &[(&str, &str)]) -> Vec<RawRow> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (label, time))| row_at(i + 2, label, time))
        .collect()
}
