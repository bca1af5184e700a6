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

//! Speedups command - speedup analysis CSV export

use super::{load_report, write_output};
use crate::cli::InputArgs;
use crate::error::CliError;

/// Write the speedup analysis CSV of a result file.
///
/// # Errors
///
/// Returns `Err` on read, analysis or write failure.
pub fn speedups(input: &InputArgs, output: Option<&str>) -> Result<(), CliError> {
    let report = load_report(input)?;
    let csv = parbench::speedup_csv(&report)?;
    write_output(&csv, output)
}
