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

//! Scaling command - thread/process scaling of one parallel family

use super::{load_report, write_output};
use crate::cli::InputArgs;
use crate::error::CliError;
use crate::report::scaling_table;
use parbench::ParallelFamily;

/// Print the scaling table of `family`.
///
/// # Errors
///
/// [`CliError::NoFamilyData`] if no set holds a run of `family`, plus any
/// read or analysis failure.
pub fn scaling(
    input: &InputArgs,
    family: ParallelFamily,
    output: Option<&str>,
) -> Result<(), CliError> {
    let report = load_report(input)?;

    let table = scaling_table(&report, family).ok_or_else(|| CliError::NoFamilyData {
        family: family.name().to_string(),
    })?;
    write_output(&table, output)
}
