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

//! Analyze command - performance summary of a result file

use super::{load_report, write_output};
use crate::cli::InputArgs;
use crate::error::CliError;
use crate::report::{render, OutputFormat};

/// Analyze a benchmark result file and print the summary.
///
/// # Arguments
///
/// * `input` - Input file and analysis options
/// * `format` - Text, Markdown or JSON
/// * `output` - Output file path; stdout if `None`
/// * `speedup_csv` - If set, the speedup analysis CSV is written there too
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, holds no usable row, or an
/// output cannot be written.
///
/// # Examples
///
/// ```no_run
/// use parbench_cli::cli::InputArgs;
/// use parbench_cli::commands::analyze;
/// use parbench_cli::report::OutputFormat;
///
/// # fn main() -> Result<(), parbench_cli::CliError> {
/// let input = InputArgs {
///     file: "results/benchmark_results.csv".to_string(),
///     no_group: false,
///     openmp_max: 8,
///     mpi_max: 4,
///     delimiter: ',',
/// };
/// analyze(&input, OutputFormat::Markdown, Some("summary.md"), None)?;
/// # Ok(())
/// # }
/// ```
pub fn analyze(
    input: &InputArgs,
    format: OutputFormat,
    output: Option<&str>,
    speedup_csv: Option<&str>,
) -> Result<(), CliError> {
    let report = load_report(input)?;

    let rendered = render(&report, format)?;
    write_output(&rendered, output)?;

    if let Some(path) = speedup_csv {
        let csv = parbench::speedup_csv(&report)?;
        write_output(&csv, Some(path))?;
    }

    Ok(())
}
