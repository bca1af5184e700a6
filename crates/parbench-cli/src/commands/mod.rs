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

//! CLI command implementations

mod analyze;
mod scaling;
mod speedups;

pub use analyze::analyze;
pub use scaling::scaling;
pub use speedups::speedups;

use crate::cli::InputArgs;
use crate::error::CliError;
use colored::Colorize;
use parbench::SummaryReport;
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum input file size (256 MB).
/// Can be overridden via the PARBENCH_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "PARBENCH_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before reading.
///
/// # Errors
///
/// - [`CliError::Io`] if the file cannot be inspected or read
/// - [`CliError::FileTooLarge`] past the size limit
///
/// # Examples
///
/// ```no_run
/// use parbench_cli::commands::read_file;
///
/// # fn main() -> Result<(), parbench_cli::CliError> {
/// let content = read_file("results/benchmark_results.csv")?;
/// assert!(content.starts_with("Implementation"));
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// A confirmation goes to stderr when writing to a file.
///
/// # Errors
///
/// [`CliError::Io`] if writing fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(|e| CliError::io_error(p, e))?;
            eprintln!("{} Saved: {}", "✓".green().bold(), p);
            Ok(())
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Read and analyze the input named by `args`.
///
/// # Errors
///
/// Any read, CSV or analysis failure.
pub fn load_report(args: &InputArgs) -> Result<SummaryReport, CliError> {
    let content = read_file(&args.file)?;
    debug!(file = %args.file, bytes = content.len(), "read benchmark results");

    let report =
        parbench::analyze_csv_with_config(&content, &args.analysis_config(), args.csv_config()?)?;
    Ok(report)
}
