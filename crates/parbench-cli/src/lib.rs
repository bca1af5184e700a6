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

//! Parbench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **analyze**: performance summary per comparison set with key findings,
//!   as text, Markdown or JSON
//! - **scaling**: thread/process scaling table of one parallel family
//! - **speedups**: speedup analysis CSV
//!
//! All commands share the input options of [`cli::InputArgs`]: the result
//! file, `--no-group`, `--openmp-max`, `--mpi-max` and `--delimiter`.
//!
//! # Examples
//!
//! ```no_run
//! use parbench_cli::cli::InputArgs;
//! use parbench_cli::commands::speedups;
//!
//! # fn main() -> Result<(), parbench_cli::CliError> {
//! let input = InputArgs {
//!     file: "results/benchmark_results.csv".to_string(),
//!     no_group: false,
//!     openmp_max: 8,
//!     mpi_max: 4,
//!     delimiter: ',',
//! };
//! speedups(&input, Some("results/speedup_analysis.csv"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment
//!
//! - `PARBENCH_MAX_FILE_SIZE`: input size limit in bytes (default 256 MB)
//! - `RUST_LOG`: log filter (default `parbench=info`, `-v` for debug)

pub mod cli;
pub mod commands;
pub mod error;
pub mod report;

pub use error::CliError;
