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

//! Parbench Command Line Interface

use clap::Parser;
use parbench_cli::cli::Commands;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Parbench - parallel benchmark analysis
///
/// Reads benchmark result tables (serial baseline plus OpenMP and MPI
/// sweeps) and reports speedup, efficiency and scaling.
///
/// # Examples
///
/// ```bash
/// # Summary of a result file
/// parbench analyze results/benchmark_results.csv
///
/// # OpenMP thread scaling table
/// parbench scaling results/benchmark_results.csv --family openmp
///
/// # Speedup analysis as CSV
/// parbench speedups results/benchmark_results.csv -o results/speedup_analysis.csv
/// ```
#[derive(Parser)]
#[command(name = "parbench")]
#[command(author, version, about = "Parbench - parallel benchmark analysis", long_about = None)]
struct Cli {
    /// Log debug output (rows accepted, set ordering)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Logs go to stderr so report output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("parbench={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
