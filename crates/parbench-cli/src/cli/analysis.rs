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

//! Commands that analyze one benchmark result file.

use crate::commands;
use crate::error::CliError;
use crate::report::OutputFormat;
use clap::{Args, Subcommand, ValueEnum};
use parbench::csv::CsvReadConfig;
use parbench::{AnalysisConfig, ParallelFamily, ReferenceList};

/// Input file plus the knobs that shape the analysis.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Benchmark results CSV
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Treat all rows as one comparison set, ignoring ImageSize
    #[arg(long)]
    pub no_group: bool,

    /// Highest OpenMP thread count expected in the results
    #[arg(long, value_name = "N", default_value_t = 8)]
    pub openmp_max: u32,

    /// Highest MPI process count expected in the results
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub mpi_max: u32,

    /// CSV field delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}

impl InputArgs {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            reference: ReferenceList::up_to(self.openmp_max, self.mpi_max),
            group_by_image_size: !self.no_group,
        }
    }

    /// # Errors
    ///
    /// [`CliError::InvalidInput`] if the delimiter is not a single ASCII byte.
    pub fn csv_config(&self) -> Result<CsvReadConfig, CliError> {
        if !self.delimiter.is_ascii() {
            return Err(CliError::invalid_input(format!(
                "delimiter must be an ASCII character, got '{}'",
                self.delimiter
            )));
        }
        Ok(CsvReadConfig {
            delimiter: self.delimiter as u8,
            ..Default::default()
        })
    }
}

/// Parallel family selector for `scaling`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    Openmp,
    Mpi,
}

impl From<FamilyArg> for ParallelFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Openmp => ParallelFamily::OpenMp,
            FamilyArg::Mpi => ParallelFamily::Mpi,
        }
    }
}

/// Analysis commands.
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Summarize speedup and efficiency of every implementation
    ///
    /// Orders each comparison set canonically (Serial, OpenMP by threads,
    /// MPI by processes, others), reports speedup against the serial
    /// baseline and lists the key findings.
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Also write the speedup analysis CSV to this path
        #[arg(long, value_name = "PATH")]
        speedup_csv: Option<String>,
    },

    /// Show the scaling table of one parallel family
    ///
    /// Degree, time, speedup and efficiency per set, followed by the best
    /// runs and the time improvement between adjacent degrees.
    Scaling {
        #[command(flatten)]
        input: InputArgs,

        /// Parallel family
        #[arg(long, value_enum, default_value_t = FamilyArg::Openmp)]
        family: FamilyArg,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write the speedup analysis as CSV
    Speedups {
        #[command(flatten)]
        input: InputArgs,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl AnalysisCommands {
    /// Execute the analysis command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            AnalysisCommands::Analyze {
                input,
                format,
                output,
                speedup_csv,
            } => commands::analyze(&input, format, output.as_deref(), speedup_csv.as_deref()),
            AnalysisCommands::Scaling {
                input,
                family,
                output,
            } => commands::scaling(&input, family.into(), output.as_deref()),
            AnalysisCommands::Speedups { input, output } => {
                commands::speedups(&input, output.as_deref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(delimiter: char) -> InputArgs {
        InputArgs {
            file: "results.csv".to_string(),
            no_group: true,
            openmp_max: 2,
            mpi_max: 0,
            delimiter,
        }
    }

    #[test]
    fn test_analysis_config_from_args() {
        let config = input(',').analysis_config();
        assert!(!config.group_by_image_size);
        assert_eq!(
            config.reference.expected_labels(),
            vec!["Serial", "OpenMP-1T", "OpenMP-2T"]
        );
    }

    #[test]
    fn test_csv_config_delimiter() {
        assert_eq!(input(';').csv_config().unwrap().delimiter, b';');
        assert!(input('§').csv_config().is_err());
    }
}
