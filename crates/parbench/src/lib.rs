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

//! # Parbench - Parallel Benchmark Analysis
//!
//! Parbench reads the result table of a parallel benchmark run (a serial
//! baseline plus OpenMP thread and MPI process sweeps, optionally across
//! several image sizes) and computes speedup, efficiency and scaling between
//! adjacent degrees of parallelism.
//!
//! ## Quick Start
//!
//! ```rust
//! use parbench::{analyze_csv, AnalysisConfig};
//!
//! let csv = "\
//! Implementation,Time(s),Speed(Mpx/s)
//! OpenMP-4T,3.0,0.33
//! Serial,10.0,0.10
//! OpenMP-2T,6.0,0.17
//! ";
//!
//! let report = analyze_csv(csv, &AnalysisConfig::default()).unwrap();
//! let set = &report.sets[0];
//!
//! assert_eq!(set.labels(), vec!["Serial", "OpenMP-2T", "OpenMP-4T"]);
//! assert_eq!(set.scaling[0].improvement_pct, 50.0);
//! ```
//!
//! ## Modules
//!
//! - [`csv`]: CSV loading and the speedup-analysis export
//!
//! Everything else is re-exported from `parbench-core`.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all report types

pub use parbench_core::{
    // Pipeline
    analyze,
    analyze_outcome,
    analyze_set,
    analyze_sets,
    assemble_summary,
    build_comparison_sets,
    parse_rows,
    // Label handling
    classify_label,
    normalize_label,
    ImplementationFamily,
    LabelClass,
    ParallelFamily,
    // Metrics
    efficiency,
    scaling_delta,
    speedup,
    // Configuration
    AnalysisConfig,
    ReferenceList,
    // Errors
    AnalysisError,
    LabelError,
    MetricsError,
    // Report types
    BaselineKind,
    ComparisonSet,
    DiagnosticKind,
    FamilyScaling,
    FamilyStats,
    Finding,
    GlobalFindings,
    ImplementationStats,
    MeasurementRecord,
    MissingImplementations,
    ParseDiagnostic,
    ParseOutcome,
    RawRow,
    ScalingDelta,
    SetMetrics,
    SkippedSet,
    SpeedupRecord,
    SummaryReport,
    UNGROUPED_NAME,
};

mod error;
pub use error::{Error, Result};

/// CSV loading and export.
pub mod csv {
    pub use parbench_csv::{
        read_rows, read_rows_from_reader, read_rows_with_config, to_speedup_csv,
        write_speedup_csv, CsvError, CsvReadConfig, DEFAULT_MAX_ROWS, SPEEDUP_HEADER,
    };
}

/// Analyze benchmark CSV text.
///
/// # Errors
///
/// [`Error::Csv`] if the text is not a benchmark table,
/// [`Error::Analysis`] if no row is usable.
///
/// # Examples
///
/// ```rust
/// use parbench::{analyze_csv, AnalysisConfig};
///
/// let err = analyze_csv("Implementation,Time(s)\nSerial,N/A\n", &AnalysisConfig::default())
///     .unwrap_err();
/// assert!(err.is_empty_result());
/// ```
#[inline]
pub fn analyze_csv(input: &str, config: &AnalysisConfig) -> Result<SummaryReport> {
    analyze_csv_with_config(input, config, csv::CsvReadConfig::default())
}

/// Analyze benchmark CSV text with explicit CSV settings.
pub fn analyze_csv_with_config(
    input: &str,
    config: &AnalysisConfig,
    csv_config: csv::CsvReadConfig,
) -> Result<SummaryReport> {
    let rows = parbench_csv::read_rows_with_config(input, csv_config)?;
    Ok(analyze(&rows, config)?)
}

/// Render the speedup analysis of a report as CSV.
///
/// # Examples
///
/// ```rust
/// use parbench::{analyze_csv, speedup_csv, AnalysisConfig};
///
/// let report = analyze_csv("Implementation,Time(s)\nSerial,2.0\nMPI-2P,1.0\n", &AnalysisConfig::default()).unwrap();
/// let csv = speedup_csv(&report).unwrap();
/// assert!(csv.ends_with("MPI-2P,,,2,1.000000,2.0000,100.00\n"));
/// ```
#[inline]
pub fn speedup_csv(report: &SummaryReport) -> Result<String> {
    Ok(parbench_csv::to_speedup_csv(&report.sets)?)
}
