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

//! Speedup, efficiency and scaling analysis for parallel benchmark results.
//!
//! This crate turns raw benchmark rows (one measurement per implementation
//! variant, e.g. `Serial`, `OpenMP-4T`, `MPI-2P`) into a [`SummaryReport`]
//! that rendering and export layers consume.
//!
//! # Pipeline
//!
//! ```text
//! RawRow ─► parse_rows ─► build_comparison_sets ─► analyze_sets ─► assemble_summary
//!           (record)      (ordering)               (metrics)       (summary)
//! ```
//!
//! - **Record Parser** ([`parse_rows`]): typed records; malformed rows are
//!   dropped with a [`ParseDiagnostic`].
//! - **Label Normalizer** ([`classify_label`], [`normalize_label`]): `Serial`,
//!   `<Family>-<N><T|P>` or `Other`.
//! - **Ordering Engine** ([`build_comparison_sets`]): one [`ComparisonSet`] per
//!   image size in canonical order, with a designated baseline and a
//!   missing-implementations notice.
//! - **Metrics Engine** ([`analyze_sets`]): speedup, efficiency and scaling
//!   deltas per set.
//! - **Summary Assembler** ([`assemble_summary`]): per-family and
//!   per-implementation aggregates plus global findings.
//!
//! # Examples
//!
//! ```
//! use parbench_core::{analyze, AnalysisConfig, RawRow};
//!
//! let rows = vec![
//!     RawRow::new(2).with("Implementation", "Serial").with("Time(s)", "10.0"),
//!     RawRow::new(3).with("Implementation", "OpenMP-2T").with("Time(s)", "6.0"),
//!     RawRow::new(4).with("Implementation", "OpenMP-4T").with("Time(s)", "3.0"),
//! ];
//!
//! let report = analyze(&rows, &AnalysisConfig::default()).unwrap();
//! let set = &report.sets[0];
//! assert_eq!(set.labels(), vec!["Serial", "OpenMP-2T", "OpenMP-4T"]);
//! assert_eq!(set.speedups()[0], 1.0);
//! assert_eq!(set.scaling[0].improvement_pct, 50.0);
//! ```
//!
//! # Error Handling
//!
//! Row-level problems never abort a run. The only fatal condition is a run
//! without a single valid row ([`AnalysisError::EmptyResultSet`]). A set
//! whose baseline time is unusable is skipped and listed in
//! [`SummaryReport::skipped_sets`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all report types.

mod config;
mod error;
mod label;
mod metrics;
mod ordering;
mod record;
mod row;
mod summary;

pub use config::{AnalysisConfig, ReferenceList, DEFAULT_MPI_DEGREES, DEFAULT_OPENMP_DEGREES};
pub use error::{AnalysisError, LabelError, MetricsError, Result};
pub use label::{
    classify_label, normalize_label, ImplementationFamily, LabelClass, NormalizedLabel,
    ParallelFamily, SERIAL_LABEL,
};
pub use metrics::{
    analyze_set, analyze_sets, efficiency, scaling_delta, scaling_deltas, speedup, ScalingDelta,
    SetMetrics, SkippedSet, SpeedupRecord,
};
pub use ordering::{
    build_comparison_sets, canonical_cmp, merge_records, missing_labels, order_entries,
    BaselineKind, ComparisonEntry, ComparisonSet, MissingImplementations, OrderedSets,
    UNGROUPED_NAME,
};
pub use record::{
    parse_row, parse_rows, DiagnosticKind, MeasurementRecord, ParseDiagnostic, ParseOutcome,
};
pub use row::{
    RawRow, FIELD_DEGREE, FIELD_EXECUTION_TIME, FIELD_IMAGE_SIZE, FIELD_IMPLEMENTATION,
    FIELD_PIXELS, FIELD_SPEED, FIELD_TIME,
};
pub use summary::{
    assemble_summary, FamilyScaling, FamilyStats, Finding, GlobalFindings, ImplementationStats,
    SummaryReport,
};

use tracing::info;

/// Runs the full pipeline over raw rows.
///
/// # Errors
///
/// [`AnalysisError::EmptyResultSet`] if no row is valid, or if every
/// comparison set had to be skipped.
pub fn analyze<'a, I>(rows: I, config: &AnalysisConfig) -> Result<SummaryReport>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let outcome = parse_rows(rows)?;
    analyze_outcome(outcome, config)
}

/// Runs ordering, metrics and summary over an already parsed batch.
///
/// # Errors
///
/// [`AnalysisError::EmptyResultSet`] if the batch holds no records or every
/// comparison set had to be skipped.
pub fn analyze_outcome(outcome: ParseOutcome, config: &AnalysisConfig) -> Result<SummaryReport> {
    let rows_seen = outcome.rows_seen;
    let rows_dropped = outcome.rows_dropped();

    let ordered = build_comparison_sets(&outcome.records, config);
    let (metrics, skipped) = analyze_sets(&ordered.sets);

    let mut report = assemble_summary(metrics).map_err(|_| AnalysisError::EmptyResultSet {
        rows_seen,
        rows_dropped,
    })?;
    report.skipped_sets = skipped;
    report.missing = ordered.missing;
    report.diagnostics = outcome.diagnostics;
    report.rows_seen = rows_seen;
    report.rows_dropped = rows_dropped;

    info!(
        rows = rows_seen,
        dropped = rows_dropped,
        sets = report.sets.len(),
        skipped = report.skipped_sets.len(),
        "benchmark analysis complete"
    );

    Ok(report)
}
