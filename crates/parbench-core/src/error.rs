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

//! Error types for benchmark analysis.
//!
//! Only two conditions ever surface as `Err`: a run that ends up with no
//! usable rows ([`AnalysisError::EmptyResultSet`]) and a comparison set whose
//! baseline cannot be divided by ([`MetricsError::DivideByZeroBaseline`]).
//! The latter is caught by the pipeline and recorded as a skipped set, so
//! callers of [`crate::analyze`] only ever see the former.

use thiserror::Error;

/// Fatal analysis failures.
///
/// # Examples
///
/// ```
/// use parbench_core::AnalysisError;
///
/// let err = AnalysisError::EmptyResultSet { rows_seen: 3, rows_dropped: 3 };
/// assert_eq!(
///     err.to_string(),
///     "No valid benchmark rows: 3 of 3 rows were dropped"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Zero valid rows remained after parsing.
    #[error("No valid benchmark rows: {rows_dropped} of {rows_seen} rows were dropped")]
    EmptyResultSet {
        /// Number of rows handed to the parser.
        rows_seen: usize,
        /// Number of rows rejected as malformed.
        rows_dropped: usize,
    },
}

/// Failures local to a single comparison set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// The baseline time is zero, negative or not finite.
    #[error("Baseline '{baseline}' in set '{group}' has unusable time {time}; speedups not computed")]
    DivideByZeroBaseline {
        /// Display name of the comparison set.
        group: String,
        /// Label of the baseline entry.
        baseline: String,
        /// The offending baseline time in seconds.
        time: f64,
    },
}

/// Reasons a raw implementation label is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The label is empty after trimming.
    #[error("empty implementation label")]
    Empty,

    /// The label names a parallel family but its degree cannot be parsed.
    #[error("label '{label}' has no parseable parallelism degree")]
    MalformedDegree {
        /// The offending label, trimmed.
        label: String,
    },

    /// The degree parsed but is zero.
    #[error("label '{label}' has parallelism degree 0")]
    ZeroDegree {
        /// The offending label, trimmed.
        label: String,
    },
}

/// Result type for fatal analysis failures.
pub type Result<T> = std::result::Result<T, AnalysisError>;
