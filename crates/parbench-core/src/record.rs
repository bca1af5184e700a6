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

//! Record Parser: raw rows to typed measurement records.
//!
//! Malformed rows are dropped with a [`ParseDiagnostic`] and parsing carries
//! on. Only a run in which *every* row is dropped fails, with
//! [`AnalysisError::EmptyResultSet`].

use crate::error::{AnalysisError, Result};
use crate::label::{normalize_label, ImplementationFamily, LabelClass};
use crate::row::{
    RawRow, FIELD_DEGREE, FIELD_EXECUTION_TIME, FIELD_IMAGE_SIZE, FIELD_IMPLEMENTATION,
    FIELD_PIXELS, FIELD_SPEED, FIELD_TIME,
};
use std::fmt;
use tracing::{debug, warn};

/// One validated benchmark measurement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementRecord {
    /// Canonical implementation label.
    pub label: String,
    /// Classification of the label.
    pub class: LabelClass,
    /// Grouping key.
    pub image_size: Option<String>,
    /// Number of pixels processed.
    pub pixel_count: Option<u64>,
    /// Wall-clock time, always finite and strictly positive.
    pub execution_time_seconds: f64,
    /// Throughput in megapixels per second.
    pub throughput_mpx_per_s: Option<f64>,
    /// Source line of the row.
    pub line: usize,
    /// Position among accepted records, in input order.
    pub index: usize,
}

impl MeasurementRecord {
    pub fn family(&self) -> ImplementationFamily {
        self.class.family()
    }

    pub fn parallelism_degree(&self) -> Option<u32> {
        self.class.degree()
    }
}

/// What went wrong with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    /// A required field is absent or blank.
    MissingField,
    /// A required numeric field does not parse.
    InvalidNumber,
    /// The execution time is zero, negative or not finite.
    InvalidTime,
    /// The label names a parallel family without a usable degree.
    MalformedLabel,
    /// An optional field does not parse; the row is kept without it.
    InvalidOptionalField,
}

impl DiagnosticKind {
    /// True if the row carrying this diagnostic was dropped.
    pub fn drops_row(self) -> bool {
        !matches!(self, Self::InvalidOptionalField)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "MissingField"),
            Self::InvalidNumber => write!(f, "InvalidNumber"),
            Self::InvalidTime => write!(f, "InvalidTime"),
            Self::MalformedLabel => write!(f, "MalformedLabel"),
            Self::InvalidOptionalField => write!(f, "InvalidOptionalField"),
        }
    }
}

/// A non-fatal problem found while parsing one row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseDiagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Source line (1-based, 0 if unknown).
    pub line: usize,
    /// Trimmed implementation label, when one was readable.
    pub label: Option<String>,
}

impl ParseDiagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}: {}", self.kind, self.line, self.message)?;
        if let Some(label) = &self.label {
            write!(f, " ({})", label)?;
        }
        Ok(())
    }
}

/// Result of parsing a batch of rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOutcome {
    /// Accepted records in input order.
    pub records: Vec<MeasurementRecord>,
    /// Every diagnostic raised, in input order.
    pub diagnostics: Vec<ParseDiagnostic>,
    /// Number of rows handed to the parser.
    pub rows_seen: usize,
}

impl ParseOutcome {
    /// Number of rows that were dropped.
    pub fn rows_dropped(&self) -> usize {
        self.rows_seen - self.records.len()
    }
}

/// Parses raw rows into measurement records.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyResultSet`] if no row survives.
///
/// # Examples
///
/// ```
/// use parbench_core::{parse_rows, RawRow};
///
/// let rows = vec![
///     RawRow::new(2).with("Implementation", "Serial").with("Time(s)", "10.0"),
///     RawRow::new(3).with("Implementation", "OpenMP-2T").with("Time(s)", "N/A"),
///     RawRow::new(4).with("Implementation", "OpenMP-4T").with("ExecutionTime(s)", "3.0"),
/// ];
///
/// let outcome = parse_rows(&rows).unwrap();
/// assert_eq!(outcome.records.len(), 2);
/// assert_eq!(outcome.rows_dropped(), 1);
/// assert_eq!(outcome.diagnostics[0].line, 3);
/// ```
pub fn parse_rows<'a, I>(rows: I) -> Result<ParseOutcome>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut records = Vec::new();
    let mut diagnostics = Vec::new();
    let mut rows_seen = 0;

    for row in rows {
        rows_seen += 1;
        match parse_row(row) {
            Ok((mut record, warnings)) => {
                record.index = records.len();
                for warning in &warnings {
                    warn!(line = warning.line, "{}", warning.message);
                }
                diagnostics.extend(warnings);
                debug!(
                    line = record.line,
                    label = %record.label,
                    time = record.execution_time_seconds,
                    "accepted benchmark row"
                );
                records.push(record);
            }
            Err(diagnostic) => {
                warn!(
                    line = diagnostic.line,
                    label = diagnostic.label.as_deref().unwrap_or("unknown"),
                    "Skipping invalid row: {}",
                    diagnostic.message
                );
                diagnostics.push(diagnostic);
            }
        }
    }

    if records.is_empty() {
        return Err(AnalysisError::EmptyResultSet {
            rows_seen,
            rows_dropped: rows_seen,
        });
    }

    Ok(ParseOutcome {
        records,
        diagnostics,
        rows_seen,
    })
}

/// Parses a single row.
///
/// On success returns the record (with `index` left at 0) and any
/// optional-field warnings. On failure returns the diagnostic that caused the
/// row to be dropped.
pub fn parse_row(
    row: &RawRow,
) -> std::result::Result<(MeasurementRecord, Vec<ParseDiagnostic>), ParseDiagnostic> {
    let line = row.line();

    let raw_label = non_blank(row.get(FIELD_IMPLEMENTATION)).ok_or_else(|| {
        ParseDiagnostic::new(
            DiagnosticKind::MissingField,
            format!("missing field '{}'", FIELD_IMPLEMENTATION),
            line,
        )
    })?;

    let (time_field, raw_time) = non_blank(row.get(FIELD_TIME))
        .map(|v| (FIELD_TIME, v))
        .or_else(|| non_blank(row.get(FIELD_EXECUTION_TIME)).map(|v| (FIELD_EXECUTION_TIME, v)))
        .ok_or_else(|| {
            ParseDiagnostic::new(
                DiagnosticKind::MissingField,
                format!(
                    "missing field '{}' or '{}'",
                    FIELD_TIME, FIELD_EXECUTION_TIME
                ),
                line,
            )
            .with_label(raw_label)
        })?;

    let time: f64 = raw_time.parse().map_err(|_| {
        ParseDiagnostic::new(
            DiagnosticKind::InvalidNumber,
            format!("field '{}' is not a number: '{}'", time_field, raw_time),
            line,
        )
        .with_label(raw_label)
    })?;
    if !time.is_finite() || time <= 0.0 {
        return Err(ParseDiagnostic::new(
            DiagnosticKind::InvalidTime,
            format!("field '{}' must be positive and finite, got {}", time_field, raw_time),
            line,
        )
        .with_label(raw_label));
    }

    let mut warnings = Vec::new();

    let degree_hint = optional_field(row, FIELD_DEGREE, parse_count, &mut warnings, raw_label)
        .and_then(|d| u32::try_from(d).ok());

    let normalized = normalize_label(raw_label, degree_hint).map_err(|e| {
        ParseDiagnostic::new(DiagnosticKind::MalformedLabel, e.to_string(), line)
            .with_label(raw_label)
    })?;

    let throughput = optional_field(row, FIELD_SPEED, parse_throughput, &mut warnings, raw_label);
    let pixel_count = optional_field(row, FIELD_PIXELS, parse_count, &mut warnings, raw_label);
    let image_size = non_blank(row.get(FIELD_IMAGE_SIZE)).map(str::to_string);

    Ok((
        MeasurementRecord {
            label: normalized.label,
            class: normalized.class,
            image_size,
            pixel_count,
            execution_time_seconds: time,
            throughput_mpx_per_s: throughput,
            line,
            index: 0,
        },
        warnings,
    ))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn optional_field<T>(
    row: &RawRow,
    field: &str,
    parse: fn(&str) -> Option<T>,
    warnings: &mut Vec<ParseDiagnostic>,
    label: &str,
) -> Option<T> {
    let raw = non_blank(row.get(field))?;
    let parsed = parse(raw);
    if parsed.is_none() {
        warnings.push(
            ParseDiagnostic::new(
                DiagnosticKind::InvalidOptionalField,
                format!("ignoring unparseable field '{}': '{}'", field, raw),
                row.line(),
            )
            .with_label(label),
        );
    }
    parsed
}

/// Non-negative integer; integral floats such as `4.0` are accepted.
fn parse_count(raw: &str) -> Option<u64> {
    if let Ok(n) = raw.parse::<u64>() {
        return Some(n);
    }
    let f: f64 = raw.parse().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn parse_throughput(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}
