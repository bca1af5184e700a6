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

//! CSV text to raw benchmark rows.

use crate::error::{CsvError, Result};
use parbench_core::{RawRow, FIELD_EXECUTION_TIME, FIELD_IMPLEMENTATION, FIELD_TIME};
use std::io::Read;
use tracing::{debug, warn};

/// Default maximum number of data rows read from one input.
///
/// Benchmark result files hold tens to thousands of rows; the limit only
/// guards against feeding the loader something that is not a result file.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for reading benchmark CSV input.
///
/// # Examples
///
/// ```
/// use parbench_csv::CsvReadConfig;
///
/// let config = CsvReadConfig {
///     delimiter: b';',
///     ..Default::default()
/// };
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvReadConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Maximum number of data rows; more is [`CsvError::SecurityLimit`].
    pub max_rows: usize,
}

impl Default for CsvReadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Reads CSV text into raw rows with the default configuration.
///
/// The first line is the header. Every following record becomes a
/// [`RawRow`] keyed by header name and carrying its 1-based source line.
/// Header names and cells are kept verbatim; validation happens in the
/// record parser. A header lacking a required column is not an error here:
/// its rows reach the record parser and are dropped there.
///
/// # Errors
///
/// - [`CsvError::ParseError`] on CSV framing errors.
/// - [`CsvError::SecurityLimit`] past [`DEFAULT_MAX_ROWS`] rows.
///
/// # Examples
///
/// ```
/// use parbench_csv::read_rows;
///
/// let rows = read_rows("Implementation,Time(s)\nSerial,10.0\nOpenMP-2T,6.0\n").unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].get("Implementation"), Some("OpenMP-2T"));
/// assert_eq!(rows[1].line(), 3);
/// ```
pub fn read_rows(csv: &str) -> Result<Vec<RawRow>> {
    read_rows_with_config(csv, CsvReadConfig::default())
}

/// Reads CSV text into raw rows.
///
/// # Errors
///
/// See [`read_rows`].
pub fn read_rows_with_config(csv: &str, config: CsvReadConfig) -> Result<Vec<RawRow>> {
    read_rows_from_reader(csv.as_bytes(), config)
}

/// Reads raw rows from any reader.
///
/// Invalid UTF-8 is replaced rather than rejected, so a stray byte in an
/// otherwise valid file only affects the cell it sits in.
///
/// # Errors
///
/// See [`read_rows`].
pub fn read_rows_from_reader<R: Read>(reader: R, config: CsvReadConfig) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .byte_headers()
        .map_err(|e| CsvError::ParseError {
            line: 1,
            message: e.to_string(),
        })?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        debug!("CSV input has no header; no rows read");
        return Ok(Vec::new());
    }
    warn_missing_columns(&headers);

    let mut rows = Vec::new();
    for (record_idx, result) in csv_reader.byte_records().enumerate() {
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        let record = result.map_err(|e| CsvError::ParseError {
            line: e
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(record_idx + 2),
            message: e.to_string(),
        })?;

        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(record_idx + 2);

        let mut row = RawRow::new(line);
        for (name, cell) in headers.iter().zip(record.iter()) {
            if name.is_empty() || row.get(name).is_some() {
                continue;
            }
            row.insert(name.as_str(), String::from_utf8_lossy(cell));
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "read benchmark CSV");
    Ok(rows)
}

fn warn_missing_columns(headers: &[String]) {
    let has = |name: &str| headers.iter().any(|h| h == name);

    if !has(FIELD_IMPLEMENTATION) {
        warn!(
            "header has no '{}' column; every row will be dropped",
            FIELD_IMPLEMENTATION
        );
    }
    if !has(FIELD_TIME) && !has(FIELD_EXECUTION_TIME) {
        warn!(
            "header has neither '{}' nor '{}'; every row will be dropped",
            FIELD_TIME, FIELD_EXECUTION_TIME
        );
    }
}
