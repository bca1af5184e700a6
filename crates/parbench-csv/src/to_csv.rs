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

//! Speedup-analysis CSV export.

use crate::error::{CsvError, Result};
use parbench_core::{SetMetrics, SpeedupRecord};
use std::io::Write;

/// Header of the speedup-analysis CSV.
pub const SPEEDUP_HEADER: [&str; 7] = [
    "Implementation",
    "ImageSize",
    "Pixels",
    "Threads/Processes",
    "ExecutionTime",
    "Speedup",
    "Efficiency(%)",
];

/// Renders the speedup analysis of every set as CSV text.
///
/// One row per [`SpeedupRecord`], set by set, each set in canonical order.
/// Absent values (no image size, no degree, no efficiency) are empty cells.
///
/// # Examples
///
/// ```
/// use parbench_core::{analyze, AnalysisConfig, RawRow};
/// use parbench_csv::to_speedup_csv;
///
/// let rows = vec![
///     RawRow::new(2).with("Implementation", "Serial").with("Time(s)", "10.0"),
///     RawRow::new(3).with("Implementation", "OpenMP-4T").with("Time(s)", "2.5"),
/// ];
/// let report = analyze(&rows, &AnalysisConfig::default()).unwrap();
/// let csv = to_speedup_csv(&report.sets).unwrap();
///
/// let lines: Vec<&str> = csv.lines().collect();
/// assert_eq!(lines[0], "Implementation,ImageSize,Pixels,Threads/Processes,ExecutionTime,Speedup,Efficiency(%)");
/// assert_eq!(lines[1], "Serial,,,,10.000000,1.0000,");
/// assert_eq!(lines[2], "OpenMP-4T,,,4,2.500000,4.0000,100.00");
/// ```
pub fn to_speedup_csv(sets: &[SetMetrics]) -> Result<String> {
    let rows: usize = sets.iter().map(|s| s.records.len()).sum();
    let mut buffer = Vec::with_capacity(64 * (rows + 1));

    write_speedup_csv(sets, &mut buffer)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "speedup CSV output".to_string(),
    })
}

/// Writes the speedup analysis of every set to `writer`.
///
/// # Errors
///
/// [`CsvError::CsvLib`] or [`CsvError::Io`] if writing fails.
pub fn write_speedup_csv<W: Write>(sets: &[SetMetrics], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(SPEEDUP_HEADER)?;
    for record in sets.iter().flat_map(|s| s.records.iter()) {
        wtr.write_record(speedup_row(record))?;
    }

    wtr.flush()?;
    Ok(())
}

fn speedup_row(record: &SpeedupRecord) -> [String; 7] {
    [
        record.label.clone(),
        record.image_size.clone().unwrap_or_default(),
        record.pixel_count.map(|p| p.to_string()).unwrap_or_default(),
        record
            .parallelism_degree
            .map(|d| d.to_string())
            .unwrap_or_default(),
        format!("{:.6}", record.execution_time_seconds),
        format!("{:.4}", record.speedup),
        record
            .efficiency
            .map(|e| format!("{:.2}", e))
            .unwrap_or_default(),
    ]
}
