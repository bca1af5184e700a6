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

//! CSV input and output for Parbench.
//!
//! This crate sits at both ends of the analysis pipeline:
//!
//! - **Loading**: benchmark result CSV text becomes [`RawRow`]s for the
//!   record parser. Two layouts are common and both load the same way:
//!
//!   ```text
//!   Implementation,Time(s),Speed(Mpx/s)
//!   Serial,1.000000,4.19
//!   OpenMP-4T,0.280000,14.98
//!
//!   Implementation,ImageSize,Pixels,Threads/Processes,ExecutionTime(s)
//!   OpenMP,1024x1024,1048576,4,0.400
//!   ```
//!
//! - **Export**: the speedup analysis of a report as CSV, one row per
//!   implementation per set.
//!
//! # Examples
//!
//! ```
//! use parbench_core::{analyze, AnalysisConfig};
//! use parbench_csv::{read_rows, to_speedup_csv};
//!
//! let rows = read_rows("Implementation,Time(s)\nSerial,10.0\nOpenMP-2T,6.0\nOpenMP-4T,3.0\n").unwrap();
//! let report = analyze(&rows, &AnalysisConfig::default()).unwrap();
//!
//! let csv = to_speedup_csv(&report.sets).unwrap();
//! assert!(csv.contains("OpenMP-4T,,,4,3.000000,3.3333,83.33"));
//! ```
//!
//! [`RawRow`]: parbench_core::RawRow

mod error;
mod from_csv;
mod to_csv;

pub use error::{CsvError, Result};
pub use from_csv::{
    read_rows, read_rows_from_reader, read_rows_with_config, CsvReadConfig, DEFAULT_MAX_ROWS,
};
pub use to_csv::{to_speedup_csv, write_speedup_csv, SPEEDUP_HEADER};
