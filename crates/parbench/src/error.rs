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

//! Unified error type for the facade.

use parbench_core::AnalysisError;
use parbench_csv::CsvError;
use thiserror::Error;

/// Anything that can stop a CSV-to-report run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be read as CSV.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// The input held no usable benchmark rows.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl Error {
    /// True when the input was well-formed CSV but no row was usable.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Analysis(AnalysisError::EmptyResultSet { .. }))
    }
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
