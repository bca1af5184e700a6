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

//! Structured error types for the Parbench CLI.
//!
//! All command handlers return `Result<T, CliError>`; `main` prints the
//! message and exits non-zero.

use parbench::csv::CsvError;
use parbench::AnalysisError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CliError {
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("JSON conversion error: {0}")]
    JsonConversion(String),

    /// A scaling table was requested for a family with no results.
    #[error("No {family} results found in any comparison set")]
    NoFamilyData { family: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<parbench::Error> for CliError {
    fn from(err: parbench::Error) -> Self {
        match err {
            parbench::Error::Csv(e) => e.into(),
            parbench::Error::Analysis(e) => e.into(),
        }
    }
}

impl From<CsvError> for CliError {
    fn from(err: CsvError) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<AnalysisError> for CliError {
    fn from(err: AnalysisError) -> Self {
        Self::Analysis(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonConversion(err.to_string())
    }
}
