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

//! Analysis configuration.

use crate::label::{ParallelFamily, SERIAL_LABEL};
use std::ops::RangeInclusive;

/// Default expected OpenMP thread counts.
pub const DEFAULT_OPENMP_DEGREES: RangeInclusive<u32> = 1..=8;

/// Default expected MPI process counts.
pub const DEFAULT_MPI_DEGREES: RangeInclusive<u32> = 1..=4;

/// Canonical entries a complete benchmark run is expected to contain.
///
/// Absent entries are never an error; they are only reported.
///
/// # Examples
///
/// ```
/// use parbench_core::ReferenceList;
///
/// let reference = ReferenceList::default();
/// let labels = reference.expected_labels();
/// assert_eq!(labels.first().map(String::as_str), Some("Serial"));
/// assert_eq!(labels.len(), 13);
/// assert!(labels.contains(&"MPI-4P".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceList {
    /// Whether a `Serial` entry is expected.
    pub serial: bool,
    /// Expected OpenMP thread counts.
    pub openmp_degrees: Vec<u32>,
    /// Expected MPI process counts.
    pub mpi_degrees: Vec<u32>,
}

impl Default for ReferenceList {
    fn default() -> Self {
        Self {
            serial: true,
            openmp_degrees: DEFAULT_OPENMP_DEGREES.collect(),
            mpi_degrees: DEFAULT_MPI_DEGREES.collect(),
        }
    }
}

impl ReferenceList {
    /// A reference list that expects nothing and so never reports.
    pub fn empty() -> Self {
        Self {
            serial: false,
            openmp_degrees: Vec::new(),
            mpi_degrees: Vec::new(),
        }
    }

    /// Expected degrees `1..=max` for both parallel families.
    pub fn up_to(openmp_max: u32, mpi_max: u32) -> Self {
        Self {
            serial: true,
            openmp_degrees: (1..=openmp_max).collect(),
            mpi_degrees: (1..=mpi_max).collect(),
        }
    }

    /// Expected degrees for one family.
    pub fn degrees(&self, family: ParallelFamily) -> &[u32] {
        match family {
            ParallelFamily::OpenMp => &self.openmp_degrees,
            ParallelFamily::Mpi => &self.mpi_degrees,
        }
    }

    /// Expected canonical labels in canonical order.
    pub fn expected_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if self.serial {
            labels.push(SERIAL_LABEL.to_string());
        }
        for family in ParallelFamily::ALL {
            let mut degrees = self.degrees(family).to_vec();
            degrees.sort_unstable();
            degrees.dedup();
            labels.extend(degrees.into_iter().map(|d| family.label(d)));
        }
        labels
    }
}

/// Configuration for a single analysis run.
///
/// # Examples
///
/// ```
/// use parbench_core::{AnalysisConfig, ReferenceList};
///
/// let config = AnalysisConfig {
///     reference: ReferenceList::up_to(16, 8),
///     ..Default::default()
/// };
/// assert!(config.group_by_image_size);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Entries checked for by the missing-implementations notice.
    pub reference: ReferenceList,

    /// Split records into one comparison set per `ImageSize` (default: `true`).
    ///
    /// When `false`, all records form a single ungrouped set.
    pub group_by_image_size: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceList::default(),
            group_by_image_size: true,
        }
    }
}
