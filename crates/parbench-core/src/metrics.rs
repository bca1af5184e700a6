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

//! Metrics Engine: speedup, efficiency and scaling deltas.
//!
//! ```text
//! speedup(r)          = baseline.time / r.time
//! efficiency(r)       = speedup(r) / r.degree * 100        (parallel entries only)
//! scaling_delta(a, b) = (a.time - b.time) / a.time * 100   (adjacent degrees, same family)
//! ```
//!
//! Negative scaling deltas are regressions and are reported as-is.

use crate::error::MetricsError;
use crate::label::{ImplementationFamily, ParallelFamily};
use crate::ordering::{BaselineKind, ComparisonSet, UNGROUPED_NAME};
use tracing::warn;

/// Ratio of baseline time to observed time.
///
/// Returns `None` when the baseline is zero, negative or not finite.
/// `observed` must be strictly positive, which the record parser guarantees.
///
/// # Examples
///
/// ```
/// use parbench_core::speedup;
///
/// assert_eq!(speedup(10.0, 10.0), Some(1.0));
/// assert_eq!(speedup(10.0, 4.0), Some(2.5));
/// assert_eq!(speedup(0.0, 4.0), None);
/// ```
pub fn speedup(baseline_seconds: f64, observed_seconds: f64) -> Option<f64> {
    if baseline_seconds.is_finite() && baseline_seconds > 0.0 {
        Some(baseline_seconds / observed_seconds)
    } else {
        None
    }
}

/// Speedup per unit of parallelism, in percent.
///
/// Undefined (`None`) without a degree or with degree 0.
///
/// # Examples
///
/// ```
/// use parbench_core::efficiency;
///
/// assert_eq!(efficiency(3.6, Some(4)), Some(3.6 / 4.0 * 100.0));
/// assert_eq!(efficiency(3.6, None), None);
/// ```
pub fn efficiency(speedup: f64, degree: Option<u32>) -> Option<f64> {
    match degree {
        Some(d) if d > 0 => Some(speedup / f64::from(d) * 100.0),
        _ => None,
    }
}

/// Percent time improvement going from `from_seconds` to `to_seconds`.
///
/// # Examples
///
/// ```
/// use parbench_core::scaling_delta;
///
/// assert_eq!(scaling_delta(6.0, 3.0), 50.0);
/// assert_eq!(scaling_delta(2.0, 3.0), -50.0);
/// ```
pub fn scaling_delta(from_seconds: f64, to_seconds: f64) -> f64 {
    (from_seconds - to_seconds) / from_seconds * 100.0
}

/// One entry of a comparison set measured against its baseline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedupRecord {
    pub label: String,
    pub family: ImplementationFamily,
    pub parallelism_degree: Option<u32>,
    pub image_size: Option<String>,
    pub pixel_count: Option<u64>,
    pub execution_time_seconds: f64,
    pub throughput_mpx_per_s: Option<f64>,
    pub speedup: f64,
    /// `None` for entries without a parallelism degree.
    pub efficiency: Option<f64>,
    /// Number of measurements merged into this entry.
    pub samples: usize,
}

/// Time improvement between adjacent degrees of one family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalingDelta {
    pub family: ParallelFamily,
    pub from_label: String,
    pub to_label: String,
    pub from_degree: u32,
    pub to_degree: u32,
    pub from_seconds: f64,
    pub to_seconds: f64,
    /// Positive = faster at the higher degree, negative = regression.
    pub improvement_pct: f64,
}

/// Metrics for one comparison set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetMetrics {
    pub group: Option<String>,
    pub baseline_label: String,
    pub baseline_kind: BaselineKind,
    pub baseline_seconds: f64,
    /// One record per entry, in canonical order.
    pub records: Vec<SpeedupRecord>,
    /// Deltas per family, ascending degree.
    pub scaling: Vec<ScalingDelta>,
    /// Baseline time over the mean time of all non-baseline entries.
    pub average_parallel_speedup: Option<f64>,
}

impl SetMetrics {
    pub fn name(&self) -> &str {
        self.group.as_deref().unwrap_or(UNGROUPED_NAME)
    }

    /// True when speedups are relative to a stand-in rather than `Serial`.
    pub fn is_unanchored(&self) -> bool {
        self.baseline_kind == BaselineKind::NoSerialBaseline
    }

    /// Record with the highest speedup; first one wins on ties.
    pub fn best(&self) -> Option<&SpeedupRecord> {
        self.records
            .iter()
            .fold(None, |best: Option<&SpeedupRecord>, r| match best {
                Some(b) if b.speedup >= r.speedup => Some(b),
                _ => Some(r),
            })
    }

    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.execution_time_seconds).collect()
    }

    pub fn speedups(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.speedup).collect()
    }

    pub fn efficiencies(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.efficiency).collect()
    }

    /// Scaling deltas of one family.
    pub fn scaling_for(&self, family: ParallelFamily) -> impl Iterator<Item = &ScalingDelta> {
        self.scaling.iter().filter(move |d| d.family == family)
    }
}

/// A comparison set for which no metrics could be computed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedSet {
    pub group: Option<String>,
    pub reason: String,
}

/// Computes metrics for one ordered comparison set.
///
/// # Errors
///
/// [`MetricsError::DivideByZeroBaseline`] if the baseline time is unusable.
/// Nothing is divided in that case.
pub fn analyze_set(set: &ComparisonSet) -> Result<SetMetrics, MetricsError> {
    let baseline = set.baseline();
    let baseline_seconds = baseline.execution_time_seconds;

    if speedup(baseline_seconds, baseline_seconds).is_none() {
        return Err(MetricsError::DivideByZeroBaseline {
            group: set.name().to_string(),
            baseline: baseline.label.clone(),
            time: baseline_seconds,
        });
    }

    let records = set
        .entries
        .iter()
        .map(|entry| {
            let s = baseline_seconds / entry.execution_time_seconds;
            SpeedupRecord {
                label: entry.label.clone(),
                family: entry.family(),
                parallelism_degree: entry.parallelism_degree(),
                image_size: set.group.clone(),
                pixel_count: entry.pixel_count,
                execution_time_seconds: entry.execution_time_seconds,
                throughput_mpx_per_s: entry.throughput_mpx_per_s,
                speedup: s,
                efficiency: efficiency(s, entry.parallelism_degree()),
                samples: entry.samples,
            }
        })
        .collect();

    let others: Vec<f64> = set
        .entries
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != set.baseline_index)
        .map(|(_, e)| e.execution_time_seconds)
        .collect();
    let average_parallel_speedup = if others.is_empty() {
        None
    } else {
        let mean = others.iter().sum::<f64>() / others.len() as f64;
        Some(baseline_seconds / mean)
    };

    Ok(SetMetrics {
        group: set.group.clone(),
        baseline_label: baseline.label.clone(),
        baseline_kind: set.baseline_kind,
        baseline_seconds,
        records,
        scaling: scaling_deltas(set),
        average_parallel_speedup,
    })
}

/// Scaling deltas between adjacent degrees, per parallel family.
///
/// When two entries share a degree (`MPI-3P`, `MPI-3T`) only the first in
/// canonical order takes part.
pub fn scaling_deltas(set: &ComparisonSet) -> Vec<ScalingDelta> {
    let mut deltas = Vec::new();

    for family in ParallelFamily::ALL {
        let mut levels: Vec<(u32, &str, f64)> = set
            .entries
            .iter()
            .filter(|e| e.family() == ImplementationFamily::from(family))
            .filter_map(|e| {
                e.parallelism_degree()
                    .map(|d| (d, e.label.as_str(), e.execution_time_seconds))
            })
            .collect();
        levels.dedup_by_key(|(degree, _, _)| *degree);

        for pair in levels.windows(2) {
            let (from_degree, from_label, from_seconds) = pair[0];
            let (to_degree, to_label, to_seconds) = pair[1];
            deltas.push(ScalingDelta {
                family,
                from_label: from_label.to_string(),
                to_label: to_label.to_string(),
                from_degree,
                to_degree,
                from_seconds,
                to_seconds,
                improvement_pct: scaling_delta(from_seconds, to_seconds),
            });
        }
    }

    deltas
}

/// Runs [`analyze_set`] over every set.
///
/// A failing set is logged and returned as a [`SkippedSet`]; the others are
/// unaffected.
pub fn analyze_sets(sets: &[ComparisonSet]) -> (Vec<SetMetrics>, Vec<SkippedSet>) {
    let mut metrics = Vec::with_capacity(sets.len());
    let mut skipped = Vec::new();

    for set in sets {
        match analyze_set(set) {
            Ok(m) => metrics.push(m),
            Err(e) => {
                warn!(group = %set.name(), "{}", e);
                skipped.push(SkippedSet {
                    group: set.group.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (metrics, skipped)
}
