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

//! Summary Assembler: cross-set aggregation of computed metrics.
//!
//! Nothing here computes a new metric; speedups, efficiencies and scaling
//! deltas come from [`crate::metrics`] and are only collected, averaged and
//! ranked.
//!
//! Speedups of a set without a `Serial` run are relative to a stand-in
//! baseline. Aggregates and findings are taken from `Serial`-anchored sets
//! whenever any exist for the family or label in question; only when none do
//! are unanchored records used, and the result carries
//! [`BaselineKind::NoSerialBaseline`].

use crate::error::{AnalysisError, Result};
use crate::label::{ImplementationFamily, ParallelFamily};
use crate::metrics::{ScalingDelta, SetMetrics, SkippedSet, SpeedupRecord};
use crate::ordering::{BaselineKind, MissingImplementations};
use crate::record::ParseDiagnostic;
use std::collections::HashMap;
use tracing::debug;

/// Aggregates for one implementation family across all sets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyStats {
    pub family: ImplementationFamily,
    pub max_speedup: f64,
    /// Mean over every aggregated record of the family.
    pub mean_speedup: f64,
    /// Label of the record that reached `max_speedup`.
    pub best_label: String,
    /// Degree that reached `max_speedup`, for parallel families.
    pub best_degree: Option<u32>,
    pub best_group: Option<String>,
    /// Number of records aggregated.
    pub records: usize,
    /// `NoSerialBaseline` when only unanchored sets contributed.
    pub baseline_kind: BaselineKind,
}

/// Aggregates for one canonical label across all sets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImplementationStats {
    pub label: String,
    pub family: ImplementationFamily,
    pub parallelism_degree: Option<u32>,
    pub max_speedup: f64,
    /// Mean over the sets in which the label appears.
    pub mean_speedup: f64,
    pub best_group: Option<String>,
    /// Number of sets aggregated.
    pub sets: usize,
    /// `NoSerialBaseline` when only unanchored sets contributed.
    pub baseline_kind: BaselineKind,
}

/// A single notable record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Finding {
    pub label: String,
    pub group: Option<String>,
    pub value: f64,
    /// Baseline kind of the set the record comes from.
    pub baseline_kind: BaselineKind,
}

impl Finding {
    fn from_record(scored: Scored<'_>, value: f64) -> Self {
        let (kind, record) = scored;
        Self {
            label: record.label.clone(),
            group: record.image_size.clone(),
            value,
            baseline_kind: kind,
        }
    }

    /// True when the value is relative to a stand-in baseline.
    pub fn is_unanchored(&self) -> bool {
        self.baseline_kind == BaselineKind::NoSerialBaseline
    }
}

impl FamilyStats {
    /// True when only unanchored sets contributed.
    pub fn is_unanchored(&self) -> bool {
        self.baseline_kind == BaselineKind::NoSerialBaseline
    }
}

impl ImplementationStats {
    /// True when only unanchored sets contributed.
    pub fn is_unanchored(&self) -> bool {
        self.baseline_kind == BaselineKind::NoSerialBaseline
    }
}

/// A record together with the baseline kind of its set.
type Scored<'a> = (BaselineKind, &'a SpeedupRecord);

/// Scaling deltas of one family within one set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyScaling {
    pub family: ParallelFamily,
    pub group: Option<String>,
    /// Ascending degree.
    pub deltas: Vec<ScalingDelta>,
}

/// Run-wide findings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalFindings {
    /// Lowest execution time (seconds).
    pub fastest: Option<Finding>,
    /// Highest speedup.
    pub best_speedup: Option<Finding>,
    /// Highest efficiency (percent).
    pub best_efficiency: Option<Finding>,
    pub scaling: Vec<FamilyScaling>,
}

/// Complete result of an analysis run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryReport {
    /// Per-set metrics, in set order.
    pub sets: Vec<SetMetrics>,
    pub families: Vec<FamilyStats>,
    pub implementations: Vec<ImplementationStats>,
    pub findings: GlobalFindings,
    /// Names of sets whose baseline is not `Serial`.
    pub unanchored_sets: Vec<String>,
    pub skipped_sets: Vec<SkippedSet>,
    pub missing: Vec<MissingImplementations>,
    pub diagnostics: Vec<ParseDiagnostic>,
    pub rows_seen: usize,
    pub rows_dropped: usize,
}

impl SummaryReport {
    /// Looks up the stats of one family.
    pub fn family(&self, family: ImplementationFamily) -> Option<&FamilyStats> {
        self.families.iter().find(|f| f.family == family)
    }

    /// Looks up the stats of one label.
    pub fn implementation(&self, label: &str) -> Option<&ImplementationStats> {
        self.implementations.iter().find(|i| i.label == label)
    }

    /// Looks up a set by display name.
    pub fn set(&self, name: &str) -> Option<&SetMetrics> {
        self.sets.iter().find(|s| s.name() == name)
    }

    /// All records in set order, then canonical order.
    pub fn records(&self) -> impl Iterator<Item = &SpeedupRecord> {
        self.sets.iter().flat_map(|s| s.records.iter())
    }
}

/// Aggregates per-set metrics into a report.
///
/// The report's bookkeeping fields (`skipped_sets`, `missing`,
/// `diagnostics`, row counts) are left empty for the caller to fill.
///
/// # Errors
///
/// [`AnalysisError::EmptyResultSet`] if `sets` is empty.
pub fn assemble_summary(sets: Vec<SetMetrics>) -> Result<SummaryReport> {
    if sets.is_empty() {
        return Err(AnalysisError::EmptyResultSet {
            rows_seen: 0,
            rows_dropped: 0,
        });
    }

    let families = family_stats(&sets);
    let implementations = implementation_stats(&sets);
    let findings = global_findings(&sets);
    let unanchored_sets = sets
        .iter()
        .filter(|s| s.is_unanchored())
        .map(|s| s.name().to_string())
        .collect();

    debug!(
        sets = sets.len(),
        families = families.len(),
        implementations = implementations.len(),
        "assembled summary"
    );

    Ok(SummaryReport {
        sets,
        families,
        implementations,
        findings,
        unanchored_sets,
        ..Default::default()
    })
}

fn scored(sets: &[SetMetrics]) -> impl Iterator<Item = Scored<'_>> {
    sets.iter()
        .flat_map(|s| s.records.iter().map(move |r| (s.baseline_kind, r)))
}

/// Keeps the `Serial`-anchored records if there are any.
fn prefer_anchored(records: Vec<Scored<'_>>) -> (BaselineKind, Vec<Scored<'_>>) {
    if records.iter().any(|(k, _)| *k == BaselineKind::Serial) {
        let anchored = records
            .into_iter()
            .filter(|(k, _)| *k == BaselineKind::Serial)
            .collect();
        (BaselineKind::Serial, anchored)
    } else {
        (BaselineKind::NoSerialBaseline, records)
    }
}

fn family_stats(sets: &[SetMetrics]) -> Vec<FamilyStats> {
    ImplementationFamily::ALL
        .into_iter()
        .filter_map(|family| {
            let (kind, records) =
                prefer_anchored(scored(sets).filter(|(_, r)| r.family == family).collect());
            let (_, best) = max_by_speedup(records.iter().copied())?;
            Some(FamilyStats {
                family,
                max_speedup: best.speedup,
                mean_speedup: mean(records.iter().map(|(_, r)| r.speedup)),
                best_label: best.label.clone(),
                best_degree: best.parallelism_degree,
                best_group: best.image_size.clone(),
                records: records.len(),
                baseline_kind: kind,
            })
        })
        .collect()
}

fn implementation_stats(sets: &[SetMetrics]) -> Vec<ImplementationStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_label: HashMap<&str, Vec<Scored<'_>>> = HashMap::new();

    for (kind, record) in scored(sets) {
        by_label
            .entry(record.label.as_str())
            .or_insert_with(|| {
                order.push(record.label.as_str());
                Vec::new()
            })
            .push((kind, record));
    }

    // Canonical order; Other labels keep their first appearance.
    let appearance: HashMap<&str, usize> =
        order.iter().enumerate().map(|(i, l)| (*l, i)).collect();
    order.sort_by(|a, b| {
        let ra = by_label[a][0].1;
        let rb = by_label[b][0].1;
        ra.family
            .rank()
            .cmp(&rb.family.rank())
            .then(ra.parallelism_degree.cmp(&rb.parallelism_degree))
            .then(appearance[a].cmp(&appearance[b]))
    });

    order
        .into_iter()
        .filter_map(|label| {
            let (kind, records) = prefer_anchored(by_label.remove(label)?);
            let (_, best) = max_by_speedup(records.iter().copied())?;
            Some(ImplementationStats {
                label: label.to_string(),
                family: best.family,
                parallelism_degree: best.parallelism_degree,
                max_speedup: best.speedup,
                mean_speedup: mean(records.iter().map(|(_, r)| r.speedup)),
                best_group: best.image_size.clone(),
                sets: records.len(),
                baseline_kind: kind,
            })
        })
        .collect()
}

fn global_findings(sets: &[SetMetrics]) -> GlobalFindings {
    let fastest = scored(sets)
        .fold(None, |best: Option<Scored<'_>>, (k, r)| match best {
            Some((_, b)) if b.execution_time_seconds <= r.execution_time_seconds => best,
            _ => Some((k, r)),
        })
        .map(|s| Finding::from_record(s, s.1.execution_time_seconds));

    let (_, ranked) = prefer_anchored(scored(sets).collect());

    let best_speedup =
        max_by_speedup(ranked.iter().copied()).map(|s| Finding::from_record(s, s.1.speedup));

    let (_, with_efficiency) =
        prefer_anchored(scored(sets).filter(|(_, r)| r.efficiency.is_some()).collect());
    let best_efficiency = with_efficiency
        .into_iter()
        .filter_map(|(k, r)| r.efficiency.map(|e| ((k, r), e)))
        .fold(None, |best: Option<(Scored<'_>, f64)>, (s, e)| match best {
            Some((_, be)) if be >= e => best,
            _ => Some((s, e)),
        })
        .map(|(s, e)| Finding::from_record(s, e));

    let scaling = ParallelFamily::ALL
        .into_iter()
        .flat_map(|family| {
            sets.iter().filter_map(move |s| {
                let deltas: Vec<ScalingDelta> = s.scaling_for(family).cloned().collect();
                (!deltas.is_empty()).then(|| FamilyScaling {
                    family,
                    group: s.group.clone(),
                    deltas,
                })
            })
        })
        .collect();

    GlobalFindings {
        fastest,
        best_speedup,
        best_efficiency,
        scaling,
    }
}

/// First record with the highest speedup.
fn max_by_speedup<'a, I>(records: I) -> Option<Scored<'a>>
where
    I: IntoIterator<Item = Scored<'a>>,
{
    records
        .into_iter()
        .fold(None, |best: Option<Scored<'a>>, (k, r)| match best {
            Some((_, b)) if b.speedup >= r.speedup => best,
            _ => Some((k, r)),
        })
}

fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::classify_label;
    use crate::metrics::analyze_set;
    use crate::ordering::{ComparisonEntry, ComparisonSet};

    fn metrics(group: &str, entries: &[(&str, f64)]) -> SetMetrics {
        let entries = entries
            .iter()
            .enumerate()
            .map(|(i, (label, time))| ComparisonEntry {
                label: label.to_string(),
                class: classify_label(label).unwrap(),
                execution_time_seconds: *time,
                throughput_mpx_per_s: None,
                pixel_count: None,
                samples: 1,
                first_index: i,
            })
            .collect();
        analyze_set(&ComparisonSet::new(Some(group.to_string()), entries).unwrap()).unwrap()
    }

    fn sample() -> Vec<SetMetrics> {
        vec![
            metrics(
                "512x512",
                &[("Serial", 1.0), ("OpenMP-2T", 0.5), ("OpenMP-4T", 0.4), ("MPI-2P", 0.8)],
            ),
            metrics(
                "1024x1024",
                &[("Serial", 4.0), ("OpenMP-2T", 2.0), ("OpenMP-4T", 1.0), ("OpenCL", 0.2)],
            ),
        ]
    }

    #[test]
    fn test_family_stats() {
        let report = assemble_summary(sample()).unwrap();
        let omp = report.family(ImplementationFamily::OpenMp).unwrap();
        assert_eq!(omp.max_speedup, 4.0);
        assert_eq!(omp.best_degree, Some(4));
        assert_eq!(omp.best_group.as_deref(), Some("1024x1024"));
        assert_eq!(omp.records, 4);
        // (2.0 + 2.5 + 2.0 + 4.0) / 4
        assert!((omp.mean_speedup - 2.625).abs() < 1e-12);

        let serial = report.family(ImplementationFamily::Serial).unwrap();
        assert_eq!(serial.max_speedup, 1.0);
        assert_eq!(serial.best_degree, None);

        let families: Vec<_> = report.families.iter().map(|f| f.family).collect();
        assert_eq!(
            families,
            vec![
                ImplementationFamily::Serial,
                ImplementationFamily::OpenMp,
                ImplementationFamily::Mpi,
                ImplementationFamily::Other
            ]
        );
    }

    #[test]
    fn test_implementation_stats() {
        let report = assemble_summary(sample()).unwrap();
        let labels: Vec<_> = report
            .implementations
            .iter()
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Serial", "OpenMP-2T", "OpenMP-4T", "MPI-2P", "OpenCL"]);

        let omp4 = report.implementation("OpenMP-4T").unwrap();
        assert_eq!(omp4.sets, 2);
        assert_eq!(omp4.max_speedup, 4.0);
        assert!((omp4.mean_speedup - 3.25).abs() < 1e-12);

        assert_eq!(report.implementation("MPI-2P").unwrap().sets, 1);
    }

    #[test]
    fn test_global_findings() {
        let report = assemble_summary(sample()).unwrap();
        let f = &report.findings;

        let fastest = f.fastest.as_ref().unwrap();
        assert_eq!(fastest.label, "OpenCL");
        assert_eq!(fastest.value, 0.2);

        assert_eq!(f.best_speedup.as_ref().unwrap().label, "OpenCL");
        assert!((f.best_speedup.as_ref().unwrap().value - 20.0).abs() < 1e-9);

        // OpenMP-2T on 512x512: 2.0 / 2 * 100 = 100%
        let eff = f.best_efficiency.as_ref().unwrap();
        assert_eq!(eff.label, "OpenMP-2T");
        assert_eq!(eff.group.as_deref(), Some("512x512"));
        assert_eq!(eff.value, 100.0);

        assert_eq!(f.scaling.len(), 2);
        assert!(f.scaling.iter().all(|s| s.family == ParallelFamily::OpenMp));
    }

    #[test]
    fn test_unanchored_sets_are_labelled() {
        let sets = vec![
            metrics("a", &[("Serial", 2.0), ("OpenMP-2T", 1.0)]),
            metrics("b", &[("OpenMP-2T", 1.0), ("OpenMP-4T", 0.5)]),
        ];
        let report = assemble_summary(sets).unwrap();
        assert_eq!(report.unanchored_sets, vec!["b".to_string()]);
    }

    #[test]
    fn test_unanchored_speedups_do_not_outrank_anchored_ones() {
        let sets = vec![
            metrics("512", &[("Serial", 1.0), ("OpenMP-2T", 0.6)]),
            metrics("4096", &[("OpenMP-2T", 8.0), ("OpenMP-8T", 1.0)]),
        ];
        let report = assemble_summary(sets).unwrap();

        let best = report.findings.best_speedup.as_ref().unwrap();
        assert_eq!(best.label, "OpenMP-2T");
        assert_eq!(best.group.as_deref(), Some("512"));
        assert_eq!(best.baseline_kind, BaselineKind::Serial);
        assert!((best.value - 1.0 / 0.6).abs() < 1e-12);

        let omp = report.family(ImplementationFamily::OpenMp).unwrap();
        assert_eq!(omp.baseline_kind, BaselineKind::Serial);
        assert_eq!(omp.records, 1);
        assert_eq!(omp.best_degree, Some(2));
        assert!((omp.mean_speedup - 1.0 / 0.6).abs() < 1e-12);

        let omp2 = report.implementation("OpenMP-2T").unwrap();
        assert!(!omp2.is_unanchored());
        assert_eq!(omp2.sets, 1);

        let omp8 = report.implementation("OpenMP-8T").unwrap();
        assert!(omp8.is_unanchored());
        assert_eq!(omp8.max_speedup, 8.0);

        let fastest = report.findings.fastest.as_ref().unwrap();
        assert_eq!(fastest.label, "OpenMP-2T");
        assert_eq!(fastest.value, 0.6);
    }

    #[test]
    fn test_findings_flagged_when_no_set_is_anchored() {
        let sets = vec![metrics("b", &[("OpenMP-2T", 1.0), ("OpenMP-4T", 0.5)])];
        let report = assemble_summary(sets).unwrap();

        let best = report.findings.best_speedup.as_ref().unwrap();
        assert_eq!(best.label, "OpenMP-4T");
        assert!(best.is_unanchored());
        assert!(report.findings.best_efficiency.as_ref().unwrap().is_unanchored());
        assert!(report.family(ImplementationFamily::OpenMp).unwrap().is_unanchored());
    }

    #[test]
    fn test_best_efficiency_falls_back_when_anchored_sets_have_none() {
        let sets = vec![
            metrics("a", &[("Serial", 1.0), ("OpenCL", 0.5)]),
            metrics("b", &[("MPI-2P", 1.0), ("MPI-4P", 0.4)]),
        ];
        let report = assemble_summary(sets).unwrap();

        assert_eq!(report.findings.best_speedup.as_ref().unwrap().label, "OpenCL");
        let eff = report.findings.best_efficiency.as_ref().unwrap();
        // 1.0 / 0.4 / 4 * 100
        assert_eq!(eff.label, "MPI-4P");
        assert!((eff.value - 62.5).abs() < 1e-9);
        assert!(eff.is_unanchored());
    }

    #[test]
    fn test_empty_sets_rejected() {
        assert!(matches!(
            assemble_summary(Vec::new()),
            Err(AnalysisError::EmptyResultSet { .. })
        ));
    }
}
