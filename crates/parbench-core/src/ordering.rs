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

//! Ordering Engine: comparison sets in canonical order.
//!
//! Records are grouped by image size, repeated labels within a group are
//! merged, and each group is sorted as
//!
//! ```text
//! Serial, OpenMP (ascending degree), MPI (ascending degree), Other (first appearance)
//! ```
//!
//! The order depends only on the set of labels, except among `Other`
//! entries where input order is the tiebreak.

use crate::config::{AnalysisConfig, ReferenceList};
use crate::label::{ImplementationFamily, LabelClass};
use crate::record::MeasurementRecord;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// Display name of the set holding records without an image size.
pub const UNGROUPED_NAME: &str = "(all)";

/// One implementation within a comparison set.
///
/// Repeated measurements of the same label are folded into one entry whose
/// time and throughput are arithmetic means.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonEntry {
    pub label: String,
    pub class: LabelClass,
    /// Mean execution time in seconds.
    pub execution_time_seconds: f64,
    /// Mean throughput over the samples that reported one.
    pub throughput_mpx_per_s: Option<f64>,
    pub pixel_count: Option<u64>,
    /// Number of merged measurements.
    pub samples: usize,
    /// Input position of the first merged measurement.
    pub first_index: usize,
}

impl ComparisonEntry {
    pub fn family(&self) -> ImplementationFamily {
        self.class.family()
    }

    pub fn parallelism_degree(&self) -> Option<u32> {
        self.class.degree()
    }
}

/// How the baseline of a set was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaselineKind {
    /// The set's `Serial` entry.
    Serial,
    /// No `Serial` entry; the first entry in canonical order stands in.
    NoSerialBaseline,
}

impl BaselineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::NoSerialBaseline => "no-serial-baseline",
        }
    }
}

impl fmt::Display for BaselineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered entries sharing a grouping key, with a designated baseline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonSet {
    /// Image size, or `None` for the ungrouped set.
    pub group: Option<String>,
    /// Entries in canonical order; never empty.
    pub entries: Vec<ComparisonEntry>,
    /// Position of the baseline in `entries`.
    pub baseline_index: usize,
    pub baseline_kind: BaselineKind,
}

impl ComparisonSet {
    /// Builds a set from unordered entries.
    ///
    /// Returns `None` if `entries` is empty.
    pub fn new(group: Option<String>, mut entries: Vec<ComparisonEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        order_entries(&mut entries);
        let (baseline_index, baseline_kind) = select_baseline(&entries);
        Some(Self {
            group,
            entries,
            baseline_index,
            baseline_kind,
        })
    }

    /// Display name of the set.
    pub fn name(&self) -> &str {
        self.group.as_deref().unwrap_or(UNGROUPED_NAME)
    }

    pub fn baseline(&self) -> &ComparisonEntry {
        &self.entries[self.baseline_index]
    }

    /// Labels in canonical order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}

/// Expected canonical entries absent from one comparison set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissingImplementations {
    pub group: Option<String>,
    /// Absent labels in canonical order.
    pub labels: Vec<String>,
}

impl fmt::Display for MissingImplementations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing implementations in {}: {}",
            self.group.as_deref().unwrap_or(UNGROUPED_NAME),
            self.labels.join(", ")
        )
    }
}

/// Output of the Ordering Engine.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedSets {
    /// Sets in first-appearance order of their grouping key.
    pub sets: Vec<ComparisonSet>,
    /// One notice per set that lacks expected entries.
    pub missing: Vec<MissingImplementations>,
}

/// Canonical comparison between two entries of the same set.
///
/// Family first; then degree for parallel families, first appearance for
/// `Other`; the label breaks any remaining tie so the order is total.
pub fn canonical_cmp(a: &ComparisonEntry, b: &ComparisonEntry) -> Ordering {
    let rank = a.family().rank().cmp(&b.family().rank());
    let within = match (a.class, b.class) {
        (LabelClass::Parallel { degree: da, .. }, LabelClass::Parallel { degree: db, .. }) => {
            da.cmp(&db)
        }
        (LabelClass::Other, LabelClass::Other) => a.first_index.cmp(&b.first_index),
        _ => Ordering::Equal,
    };
    rank.then(within).then_with(|| a.label.cmp(&b.label))
}

/// Sorts entries into canonical order in place. Idempotent.
pub fn order_entries(entries: &mut [ComparisonEntry]) {
    entries.sort_by(canonical_cmp);
}

/// Picks the `Serial` entry, falling back to position 0.
///
/// `entries` must already be in canonical order and non-empty.
fn select_baseline(entries: &[ComparisonEntry]) -> (usize, BaselineKind) {
    entries
        .iter()
        .position(|e| e.family() == ImplementationFamily::Serial)
        .map(|i| (i, BaselineKind::Serial))
        .unwrap_or((0, BaselineKind::NoSerialBaseline))
}

/// Expected labels from `reference` that none of `entries` carries.
pub fn missing_labels(entries: &[ComparisonEntry], reference: &ReferenceList) -> Vec<String> {
    let present: HashSet<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    reference
        .expected_labels()
        .into_iter()
        .filter(|label| !present.contains(label.as_str()))
        .collect()
}

/// Folds records sharing a label into single entries.
///
/// Entries come out in first-appearance order. Times are summed in sorted
/// order so the mean does not depend on input order.
pub fn merge_records<'a, I>(records: I) -> Vec<ComparisonEntry>
where
    I: IntoIterator<Item = &'a MeasurementRecord>,
{
    struct Acc<'r> {
        first: &'r MeasurementRecord,
        times: Vec<f64>,
        throughputs: Vec<f64>,
        pixel_count: Option<u64>,
    }

    let mut order: Vec<&str> = Vec::new();
    let mut accs: HashMap<&str, Acc<'_>> = HashMap::new();

    for record in records {
        let acc = accs.entry(record.label.as_str()).or_insert_with(|| {
            order.push(record.label.as_str());
            Acc {
                first: record,
                times: Vec::new(),
                throughputs: Vec::new(),
                pixel_count: None,
            }
        });
        acc.times.push(record.execution_time_seconds);
        acc.throughputs.extend(record.throughput_mpx_per_s);
        acc.pixel_count = acc.pixel_count.or(record.pixel_count);
    }

    order
        .into_iter()
        .filter_map(|label| accs.remove(label))
        .map(|acc| {
            let samples = acc.times.len();
            ComparisonEntry {
                label: acc.first.label.clone(),
                class: acc.first.class,
                execution_time_seconds: sorted_mean(acc.times)
                    .unwrap_or(acc.first.execution_time_seconds),
                throughput_mpx_per_s: sorted_mean(acc.throughputs),
                pixel_count: acc.pixel_count,
                samples,
                first_index: acc.first.index,
            }
        })
        .collect()
}

fn sorted_mean(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Groups, merges and orders records into comparison sets.
///
/// Emits one `warn!` per set with absent expected entries; the same notices
/// are returned in [`OrderedSets::missing`].
///
/// # Examples
///
/// ```
/// use parbench_core::{build_comparison_sets, parse_rows, AnalysisConfig, RawRow};
///
/// let rows = vec![
///     RawRow::new(2).with("Implementation", "OpenMP-4T").with("Time(s)", "3.0"),
///     RawRow::new(3).with("Implementation", "Serial").with("Time(s)", "10.0"),
///     RawRow::new(4).with("Implementation", "OpenMP-2T").with("Time(s)", "6.0"),
/// ];
/// let records = parse_rows(&rows).unwrap().records;
/// let ordered = build_comparison_sets(&records, &AnalysisConfig::default());
///
/// assert_eq!(ordered.sets[0].labels(), vec!["Serial", "OpenMP-2T", "OpenMP-4T"]);
/// assert_eq!(ordered.sets[0].baseline().label, "Serial");
/// assert!(ordered.missing[0].labels.contains(&"OpenMP-1T".to_string()));
/// ```
pub fn build_comparison_sets(records: &[MeasurementRecord], config: &AnalysisConfig) -> OrderedSets {
    let mut keys: Vec<Option<&str>> = Vec::new();
    let mut groups: HashMap<Option<&str>, Vec<&MeasurementRecord>> = HashMap::new();

    for record in records {
        let key = if config.group_by_image_size {
            record.image_size.as_deref()
        } else {
            None
        };
        groups
            .entry(key)
            .or_insert_with(|| {
                keys.push(key);
                Vec::new()
            })
            .push(record);
    }

    let mut sets = Vec::new();
    let mut missing = Vec::new();

    for key in keys {
        let Some(members) = groups.remove(&key) else {
            continue;
        };
        let entries = merge_records(members);
        let Some(set) = ComparisonSet::new(key.map(str::to_string), entries) else {
            continue;
        };

        debug!(
            group = %set.name(),
            order = ?set.labels(),
            baseline = %set.baseline_kind,
            "ordered comparison set"
        );

        let absent = missing_labels(&set.entries, &config.reference);
        if !absent.is_empty() {
            let notice = MissingImplementations {
                group: set.group.clone(),
                labels: absent,
            };
            warn!("{}", notice);
            missing.push(notice);
        }
        sets.push(set);
    }

    OrderedSets { sets, missing }
}
