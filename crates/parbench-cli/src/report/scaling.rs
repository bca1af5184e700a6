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

//! Thread/process scaling table of one parallel family.

use super::{baseline_marker, delta_line};
use parbench::{ImplementationFamily, ParallelFamily, SetMetrics, SpeedupRecord, SummaryReport};
use std::fmt::Write;

/// Scaling table of `family` for every set that ran it.
///
/// Returns `None` when no set holds a run of `family`.
pub fn scaling_table(report: &SummaryReport, family: ParallelFamily) -> Option<String> {
    let wanted = ImplementationFamily::from(family);
    if !report.records().any(|r| r.family == wanted) {
        return None;
    }

    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = write_table(&mut out, report, family);
    Some(out)
}

fn write_table(
    out: &mut String,
    report: &SummaryReport,
    family: ParallelFamily,
) -> std::fmt::Result {
    let wanted = ImplementationFamily::from(family);
    let noun = capitalize(family.degree_noun());
    let title = match family {
        ParallelFamily::OpenMp => "OPENMP THREAD COUNT ANALYSIS",
        ParallelFamily::Mpi => "MPI PROCESS COUNT ANALYSIS",
    };

    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(80))?;

    for set in &report.sets {
        let records: Vec<&SpeedupRecord> = set
            .records
            .iter()
            .filter(|r| r.family == wanted)
            .collect();
        if !records.is_empty() {
            write_set(out, set, family, &noun, &records)?;
        }
    }
    Ok(())
}

fn write_set(
    out: &mut String,
    set: &SetMetrics,
    family: ParallelFamily,
    noun: &str,
    records: &[&SpeedupRecord],
) -> std::fmt::Result {
    writeln!(out, "\nSet: {}", set.name())?;
    writeln!(
        out,
        "{} Baseline Time: {:.6} seconds{}\n",
        set.baseline_label,
        set.baseline_seconds,
        baseline_marker(set.baseline_kind)
    )?;

    writeln!(
        out,
        "{:<10} {:<15} {:<15} {:<15}",
        noun, "Time (s)", "Speedup", "Efficiency (%)"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for r in records {
        writeln!(
            out,
            "{:<10} {:<15.6} {:<15} {:<15}",
            r.parallelism_degree.unwrap_or_default(),
            r.execution_time_seconds,
            format!("{:.2}x", r.speedup),
            r.efficiency
                .map(|e| format!("{:.1}%", e))
                .unwrap_or_else(|| "-".to_string())
        )?;
    }

    let noun = family.degree_noun();
    writeln!(out, "\nKEY FINDINGS:")?;
    if let Some(best) = first_max(records, |r| r.speedup) {
        writeln!(
            out,
            "• Best speedup: {} {} → {:.2}x",
            best.parallelism_degree.unwrap_or_default(),
            noun,
            best.speedup
        )?;
    }
    if let Some((best, eff)) = records
        .iter()
        .filter_map(|r| r.efficiency.map(|e| (*r, e)))
        .fold(None, |acc: Option<(&SpeedupRecord, f64)>, (r, e)| match acc {
            Some((b, be)) if be >= e => Some((b, be)),
            _ => Some((r, e)),
        })
    {
        writeln!(
            out,
            "• Best efficiency: {} {} → {:.1}%",
            best.parallelism_degree.unwrap_or_default(),
            noun,
            eff
        )?;
    }
    if let Some(fastest) = first_max(records, |r| -r.execution_time_seconds) {
        writeln!(
            out,
            "• Fastest execution: {} {} → {:.6}s",
            fastest.parallelism_degree.unwrap_or_default(),
            noun,
            fastest.execution_time_seconds
        )?;
    }

    let deltas: Vec<_> = set.scaling_for(family).collect();
    if !deltas.is_empty() {
        writeln!(out, "\nSCALING ANALYSIS:")?;
        for delta in deltas {
            writeln!(out, "• {}", delta_line(delta))?;
        }
    }
    Ok(())
}

/// First record with the highest `key`.
fn first_max<'a>(
    records: &[&'a SpeedupRecord],
    key: impl Fn(&SpeedupRecord) -> f64,
) -> Option<&'a SpeedupRecord> {
    records
        .iter()
        .copied()
        .fold(None, |best: Option<&SpeedupRecord>, r| match best {
            Some(b) if key(b) >= key(r) => Some(b),
            _ => Some(r),
        })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
