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

//! Markdown export of the performance summary.

use super::{
    baseline_marker, best_configuration, degree_cell, delta_line, efficiency_cell,
    throughput_cell,
};
use parbench::SummaryReport;

/// Renders the report as Markdown.
pub fn render_markdown(report: &SummaryReport) -> String {
    let mut md = String::new();

    md.push_str("# Parallel Benchmark Performance Summary\n\n");
    md.push_str(&format!(
        "**Rows:** {} read, {} dropped  \n**Sets:** {}\n\n",
        report.rows_seen,
        report.rows_dropped,
        report.sets.len()
    ));

    for set in &report.sets {
        md.push_str(&format!("## {}\n\n", set.name()));
        md.push_str(&format!(
            "Baseline: **{}** ({:.6} s, {})\n\n",
            set.baseline_label, set.baseline_seconds, set.baseline_kind
        ));

        md.push_str("| Implementation | Degree | Time (s) | Speed (Mpx/s) | Speedup | Efficiency |\n");
        md.push_str("|----------------|--------|----------|---------------|---------|------------|\n");
        for r in &set.records {
            md.push_str(&format!(
                "| {} | {} | {:.6} | {} | {:.2}x | {} |\n",
                r.label,
                degree_cell(r.parallelism_degree),
                r.execution_time_seconds,
                throughput_cell(r.throughput_mpx_per_s),
                r.speedup,
                efficiency_cell(r.efficiency)
            ));
        }
        md.push('\n');

        if let Some(avg) = set.average_parallel_speedup {
            md.push_str(&format!("Average parallel speedup: **{:.2}x**\n\n", avg));
        }
    }

    md.push_str("## Key Findings\n\n");
    let findings = &report.findings;
    if let Some(f) = &findings.fastest {
        md.push_str(&format!("- **Fastest:** {} ({:.6} s)\n", f.label, f.value));
    }
    if let Some(f) = &findings.best_speedup {
        md.push_str(&format!(
            "- **Best speedup:** {} ({:.2}x){}\n",
            f.label,
            f.value,
            baseline_marker(f.baseline_kind)
        ));
    }
    if let Some(f) = &findings.best_efficiency {
        md.push_str(&format!(
            "- **Best efficiency:** {} ({:.1}%){}\n",
            f.label,
            f.value,
            baseline_marker(f.baseline_kind)
        ));
    }

    if !findings.scaling.is_empty() {
        md.push_str("\n## Scaling\n\n");
        for scaling in &findings.scaling {
            let group = scaling.group.as_deref().unwrap_or(parbench::UNGROUPED_NAME);
            for delta in &scaling.deltas {
                md.push_str(&format!(
                    "- {} ({}): {}\n",
                    scaling.family,
                    group,
                    delta_line(delta)
                ));
            }
        }
    }

    if !report.families.is_empty() {
        md.push_str("\n## Families\n\n");
        md.push_str("| Family | Runs | Max Speedup | Mean Speedup | Best Configuration |\n");
        md.push_str("|--------|------|-------------|--------------|--------------------|\n");
        for family in &report.families {
            md.push_str(&format!(
                "| {}{} | {} | {:.2}x | {:.2}x | {} |\n",
                family.family,
                baseline_marker(family.baseline_kind),
                family.records,
                family.max_speedup,
                family.mean_speedup,
                best_configuration(family)
            ));
        }
    }

    let notes: Vec<String> = report
        .unanchored_sets
        .iter()
        .map(|name| format!("`{}` has no Serial run; speedups are relative to its first entry", name))
        .chain(report.skipped_sets.iter().map(|s| {
            format!(
                "`{}` skipped: {}",
                s.group.as_deref().unwrap_or(parbench::UNGROUPED_NAME),
                s.reason
            )
        }))
        .chain(report.missing.iter().map(|m| m.to_string()))
        .chain(report.diagnostics.iter().map(|d| d.to_string()))
        .collect();

    if !notes.is_empty() {
        md.push_str("\n## Notes\n\n");
        for note in notes {
            md.push_str(&format!("- {}\n", note));
        }
    }

    md
}
