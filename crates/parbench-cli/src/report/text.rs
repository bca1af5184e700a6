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

//! Plain-text performance summary.

use super::{
    baseline_marker, best_configuration, degree_cell, delta_line, efficiency_cell,
    throughput_cell,
};
use parbench::{SetMetrics, SummaryReport};
use std::fmt::Write;

/// Renders the performance summary: one table per set, then key findings,
/// per-family stats, scaling, per-implementation stats and notes.
pub fn render_text(report: &SummaryReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &SummaryReport) -> std::fmt::Result {
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "PARALLEL BENCHMARK PERFORMANCE SUMMARY")?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(
        out,
        "Rows: {} read, {} dropped | Sets: {}",
        report.rows_seen,
        report.rows_dropped,
        report.sets.len()
    )?;

    for set in &report.sets {
        write_set(out, set)?;
    }

    writeln!(out, "\n{}", "=".repeat(80))?;
    writeln!(out, "KEY FINDINGS:")?;
    writeln!(out, "{}", "=".repeat(80))?;

    let findings = &report.findings;
    if let Some(f) = &findings.fastest {
        writeln!(out, "• Fastest: {} ({:.6}s){}", f.label, f.value, group_suffix(&f.group))?;
    }
    if let Some(f) = &findings.best_speedup {
        writeln!(
            out,
            "• Best speedup: {} → {:.2}x{}{}",
            f.label,
            f.value,
            group_suffix(&f.group),
            baseline_marker(f.baseline_kind)
        )?;
    }
    if let Some(f) = &findings.best_efficiency {
        writeln!(
            out,
            "• Best efficiency: {} → {:.1}%{}{}",
            f.label,
            f.value,
            group_suffix(&f.group),
            baseline_marker(f.baseline_kind)
        )?;
    }

    writeln!(out, "\nFAMILIES:")?;
    for family in &report.families {
        writeln!(out, "{}:{}", family.family, baseline_marker(family.baseline_kind))?;
        writeln!(out, "  Maximum Speedup: {:.2}x", family.max_speedup)?;
        writeln!(out, "  Average Speedup: {:.2}x", family.mean_speedup)?;
        writeln!(out, "  Best Configuration: {}", best_configuration(family))?;
    }

    if !findings.scaling.is_empty() {
        writeln!(out, "\nSCALING ANALYSIS:")?;
        for scaling in &findings.scaling {
            writeln!(out, "{}{}:", scaling.family, group_suffix(&scaling.group))?;
            for delta in &scaling.deltas {
                writeln!(out, "• {}", delta_line(delta))?;
            }
        }
    }

    if report.sets.len() > 1 {
        writeln!(out, "\nIMPLEMENTATIONS:")?;
        for imp in &report.implementations {
            writeln!(out, "{}:{}", imp.label, baseline_marker(imp.baseline_kind))?;
            writeln!(out, "  Maximum Speedup: {:.2}x", imp.max_speedup)?;
            writeln!(out, "  Average Speedup: {:.2}x", imp.mean_speedup)?;
            if let Some(group) = &imp.best_group {
                writeln!(out, "  Best Image Size: {}", group)?;
            }
        }
    }

    write_notes(out, report)?;
    writeln!(out)
}

fn write_set(out: &mut String, set: &SetMetrics) -> std::fmt::Result {
    writeln!(out, "\n{}", "-".repeat(80))?;
    write!(
        out,
        "SET: {} | baseline: {} ({:.6}s)",
        set.name(),
        set.baseline_label,
        set.baseline_seconds
    )?;
    if set.is_unanchored() {
        write!(out, " [{}]", set.baseline_kind)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(80))?;

    writeln!(
        out,
        "{:<15} {:<8} {:<12} {:<15} {:<10} {:<10}",
        "Implementation", "Degree", "Time (s)", "Speed (Mpx/s)", "Speedup", "Efficiency"
    )?;
    for r in &set.records {
        writeln!(
            out,
            "{:<15} {:<8} {:<12.6} {:<15} {:<10} {:<10}",
            r.label,
            degree_cell(r.parallelism_degree),
            r.execution_time_seconds,
            throughput_cell(r.throughput_mpx_per_s),
            format!("{:.2}x", r.speedup),
            efficiency_cell(r.efficiency)
        )?;
    }

    if let Some(best) = set.best() {
        writeln!(out, "• Best: {} ({:.2}x)", best.label, best.speedup)?;
    }
    if let Some(avg) = set.average_parallel_speedup {
        writeln!(out, "• Average parallel speedup: {:.2}x", avg)?;
    }
    Ok(())
}

fn write_notes(out: &mut String, report: &SummaryReport) -> std::fmt::Result {
    let has_notes = !report.unanchored_sets.is_empty()
        || !report.skipped_sets.is_empty()
        || !report.missing.is_empty()
        || !report.diagnostics.is_empty();
    if !has_notes {
        return Ok(());
    }

    writeln!(out, "\nNOTES:")?;
    for name in &report.unanchored_sets {
        writeln!(out, "• {}: no Serial run, speedups relative to the first entry", name)?;
    }
    for skipped in &report.skipped_sets {
        writeln!(
            out,
            "• skipped {}: {}",
            skipped.group.as_deref().unwrap_or(parbench::UNGROUPED_NAME),
            skipped.reason
        )?;
    }
    for missing in &report.missing {
        writeln!(out, "• {}", missing)?;
    }
    for diagnostic in &report.diagnostics {
        writeln!(out, "• {}", diagnostic)?;
    }
    Ok(())
}

fn group_suffix(group: &Option<String>) -> String {
    group.as_ref().map(|g| format!(" [{}]", g)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parbench::{analyze_csv, AnalysisConfig};

    fn report(csv: &str) -> SummaryReport {
        analyze_csv(csv, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_text_summary_sections() {
        let text = render_text(&report(
            "Implementation,Time(s),Speed(Mpx/s)\nSerial,10.0,0.10\nOpenMP-2T,6.0,0.17\nOpenMP-4T,3.0,0.33\n",
        ));

        assert!(text.contains("PARALLEL BENCHMARK PERFORMANCE SUMMARY"));
        assert!(text.contains("SET: (all) | baseline: Serial (10.000000s)"));
        assert!(text.contains("OpenMP-4T       4        3.000000     0.33            3.33x      83.3%"));
        assert!(text.contains("• Fastest: OpenMP-4T (3.000000s)"));
        assert!(text.contains("• Best speedup: OpenMP-4T → 3.33x"));
        assert!(text.contains("• 2T → 4T: +50.0% improvement"));
        assert!(text.contains("• missing implementations in (all): OpenMP-1T"));
        assert!(text.contains("FAMILIES:"));
        assert!(text.contains(
            "OpenMP:\n  Maximum Speedup: 3.33x\n  Average Speedup: 2.50x\n  Best Configuration: 4 threads"
        ));
        assert!(text.contains("Serial:\n  Maximum Speedup: 1.00x"));
        assert!(!text.contains("IMPLEMENTATIONS:"));
        assert!(!text.contains("[no-serial-baseline]"));
    }

    #[test]
    fn test_text_marks_unanchored_sets() {
        let text = render_text(&report(
            "Implementation,ImageSize,Threads/Processes,ExecutionTime(s)\nOpenMP,64x64,2,2.0\nOpenMP,64x64,4,1.0\n",
        ));

        assert!(text.contains("baseline: OpenMP-2T (2.000000s) [no-serial-baseline]"));
        assert!(text.contains("• 64x64: no Serial run"));
        assert!(text.contains("• Best speedup: OpenMP-4T → 2.00x [64x64] [no-serial-baseline]"));
        assert!(text.contains("OpenMP: [no-serial-baseline]\n  Maximum Speedup: 2.00x"));
    }

    #[test]
    fn test_text_lists_dropped_rows() {
        let text = render_text(&report(
            "Implementation,Time(s)\nSerial,1.0\nOpenMP-2T,N/A\nOpenMP-4T,0.5\n",
        ));
        assert!(text.contains("Rows: 3 read, 1 dropped"));
        assert!(text.contains("line 3"));
    }
}
