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

//! End-to-end tests of the analysis pipeline over the shared CSV fixtures.

use parbench_core::{
    analyze, AnalysisConfig, AnalysisError, BaselineKind, DiagnosticKind, ImplementationFamily,
    ParallelFamily, ReferenceList,
};
use parbench_test::{fixtures, naive_rows};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ==================== Reference sweep ====================

#[test]
fn test_reference_speedups_and_efficiency() {
    let rows = naive_rows(fixtures::REFERENCE_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.sets.len(), 1);
    let set = &report.sets[0];
    assert_eq!(set.name(), "(all)");
    assert_eq!(set.baseline_kind, BaselineKind::Serial);
    assert_eq!(set.labels(), vec!["Serial", "OpenMP-2T", "OpenMP-4T"]);

    let speedups = set.speedups();
    assert_eq!(speedups[0], 1.0);
    assert!(approx(speedups[1], 10.0 / 6.0));
    assert!(approx(speedups[2], 10.0 / 3.0));

    let efficiencies = set.efficiencies();
    assert_eq!(efficiencies[0], None);
    assert!(approx(efficiencies[1].unwrap(), 83.333_333_333_333_33));
    assert!(approx(efficiencies[2].unwrap(), 83.333_333_333_333_33));
}

#[test]
fn test_reference_scaling_delta() {
    let rows = naive_rows(fixtures::REFERENCE_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    let deltas: Vec<_> = report.sets[0].scaling_for(ParallelFamily::OpenMp).collect();
    assert_eq!(deltas.len(), 1);
    assert_eq!(deltas[0].from_label, "OpenMP-2T");
    assert_eq!(deltas[0].to_label, "OpenMP-4T");
    assert!(approx(deltas[0].improvement_pct, 50.0));
    assert_eq!(report.sets[0].scaling_for(ParallelFamily::Mpi).count(), 0);
}

#[test]
fn test_reference_missing_notice() {
    let rows = naive_rows(fixtures::REFERENCE_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.missing.len(), 1);
    let missing = &report.missing[0].labels;
    assert_eq!(missing.len(), 10);
    assert_eq!(missing[0], "OpenMP-1T");
    assert!(!missing.contains(&"OpenMP-2T".to_string()));
    assert_eq!(missing.last().map(String::as_str), Some("MPI-4P"));
    assert!(report.missing[0].to_string().starts_with("missing implementations in (all): OpenMP-1T"));
}

// ==================== Full thread sweep ====================

#[test]
fn test_thread_sweep_canonical_order() {
    let rows = naive_rows(fixtures::THREAD_SWEEP_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    assert_eq!(
        report.sets[0].labels(),
        vec![
            "Serial", "OpenMP-1T", "OpenMP-2T", "OpenMP-3T", "OpenMP-4T", "OpenMP-5T",
            "OpenMP-6T", "OpenMP-7T", "OpenMP-8T", "MPI-1P", "MPI-2P", "MPI-3P", "MPI-4P",
            "OpenCL",
        ]
    );
    assert!(report.missing.is_empty());
}

#[test]
fn test_thread_sweep_regression_is_negative() {
    let rows = naive_rows(fixtures::THREAD_SWEEP_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    let deltas: Vec<_> = report.sets[0].scaling_for(ParallelFamily::OpenMp).collect();
    assert_eq!(deltas.len(), 7);
    let last = deltas[6];
    assert_eq!((last.from_degree, last.to_degree), (7, 8));
    assert!(approx(last.improvement_pct, -10.0));
    assert_eq!(report.sets[0].scaling_for(ParallelFamily::Mpi).count(), 3);
}

#[test]
fn test_thread_sweep_findings() {
    let rows = naive_rows(fixtures::THREAD_SWEEP_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    let fastest = report.findings.fastest.as_ref().unwrap();
    assert_eq!(fastest.label, "OpenCL");
    assert!(approx(fastest.value, 0.05));

    let best = report.findings.best_speedup.as_ref().unwrap();
    assert_eq!(best.label, "OpenCL");
    assert!(approx(best.value, 20.0));

    let efficient = report.findings.best_efficiency.as_ref().unwrap();
    assert_eq!(efficient.label, "OpenMP-1T");

    let omp = report.family(ImplementationFamily::OpenMp).unwrap();
    assert_eq!(omp.best_label, "OpenMP-7T");
    assert_eq!(omp.records, 8);
    assert_eq!(report.family(ImplementationFamily::Other).unwrap().best_label, "OpenCL");
}

#[test]
fn test_thread_sweep_average_parallel_speedup() {
    let rows = naive_rows(fixtures::THREAD_SWEEP_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();
    let set = &report.sets[0];

    let others: Vec<f64> = set.times().into_iter().skip(1).collect();
    let mean = others.iter().sum::<f64>() / others.len() as f64;
    assert!(approx(set.average_parallel_speedup.unwrap(), 1.0 / mean));
}

// ==================== Sparse and malformed input ====================

#[test]
fn test_sparse_input_orders_serial_first() {
    let rows = naive_rows(fixtures::SPARSE_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.sets[0].labels(), vec!["Serial", "OpenMP-4T"]);
    assert_eq!(report.sets[0].speedups(), vec![1.0, 4.0]);
}

#[test]
fn test_malformed_rows_are_dropped() {
    let rows = naive_rows(fixtures::MALFORMED_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.rows_seen, 6);
    assert_eq!(report.rows_dropped, 4);
    assert_eq!(report.sets[0].labels(), vec!["Serial", "OpenMP-4T"]);

    let kinds: Vec<(usize, DiagnosticKind)> =
        report.diagnostics.iter().map(|d| (d.line, d.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (3, DiagnosticKind::InvalidNumber),
            (4, DiagnosticKind::MalformedLabel),
            (5, DiagnosticKind::MissingField),
            (7, DiagnosticKind::InvalidTime),
        ]
    );
}

#[test]
fn test_no_valid_rows() {
    let rows = naive_rows(fixtures::ALL_INVALID_CSV);
    let err = analyze(&rows, &AnalysisConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::EmptyResultSet {
            rows_seen: 2,
            rows_dropped: 2
        }
    ));
}

// ==================== Image-size layout ====================

#[test]
fn test_image_sizes_form_separate_sets() {
    let rows = naive_rows(fixtures::IMAGE_SIZE_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    let names: Vec<&str> = report.sets.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["512x512", "1024x1024"]);

    let small = report.set("512x512").unwrap();
    assert_eq!(small.labels(), vec!["Serial", "OpenMP-2T", "OpenMP-4T", "MPI-2P"]);
    assert_eq!(small.records[1].pixel_count, Some(262_144));

    let large = report.set("1024x1024").unwrap();
    assert_eq!(
        large.labels(),
        vec!["Serial", "OpenMP-2T", "OpenMP-4T", "MPI-2P", "MPI-4P"]
    );
    assert_eq!(large.speedups()[2], 4.0);

    let mpi: Vec<_> = large.scaling_for(ParallelFamily::Mpi).collect();
    assert!(approx(mpi[0].improvement_pct, 0.4 / 0.9 * 100.0));
    assert_eq!(report.missing.len(), 2);
}

#[test]
fn test_image_size_aggregates() {
    let rows = naive_rows(fixtures::IMAGE_SIZE_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    let best = report.findings.best_speedup.as_ref().unwrap();
    assert_eq!(best.label, "OpenMP-4T");
    assert_eq!(best.group.as_deref(), Some("1024x1024"));

    let omp4 = report.implementation("OpenMP-4T").unwrap();
    assert_eq!(omp4.sets, 2);
    assert_eq!(omp4.max_speedup, 4.0);
    assert_eq!(omp4.best_group.as_deref(), Some("1024x1024"));

    let labels: Vec<&str> = report.implementations.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Serial", "OpenMP-2T", "OpenMP-4T", "MPI-2P", "MPI-4P"]
    );
}

#[test]
fn test_ungrouped_merges_image_sizes() {
    let rows = naive_rows(fixtures::IMAGE_SIZE_CSV);
    let config = AnalysisConfig {
        group_by_image_size: false,
        ..Default::default()
    };
    let report = analyze(&rows, &config).unwrap();

    assert_eq!(report.sets.len(), 1);
    let serial = &report.sets[0].records[0];
    assert_eq!(serial.label, "Serial");
    assert_eq!(serial.samples, 2);
    assert!(approx(serial.execution_time_seconds, 1.0));
}

#[test]
fn test_missing_serial_baseline() {
    let rows = naive_rows(fixtures::NO_SERIAL_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.unanchored_sets, vec!["2048x2048".to_string()]);
    let set = report.set("2048x2048").unwrap();
    assert_eq!(set.baseline_kind, BaselineKind::NoSerialBaseline);
    assert_eq!(set.baseline_label, "OpenMP-2T");
    assert_eq!(set.speedups(), vec![1.0, 2.0]);

    assert!(!report.set("512x512").unwrap().is_unanchored());
}

#[test]
fn test_missing_serial_baseline_stays_out_of_aggregates() {
    let rows = naive_rows(fixtures::NO_SERIAL_CSV);
    let report = analyze(&rows, &AnalysisConfig::default()).unwrap();

    let best = report.findings.best_speedup.as_ref().unwrap();
    assert_eq!(best.label, "OpenMP-2T");
    assert_eq!(best.group.as_deref(), Some("512x512"));
    assert_eq!(best.baseline_kind, BaselineKind::Serial);

    let omp = report.family(ImplementationFamily::OpenMp).unwrap();
    assert_eq!(omp.records, 1);
    assert!(approx(omp.mean_speedup, 2.0));
    assert!(!omp.is_unanchored());

    let omp4 = report.implementation("OpenMP-4T").unwrap();
    assert!(omp4.is_unanchored());
    assert_eq!(omp4.best_group.as_deref(), Some("2048x2048"));
}

#[test]
fn test_empty_reference_list_suppresses_notices() {
    let rows = naive_rows(fixtures::REFERENCE_CSV);
    let config = AnalysisConfig {
        reference: ReferenceList::empty(),
        ..Default::default()
    };
    let report = analyze(&rows, &config).unwrap();
    assert!(report.missing.is_empty());
}

#[test]
fn test_every_fixture_with_valid_rows_analyzes() {
    for (name, csv) in fixtures::all() {
        let rows = naive_rows(csv);
        let result = analyze(&rows, &AnalysisConfig::default());
        if name == "all_invalid" {
            assert!(result.is_err(), "{name} should fail");
        } else {
            let report = result.unwrap_or_else(|e| panic!("{name}: {e}"));
            for set in &report.sets {
                assert_eq!(set.records[0].label, set.baseline_label, "{name}");
            }
        }
    }
}
