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

//! CLI integration tests

use assert_cmd::Command;
use parbench_test::fixtures;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

// Test helper to create a parbench command with a clean log environment
fn parbench_cmd() -> Command {
    let mut cmd = Command::cargo_bin("parbench").expect("Failed to find parbench binary");
    cmd.env_remove("RUST_LOG").env_remove("PARBENCH_MAX_FILE_SIZE");
    cmd
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    parbench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parbench - parallel benchmark analysis"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("scaling"))
        .stdout(predicate::str::contains("speedups"));
}

#[test]
fn test_version_output() {
    parbench_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("parbench"));
}

#[test]
fn test_no_subcommand_fails() {
    parbench_cmd().assert().failure();
}

// ===== Analyze Command Tests =====

#[test]
fn test_analyze_text() {
    let file = create_temp_file(fixtures::THREAD_SWEEP_CSV, ".csv");

    parbench_cmd()
        .arg("analyze")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PARALLEL BENCHMARK PERFORMANCE SUMMARY"))
        .stdout(predicate::str::contains("• Fastest: OpenCL (0.050000s)"))
        .stdout(predicate::str::contains("• Best speedup: OpenCL → 20.00x"))
        .stdout(predicate::str::contains("• 7T → 8T: -10.0% improvement"));
}

#[test]
fn test_analyze_warns_about_missing_implementations() {
    let file = create_temp_file(fixtures::REFERENCE_CSV, ".csv");

    parbench_cmd()
        .arg("analyze")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "missing implementations in (all): OpenMP-1T",
        ));
}

#[test]
fn test_analyze_reduced_reference_list() {
    let file = create_temp_file(fixtures::REFERENCE_CSV, ".csv");

    parbench_cmd()
        .args(["analyze", "--openmp-max", "4", "--mpi-max", "0"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "missing implementations in (all): OpenMP-1T, OpenMP-3T\n",
        ));
}

#[test]
fn test_analyze_skips_invalid_rows() {
    let file = create_temp_file(fixtures::MALFORMED_CSV, ".csv");

    parbench_cmd()
        .arg("analyze")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 6 read, 4 dropped"))
        .stderr(predicate::str::contains("Skipping invalid row"));
}

#[test]
fn test_analyze_all_invalid_fails() {
    let file = create_temp_file(fixtures::ALL_INVALID_CSV, ".csv");

    parbench_cmd()
        .arg("analyze")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Analysis error: No valid benchmark rows"));
}

#[test]
fn test_analyze_json() {
    let file = create_temp_file(fixtures::IMAGE_SIZE_CSV, ".csv");

    let output = parbench_cmd()
        .args(["analyze", "--format", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sets"].as_array().unwrap().len(), 2);
    assert_eq!(value["sets"][1]["group"], "1024x1024");
    assert_eq!(value["findings"]["best_speedup"]["label"], "OpenMP-4T");
}

#[test]
fn test_analyze_markdown_to_file() {
    let file = create_temp_file(fixtures::IMAGE_SIZE_CSV, ".csv");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("summary.md");

    parbench_cmd()
        .args(["analyze", "-f", "markdown", "-o"])
        .arg(&out)
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"));

    let md = fs::read_to_string(&out).unwrap();
    assert!(md.contains("## 512x512"));
    assert!(md.contains("## Key Findings"));
}

#[test]
fn test_analyze_no_group() {
    let file = create_temp_file(fixtures::IMAGE_SIZE_CSV, ".csv");

    parbench_cmd()
        .args(["analyze", "--no-group"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sets: 1"))
        .stdout(predicate::str::contains("SET: (all)"));
}

#[test]
fn test_analyze_with_speedup_csv() {
    let file = create_temp_file(fixtures::REFERENCE_CSV, ".csv");
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("speedup_analysis.csv");

    parbench_cmd()
        .arg("analyze")
        .arg(file.path())
        .arg("--speedup-csv")
        .arg(&csv)
        .assert()
        .success();

    let written = fs::read_to_string(&csv).unwrap();
    assert!(written.starts_with("Implementation,ImageSize,Pixels,Threads/Processes,ExecutionTime,Speedup,Efficiency(%)"));
}

#[test]
fn test_analyze_missing_file() {
    parbench_cmd()
        .args(["analyze", "/nonexistent/results.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error for '/nonexistent/results.csv'"));
}

#[test]
fn test_analyze_missing_column() {
    let file = create_temp_file("Name,Time(s)\nSerial,1.0\n", ".csv");

    parbench_cmd()
        .arg("analyze")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No valid benchmark rows: 1 of 1 rows were dropped",
        ));
}

#[test]
fn test_file_size_limit() {
    let file = create_temp_file(fixtures::THREAD_SWEEP_CSV, ".csv");

    parbench_cmd()
        .env("PARBENCH_MAX_FILE_SIZE", "16")
        .arg("analyze")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_semicolon_delimiter() {
    let file = create_temp_file("Implementation;Time(s)\nSerial;4.0\nOpenMP-2T;2.0\n", ".csv");

    parbench_cmd()
        .args(["analyze", "-d", ";"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2.00x"));
}

// ===== Scaling Command Tests =====

#[test]
fn test_scaling_openmp() {
    let file = create_temp_file(fixtures::REFERENCE_CSV, ".csv");

    parbench_cmd()
        .arg("scaling")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OPENMP THREAD COUNT ANALYSIS"))
        .stdout(predicate::str::contains("• 2T → 4T: +50.0% improvement"));
}

#[test]
fn test_scaling_mpi_per_image_size() {
    let file = create_temp_file(fixtures::IMAGE_SIZE_CSV, ".csv");

    parbench_cmd()
        .args(["scaling", "--family", "mpi"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("MPI PROCESS COUNT ANALYSIS"))
        .stdout(predicate::str::contains("Set: 512x512"))
        .stdout(predicate::str::contains("Set: 1024x1024"))
        .stdout(predicate::str::contains("• 2P → 4P: +44.4% improvement"));
}

#[test]
fn test_scaling_family_absent() {
    let file = create_temp_file(fixtures::REFERENCE_CSV, ".csv");

    parbench_cmd()
        .args(["scaling", "--family", "mpi"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No MPI results found"));
}

// ===== Speedups Command Tests =====

#[test]
fn test_speedups_stdout() {
    let file = create_temp_file(fixtures::REFERENCE_CSV, ".csv");

    parbench_cmd()
        .arg("speedups")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Serial,,,,10.000000,1.0000,\n"))
        .stdout(predicate::str::contains("OpenMP-4T,,,4,3.000000,3.3333,83.33\n"));
}

#[test]
fn test_speedups_to_file() {
    let file = create_temp_file(fixtures::IMAGE_SIZE_CSV, ".csv");
    let out = create_temp_file("", ".csv");

    parbench_cmd()
        .arg("speedups")
        .arg(file.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let written = fs::read_to_string(out.path()).unwrap();
    assert_eq!(written.lines().count(), 10);
    assert!(written.contains("MPI-4P,1024x1024,1048576,4,0.500000,3.2000,80.00"));
}
