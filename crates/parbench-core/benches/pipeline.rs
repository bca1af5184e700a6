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

//! Benchmarks for the analysis pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parbench_core::{
    analyze, build_comparison_sets, parse_rows, AnalysisConfig, ParallelFamily, RawRow,
};

// ============================================================================
// Input Generation
// ============================================================================

/// Full thread sweep for `sizes` image sizes.
fn generate_rows(sizes: usize) -> Vec<RawRow> {
    let mut rows = Vec::new();
    let mut line = 2;

    for s in 0..sizes {
        let size = format!("{0}x{0}", 256 * (s + 1));
        let serial = 1.0 + s as f64;

        let mut push = |label: String, time: f64| {
            rows.push(
                RawRow::new(line)
                    .with("Implementation", label)
                    .with("ImageSize", size.clone())
                    .with("ExecutionTime(s)", format!("{:.6}", time)),
            );
            line += 1;
        };

        push("Serial".to_string(), serial);
        for family in ParallelFamily::ALL {
            for degree in 1..=8u32 {
                push(family.label(degree), serial / f64::from(degree) * 1.1);
            }
        }
        push("OpenCL".to_string(), serial / 20.0);
    }

    rows
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_parse_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rows");

    for &sizes in &[1usize, 10, 100] {
        let rows = generate_rows(sizes);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::new("sweep", sizes), &rows, |b, input| {
            b.iter(|| parse_rows(black_box(input)))
        });
    }

    group.finish();
}

fn bench_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_comparison_sets");
    let config = AnalysisConfig::default();

    for &sizes in &[1usize, 10, 100] {
        let rows = generate_rows(sizes);
        let Ok(outcome) = parse_rows(&rows) else {
            continue;
        };
        group.throughput(Throughput::Elements(outcome.records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sweep", sizes),
            &outcome.records,
            |b, input| b.iter(|| build_comparison_sets(black_box(input), &config)),
        );
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let config = AnalysisConfig::default();

    for &sizes in &[1usize, 10, 100] {
        let rows = generate_rows(sizes);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::new("sweep", sizes), &rows, |b, input| {
            b.iter(|| analyze(black_box(input), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_rows, bench_ordering, bench_analyze);
criterion_main!(benches);
