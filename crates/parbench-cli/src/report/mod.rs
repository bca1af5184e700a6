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

//! Report renderers.
//!
//! Every renderer takes a finished [`SummaryReport`] and returns text; the
//! commands decide where it goes.

mod json;
mod markdown;
mod scaling;
mod text;

pub use json::render_json;
pub use markdown::render_markdown;
pub use scaling::scaling_table;
pub use text::render_text;

use crate::error::CliError;
use clap::ValueEnum;
use parbench::{BaselineKind, FamilyStats, ScalingDelta, SummaryReport};

/// Output format of the `analyze` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

/// Render `report` in `format`.
///
/// # Errors
///
/// [`CliError::JsonConversion`] if JSON serialization fails.
pub fn render(report: &SummaryReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Markdown => Ok(render_markdown(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// `4` or `-`.
fn degree_cell(degree: Option<u32>) -> String {
    degree.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

/// `83.3%` or `-`.
fn efficiency_cell(efficiency: Option<f64>) -> String {
    efficiency
        .map(|e| format!("{:.1}%", e))
        .unwrap_or_else(|| "-".to_string())
}

/// `4.19` or `-`.
fn throughput_cell(throughput: Option<f64>) -> String {
    throughput
        .map(|t| format!("{:.2}", t))
        .unwrap_or_else(|| "-".to_string())
}

/// ` [no-serial-baseline]` for values relative to a stand-in baseline.
fn baseline_marker(kind: BaselineKind) -> String {
    match kind {
        BaselineKind::Serial => String::new(),
        BaselineKind::NoSerialBaseline => format!(" [{}]", kind),
    }
}

/// `4 threads` for parallel families, the best label otherwise.
fn best_configuration(stats: &FamilyStats) -> String {
    match (stats.family.parallel(), stats.best_degree) {
        (Some(family), Some(degree)) => format!("{} {}", degree, family.degree_noun()),
        _ => stats.best_label.clone(),
    }
}

/// `2T → 4T: +50.0% improvement`
fn delta_line(delta: &ScalingDelta) -> String {
    let unit = delta.family.unit();
    format!(
        "{}{} → {}{}: {:+.1}% improvement",
        delta.from_degree, unit, delta.to_degree, unit, delta.improvement_pct
    )
}
