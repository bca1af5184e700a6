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

//! Benchmark result CSV samples.
//!
//! - Thread-sweep layout: `Implementation,Time(s),Speed(Mpx/s)` with the
//!   degree encoded in the label (`OpenMP-4T`).
//! - Image-size layout: `Implementation,ImageSize,Pixels,Threads/Processes,ExecutionTime(s)`
//!   with bare family labels and the degree in its own column.

pub mod builders;

use crate::FixtureList;

/// Three-row sweep with known speedups `[1.0, 1.667, 3.333]`.
pub const REFERENCE_CSV: &str = "\
Implementation,Time(s),Speed(Mpx/s)
Serial,10.0,0.10
OpenMP-2T,6.0,0.17
OpenMP-4T,3.0,0.33
";

/// A complete sweep: Serial, OpenMP 1-8, MPI 1-4 and one OpenCL run,
/// deliberately out of order.
pub const THREAD_SWEEP_CSV: &str = "\
Implementation,Time(s),Speed(Mpx/s)
MPI-2P,0.520000,8.07
OpenMP-1T,1.010000,4.15
Serial,1.000000,4.19
OpenMP-2T,0.530000,7.91
OpenMP-3T,0.360000,11.65
OpenCL,0.050000,83.89
OpenMP-4T,0.280000,14.98
OpenMP-5T,0.240000,17.48
OpenMP-6T,0.210000,19.97
OpenMP-7T,0.200000,20.97
OpenMP-8T,0.220000,19.07
MPI-1P,1.020000,4.11
MPI-3P,0.370000,11.34
MPI-4P,0.290000,14.46
";

/// Serial and a single OpenMP run; every other reference entry is absent.
pub const SPARSE_CSV: &str = "\
Implementation,Time(s),Speed(Mpx/s)
OpenMP-4T,2.5,1.68
Serial,10.0,0.42
";

/// Valid rows interleaved with rows that must be dropped.
pub const MALFORMED_CSV: &str = "\
Implementation,Time(s),Speed(Mpx/s)
Serial,10.0,0.42
OpenMP-2T,N/A,0.00
OpenMP-xT,4.0,1.05
,3.0,1.40
OpenMP-4T,2.5,1.68
MPI-2P,0,0.00
";

/// No row survives parsing.
pub const ALL_INVALID_CSV: &str = "\
Implementation,Time(s),Speed(Mpx/s)
Serial,N/A,0.42
OpenMP-2T,,0.00
";

/// Multiple image sizes, bare family labels, degree column.
pub const IMAGE_SIZE_CSV: &str = "\
Implementation,ImageSize,Pixels,Threads/Processes,ExecutionTime(s)
Serial,512x512,262144,1,0.400
OpenMP,512x512,262144,2,0.220
OpenMP,512x512,262144,4,0.120
MPI,512x512,262144,2,0.240
Serial,1024x1024,1048576,1,1.600
OpenMP,1024x1024,1048576,2,0.800
OpenMP,1024x1024,1048576,4,0.400
MPI,1024x1024,1048576,2,0.900
MPI,1024x1024,1048576,4,0.500
";

/// Image-size layout where one size has no serial run.
pub const NO_SERIAL_CSV: &str = "\
Implementation,ImageSize,Pixels,Threads/Processes,ExecutionTime(s)
Serial,512x512,262144,1,0.400
OpenMP,512x512,262144,2,0.200
OpenMP,2048x2048,4194304,2,3.200
OpenMP,2048x2048,4194304,4,1.600
";

/// Returns all CSV fixtures as (name, csv) pairs.
pub fn all() -> FixtureList {
    vec![
        ("reference", REFERENCE_CSV),
        ("thread_sweep", THREAD_SWEEP_CSV),
        ("sparse", SPARSE_CSV),
        ("malformed", MALFORMED_CSV),
        ("all_invalid", ALL_INVALID_CSV),
        ("image_size", IMAGE_SIZE_CSV),
        ("no_serial", NO_SERIAL_CSV),
    ]
}
