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

//! Implementation label classification.
//!
//! Every raw label maps to exactly one of three outcomes: `Serial`, a
//! parallel family with its degree, or `Other`. Labels that claim a parallel
//! family (`OpenMP-...`, `MPI-...`) but carry no usable degree are rejected
//! with a [`LabelError`] and the caller drops the row. Nothing else is
//! rejected; unknown names such as `OpenCL` degrade to `Other`.
//!
//! Matching is case-sensitive.

use crate::error::LabelError;
use std::fmt;

/// Exact label of the serial reference implementation.
pub const SERIAL_LABEL: &str = "Serial";

/// Parallel implementation families with a numeric degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParallelFamily {
    /// Shared-memory threads, degree = thread count.
    OpenMp,
    /// Distributed processes, degree = process count.
    Mpi,
}

impl ParallelFamily {
    /// All parallel families in canonical order.
    pub const ALL: [ParallelFamily; 2] = [ParallelFamily::OpenMp, ParallelFamily::Mpi];

    /// Label prefix of the family.
    pub fn name(self) -> &'static str {
        match self {
            Self::OpenMp => "OpenMP",
            Self::Mpi => "MPI",
        }
    }

    /// Unit marker used when synthesising a canonical label.
    pub fn unit(self) -> char {
        match self {
            Self::OpenMp => 'T',
            Self::Mpi => 'P',
        }
    }

    /// Plural noun for the degree, used by renderers.
    pub fn degree_noun(self) -> &'static str {
        match self {
            Self::OpenMp => "threads",
            Self::Mpi => "processes",
        }
    }

    /// Canonical label for `degree`, e.g. `OpenMP-4T`.
    pub fn label(self, degree: u32) -> String {
        format!("{}-{}{}", self.name(), degree, self.unit())
    }

    /// Parses a family name as written in labels.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for ParallelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse implementation family, used for ordering and aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImplementationFamily {
    Serial,
    OpenMp,
    Mpi,
    Other,
}

impl ImplementationFamily {
    /// All families in canonical display order.
    pub const ALL: [ImplementationFamily; 4] = [
        ImplementationFamily::Serial,
        ImplementationFamily::OpenMp,
        ImplementationFamily::Mpi,
        ImplementationFamily::Other,
    ];

    /// Position of the family in the canonical order.
    pub fn rank(self) -> u8 {
        match self {
            Self::Serial => 0,
            Self::OpenMp => 1,
            Self::Mpi => 2,
            Self::Other => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Serial => "Serial",
            Self::OpenMp => "OpenMP",
            Self::Mpi => "MPI",
            Self::Other => "Other",
        }
    }

    /// The parallel family, if this is one.
    pub fn parallel(self) -> Option<ParallelFamily> {
        match self {
            Self::OpenMp => Some(ParallelFamily::OpenMp),
            Self::Mpi => Some(ParallelFamily::Mpi),
            Self::Serial | Self::Other => None,
        }
    }
}

impl From<ParallelFamily> for ImplementationFamily {
    fn from(family: ParallelFamily) -> Self {
        match family {
            ParallelFamily::OpenMp => Self::OpenMp,
            ParallelFamily::Mpi => Self::Mpi,
        }
    }
}

impl fmt::Display for ImplementationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelClass {
    Serial,
    Parallel { family: ParallelFamily, degree: u32 },
    Other,
}

impl LabelClass {
    pub fn family(self) -> ImplementationFamily {
        match self {
            Self::Serial => ImplementationFamily::Serial,
            Self::Parallel { family, .. } => family.into(),
            Self::Other => ImplementationFamily::Other,
        }
    }

    /// Parallelism degree, defined for parallel families only.
    pub fn degree(self) -> Option<u32> {
        match self {
            Self::Parallel { degree, .. } => Some(degree),
            _ => None,
        }
    }
}

/// A trimmed display label together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedLabel {
    pub label: String,
    pub class: LabelClass,
}

/// Classifies a raw label.
///
/// # Errors
///
/// Returns [`LabelError`] when the label is empty or names a parallel family
/// without a positive integer degree.
///
/// # Examples
///
/// ```
/// use parbench_core::{classify_label, LabelClass, ParallelFamily};
///
/// assert_eq!(classify_label(" Serial ").unwrap(), LabelClass::Serial);
/// assert_eq!(
///     classify_label("OpenMP-4T").unwrap(),
///     LabelClass::Parallel { family: ParallelFamily::OpenMp, degree: 4 }
/// );
/// assert_eq!(classify_label("OpenCL").unwrap(), LabelClass::Other);
/// assert!(classify_label("OpenMP-xT").is_err());
/// ```
pub fn classify_label(raw: &str) -> Result<LabelClass, LabelError> {
    let label = raw.trim();
    if label.is_empty() {
        return Err(LabelError::Empty);
    }
    if label == SERIAL_LABEL {
        return Ok(LabelClass::Serial);
    }

    for family in ParallelFamily::ALL {
        let Some(rest) = label.strip_prefix(family.name()) else {
            continue;
        };
        if rest.is_empty() {
            // Bare family name; only usable with an explicit degree column.
            return Err(LabelError::MalformedDegree {
                label: label.to_string(),
            });
        }
        if let Some(suffix) = rest.strip_prefix('-') {
            let degree = parse_degree_suffix(suffix).ok_or_else(|| LabelError::MalformedDegree {
                label: label.to_string(),
            })?;
            if degree == 0 {
                return Err(LabelError::ZeroDegree {
                    label: label.to_string(),
                });
            }
            return Ok(LabelClass::Parallel { family, degree });
        }
    }

    Ok(LabelClass::Other)
}

/// Normalizes a raw label, using `degree_hint` for bare family names.
///
/// `OpenMP` with a hint of 4 becomes `OpenMP-4T`. For labels that already
/// carry a degree the hint is ignored.
///
/// # Errors
///
/// Same as [`classify_label`]; a bare family name without a positive hint is
/// [`LabelError::MalformedDegree`].
///
/// # Examples
///
/// ```
/// use parbench_core::normalize_label;
///
/// let n = normalize_label("MPI", Some(2)).unwrap();
/// assert_eq!(n.label, "MPI-2P");
/// assert_eq!(n.class.degree(), Some(2));
///
/// let n = normalize_label("  OpenMP-8T", Some(3)).unwrap();
/// assert_eq!(n.label, "OpenMP-8T");
/// assert_eq!(n.class.degree(), Some(8));
/// ```
pub fn normalize_label(raw: &str, degree_hint: Option<u32>) -> Result<NormalizedLabel, LabelError> {
    let label = raw.trim();

    if let Some(family) = ParallelFamily::from_name(label) {
        return match degree_hint {
            Some(0) => Err(LabelError::ZeroDegree {
                label: label.to_string(),
            }),
            Some(degree) => Ok(NormalizedLabel {
                label: family.label(degree),
                class: LabelClass::Parallel { family, degree },
            }),
            None => Err(LabelError::MalformedDegree {
                label: label.to_string(),
            }),
        };
    }

    let class = classify_label(label)?;
    Ok(NormalizedLabel {
        label: label.to_string(),
        class,
    })
}

/// Parses `<digits><T|P>`.
fn parse_degree_suffix(suffix: &str) -> Option<u32> {
    let digits = suffix.strip_suffix(['T', 'P'])?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
