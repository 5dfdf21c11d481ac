// Dweve PackBench - Compression Benchmark Harness
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

//! Measurement primitives.
//!
//! A [`Measurement`] pairs the value a pass returned with the time the
//! harness spent inside its measured operation. Setup and teardown are never
//! part of the timing.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// The captured cost of one (test, parameter, pass) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Value returned by the pass (e.g. compressed size in bytes).
    pub value: u64,
    /// Fastest sample.
    pub best: Duration,
    /// Mean over all samples.
    pub mean: Duration,
    /// Number of samples merged into this measurement.
    pub samples: u32,
}

impl Measurement {
    /// Creates a measurement from a single sample.
    pub fn single(value: u64, elapsed: Duration) -> Self {
        Self {
            value,
            best: elapsed,
            mean: elapsed,
            samples: 1,
        }
    }

    /// Folds another sample set into this one.
    ///
    /// The value of the later measurement wins; passes are expected to
    /// return the same value for the same parameter on every sample.
    pub fn merge(self, other: Measurement) -> Self {
        let samples = self.samples + other.samples;
        let total = self.mean.as_nanos() * self.samples as u128
            + other.mean.as_nanos() * other.samples as u128;
        let mean_ns = total / samples.max(1) as u128;

        Self {
            value: other.value,
            best: self.best.min(other.best),
            mean: Duration::from_nanos(mean_ns.min(u64::MAX as u128) as u64),
            samples,
        }
    }

    /// Returns the best time in nanoseconds.
    pub fn as_nanos(&self) -> u64 {
        self.best.as_nanos() as u64
    }

    /// Returns `value / bound`, or `None` without a usable bound.
    pub fn ratio(&self, bound: Option<u64>) -> Option<f64> {
        match bound {
            Some(bound) if bound > 0 => Some(self.value as f64 / bound as f64),
            _ => None,
        }
    }
}

/// Runs `f` once and returns its output with the elapsed wall time.
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}
