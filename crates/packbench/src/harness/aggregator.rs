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

//! Per-parameter ranking and the cross-pass summary.
//!
//! Rankings are always computed from a registration-ordered row list, so a
//! stable sort plus an explicit tie policy gives the same order on every run.

use crate::core::{PassConfig, SortMode, SortOrder, TieBreak};
use crate::harness::results::{ResultKey, TestResults};
use serde::Serialize;
use std::cmp::Ordering;
use std::time::Duration;

/// One test's position for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    /// 1-based position after sorting.
    pub rank: usize,
    /// Test index in registration order.
    pub test: usize,
    /// Test name.
    pub name: String,
    /// Value (summed over passes for the summary).
    pub value: u64,
    /// Best time (summed over passes for the summary).
    pub best: Duration,
    /// `value / bound`, when the parameter has a usable bound.
    pub ratio: Option<f64>,
}

impl Ranked {
    /// Best time in milliseconds.
    pub fn best_millis(&self) -> f64 {
        self.best.as_secs_f64() * 1_000.0
    }

    /// Throughput over `bytes` in MB/s, if the best time is non-zero.
    pub fn throughput_mbs(&self, bytes: u64) -> Option<f64> {
        let secs = self.best.as_secs_f64();
        (secs > 0.0).then(|| bytes as f64 / secs / 1_000_000.0)
    }

    fn key(&self, mode: SortMode) -> Option<f64> {
        match mode {
            SortMode::None => Some(0.0),
            SortMode::Time => Some(self.best.as_nanos() as f64),
            SortMode::Value => Some(self.value as f64),
            SortMode::Percentage => self.ratio,
        }
    }
}

/// Sorts `rows` according to `config` and assigns ranks.
///
/// Rows without a key (percentage without a bound) always rank last.
pub fn rank(mut rows: Vec<Ranked>, config: &PassConfig) -> Vec<Ranked> {
    rows.sort_by(|a, b| {
        let primary = match (a.key(config.sort), b.key(config.sort)) {
            (Some(x), Some(y)) => match config.order {
                SortOrder::Ascending => x.total_cmp(&y),
                SortOrder::Descending => y.total_cmp(&x),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        primary.then_with(|| match config.ties {
            TieBreak::Registration => a.test.cmp(&b.test),
            TieBreak::Name => a.name.cmp(&b.name).then(a.test.cmp(&b.test)),
        })
    });

    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

impl TestResults {
    /// Ranks every test that has an entry for (`pass`, `parameter`).
    ///
    /// Empty when the pass is unknown or disabled.
    pub fn ranking(&self, pass: &str, parameter: usize) -> Vec<Ranked> {
        let Some(pass_index) = self.pass_index(pass) else {
            return Vec::new();
        };
        let config = self.passes()[pass_index].config;
        if !config.enabled {
            return Vec::new();
        }
        let bound = self.parameters().get(parameter).and_then(|p| p.bound);

        let rows = self
            .tests()
            .iter()
            .enumerate()
            .filter_map(|(test, name)| {
                let key = ResultKey {
                    test,
                    parameter,
                    pass: pass_index,
                };
                self.get_by_key(&key).map(|m| Ranked {
                    rank: 0,
                    test,
                    name: name.clone(),
                    value: m.value,
                    best: m.best,
                    ratio: m.ratio(bound),
                })
            })
            .collect();

        rank(rows, &config)
    }

    /// Sums every enabled pass per test for `parameter` and ranks the sums
    /// with the summary configuration.
    ///
    /// Empty when the summary is disabled.
    pub fn summary(&self, parameter: usize) -> Vec<Ranked> {
        let config = *self.summary_config();
        if !config.enabled {
            return Vec::new();
        }
        let bound = self.parameters().get(parameter).and_then(|p| p.bound);
        let enabled: Vec<usize> = self.enabled_passes().map(|(i, _)| i).collect();

        let rows = self
            .tests()
            .iter()
            .enumerate()
            .filter_map(|(test, name)| {
                let mut found = false;
                let mut value = 0u64;
                let mut best = Duration::ZERO;
                for &pass in &enabled {
                    let key = ResultKey {
                        test,
                        parameter,
                        pass,
                    };
                    if let Some(m) = self.get_by_key(&key) {
                        found = true;
                        value = value.saturating_add(m.value);
                        best += m.best;
                    }
                }
                found.then(|| Ranked {
                    rank: 0,
                    test,
                    name: name.clone(),
                    value,
                    best,
                    ratio: match bound {
                        Some(bound) if bound > 0 => Some(value as f64 / bound as f64),
                        _ => None,
                    },
                })
            })
            .collect();

        rank(rows, &config)
    }
}
