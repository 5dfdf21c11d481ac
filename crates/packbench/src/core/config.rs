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

//! Pass and summary configuration.
//!
//! A [`PassConfig`] decides whether a pass runs at all, how its results are
//! ranked for each parameter and how printers scale its axis. The same type
//! configures the cross-pass summary view.

use serde::{Deserialize, Serialize};

/// Key used to rank tests for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Keep test registration order.
    #[default]
    None,
    /// Rank by best measured time.
    Time,
    /// Rank by the raw value the pass returned.
    Value,
    /// Rank by value divided by the parameter's bound.
    Percentage,
}

impl SortMode {
    /// Returns the mode as a string.
    pub fn as_str(&self) -> &str {
        match self {
            SortMode::None => "none",
            SortMode::Time => "time",
            SortMode::Value => "value",
            SortMode::Percentage => "percentage",
        }
    }
}

/// Direction of the sort key comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest key ranks first.
    #[default]
    Ascending,
    /// Largest key ranks first.
    Descending,
}

/// How tests with equal keys are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Earlier registered test first.
    #[default]
    Registration,
    /// Lexicographic test name, then registration order.
    Name,
}

/// Configuration for one pass or for the summary view.
///
/// # Example
///
/// ```
/// use packbench::core::config::{PassConfig, SortMode};
///
/// let compression = PassConfig::default().with_sort(SortMode::Percentage);
/// let decompression = PassConfig::default().with_sort(SortMode::Time).with_logarithmic(true);
/// assert!(compression.enabled && decompression.logarithmic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassConfig {
    /// Ranking key.
    pub sort: SortMode,
    /// Disabled passes are never executed and never reported.
    pub enabled: bool,
    /// Display hint for printers. Never affects values or ranking.
    pub logarithmic: bool,
    /// Key direction.
    pub order: SortOrder,
    /// Tie policy.
    pub ties: TieBreak,
}

impl PassConfig {
    /// Sets the ranking key.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Enables or disables the pass.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Shorthand for `with_enabled(false)`.
    pub fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    /// Sets the logarithmic display hint.
    pub fn with_logarithmic(mut self, logarithmic: bool) -> Self {
        self.logarithmic = logarithmic;
        self
    }

    /// Sets the key direction.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the tie policy.
    pub fn with_ties(mut self, ties: TieBreak) -> Self {
        self.ties = ties;
        self
    }
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            sort: SortMode::None,
            enabled: true,
            logarithmic: false,
            order: SortOrder::Ascending,
            ties: TieBreak::Registration,
        }
    }
}
