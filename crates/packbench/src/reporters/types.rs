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

//! Report types and structures.
//!
//! A [`ResultsReport`] is a self-contained, serializable view of one run:
//! configuration, rankings per pass and parameter, the summary, and the raw
//! entries.

use crate::core::{Measurement, ParameterInfo, PassConfig};
use crate::harness::{Ranked, TestResults};
use serde::Serialize;

/// Ranking of all tests for one parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterRanking {
    pub parameter: String,
    pub ranked: Vec<Ranked>,
}

/// One enabled pass with its rankings.
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    pub name: String,
    pub config: PassConfig,
    pub rankings: Vec<ParameterRanking>,
}

/// A raw matrix cell, addressed by names.
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub test: String,
    pub parameter: String,
    pub pass: String,
    pub measurement: Measurement,
}

/// Complete report of one run.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsReport {
    pub title: String,
    pub timestamp: String,
    pub tests: Vec<String>,
    pub parameters: Vec<ParameterInfo>,
    pub passes: Vec<PassReport>,
    pub summary_config: PassConfig,
    pub summary: Vec<ParameterRanking>,
    pub entries: Vec<EntryReport>,
}

impl ResultsReport {
    /// Builds the report for `results`. Disabled passes are left out.
    pub fn from_results(results: &TestResults) -> Self {
        let parameters = results.parameters();

        let passes = results
            .enabled_passes()
            .map(|(_, info)| PassReport {
                name: info.name.clone(),
                config: info.config,
                rankings: parameters
                    .iter()
                    .enumerate()
                    .map(|(i, p)| ParameterRanking {
                        parameter: p.name.clone(),
                        ranked: results.ranking(&info.name, i),
                    })
                    .collect(),
            })
            .collect();

        let summary = parameters
            .iter()
            .enumerate()
            .map(|(i, p)| ParameterRanking {
                parameter: p.name.clone(),
                ranked: results.summary(i),
            })
            .filter(|r| !r.ranked.is_empty())
            .collect();

        let entries = results
            .entries()
            .map(|(key, m)| EntryReport {
                test: results.tests()[key.test].clone(),
                parameter: parameters[key.parameter].name.clone(),
                pass: results.passes()[key.pass].name.clone(),
                measurement: *m,
            })
            .collect();

        Self {
            title: results.suite_name().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            tests: results.tests().to_vec(),
            parameters: parameters.to_vec(),
            passes,
            summary_config: *results.summary_config(),
            summary,
            entries,
        }
    }
}
