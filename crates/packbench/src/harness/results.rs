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

//! Captured results of one suite execution.

use crate::core::{Measurement, ParameterInfo, PassConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index triple addressing one cell of the execution matrix.
///
/// Indices follow registration order in the owning [`TestResults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResultKey {
    pub test: usize,
    pub parameter: usize,
    pub pass: usize,
}

/// A configured pass as seen by printers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassInfo {
    pub name: String,
    pub config: PassConfig,
}

/// The measured matrix plus everything needed to present it.
///
/// Built incrementally by the suite and immutable once handed to a printer.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResults {
    suite: String,
    tests: Vec<String>,
    parameters: Vec<ParameterInfo>,
    passes: Vec<PassInfo>,
    summary: PassConfig,
    entries: BTreeMap<ResultKey, Measurement>,
}

impl TestResults {
    pub fn new(
        suite: impl Into<String>,
        tests: Vec<String>,
        parameters: Vec<ParameterInfo>,
        passes: Vec<PassInfo>,
        summary: PassConfig,
    ) -> Self {
        Self {
            suite: suite.into(),
            tests,
            parameters,
            passes,
            summary,
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn record(&mut self, key: ResultKey, measurement: Measurement) {
        self.entries.insert(key, measurement);
    }

    pub fn suite_name(&self) -> &str {
        &self.suite
    }

    /// Test names in registration order.
    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    /// Parameter descriptors in registration order.
    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    /// Configured passes in declaration order, disabled ones included.
    pub fn passes(&self) -> &[PassInfo] {
        &self.passes
    }

    /// Enabled passes with their indices.
    pub fn enabled_passes(&self) -> impl Iterator<Item = (usize, &PassInfo)> {
        self.passes
            .iter()
            .enumerate()
            .filter(|(_, info)| info.config.enabled)
    }

    pub fn summary_config(&self) -> &PassConfig {
        &self.summary
    }

    pub fn pass_index(&self, name: &str) -> Option<usize> {
        self.passes.iter().position(|p| p.name == name)
    }

    pub fn test_index(&self, name: &str) -> Option<usize> {
        self.tests.iter().position(|t| t == name)
    }

    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }

    /// Looks up a cell by names.
    pub fn get(&self, test: &str, parameter: &str, pass: &str) -> Option<&Measurement> {
        let key = ResultKey {
            test: self.test_index(test)?,
            parameter: self.parameter_index(parameter)?,
            pass: self.pass_index(pass)?,
        };
        self.entries.get(&key)
    }

    pub fn get_by_key(&self, key: &ResultKey) -> Option<&Measurement> {
        self.entries.get(key)
    }

    /// All entries ordered by (test, parameter, pass).
    pub fn entries(&self) -> impl Iterator<Item = (&ResultKey, &Measurement)> {
        self.entries.iter()
    }

    /// Number of entries recorded for `pass`.
    pub fn count_for_pass(&self, pass: &str) -> usize {
        match self.pass_index(pass) {
            Some(index) => self.entries.keys().filter(|k| k.pass == index).count(),
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
