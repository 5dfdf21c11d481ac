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

//! Test suites and the execution matrix.

use crate::core::{Measurement, Parameter, PassConfig};
use crate::error::{BenchError, Result};
use crate::harness::results::{PassInfo, ResultKey, TestResults};
use crate::harness::test::CodeTest;
use std::time::Instant;
use tracing::{debug, info};

/// Tests, parameters and per-pass configuration for one run.
///
/// The suite exclusively owns its tests and parameters. Passes are executed
/// only if they appear in the pass configuration, in declaration order.
///
/// # Example
///
/// ```
/// use packbench::core::{Parameter, PassConfig, SortMode};
/// use packbench::harness::{BenchTest, Pass, TestSuite};
/// use packbench::Result;
///
/// fn length(_: &mut (), param: &Parameter) -> Result<u64> {
///     Ok(param.len() as u64)
/// }
///
/// let mut suite = TestSuite::new("demo")
///     .with_test(BenchTest::new("len", ()).with_pass(Pass::new("size", length)))
///     .with_parameter(Parameter::sized("four", vec![0; 4]))
///     .with_pass_config("size", PassConfig::default().with_sort(SortMode::Percentage));
///
/// let results = suite.execute().unwrap();
/// assert_eq!(results.get("len", "four", "size").unwrap().value, 4);
/// ```
pub struct TestSuite {
    name: String,
    tests: Vec<Box<dyn CodeTest>>,
    parameters: Vec<Parameter>,
    pass_configs: Vec<(String, PassConfig)>,
    summary: PassConfig,
    samples: u32,
}

impl TestSuite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
            parameters: Vec::new(),
            pass_configs: Vec::new(),
            summary: PassConfig::default(),
            samples: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_test(&mut self, test: impl CodeTest + 'static) -> &mut Self {
        self.tests.push(Box::new(test));
        self
    }

    pub fn with_test(mut self, test: impl CodeTest + 'static) -> Self {
        self.add_test(test);
        self
    }

    pub fn add_parameter(&mut self, parameter: Parameter) -> &mut Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.add_parameter(parameter);
        self
    }

    /// Configures a pass. A name configured twice keeps its first position.
    pub fn set_pass_config(&mut self, pass: impl Into<String>, config: PassConfig) -> &mut Self {
        let pass = pass.into();
        match self.pass_configs.iter_mut().find(|(name, _)| *name == pass) {
            Some((_, existing)) => *existing = config,
            None => self.pass_configs.push((pass, config)),
        }
        self
    }

    pub fn with_pass_config(mut self, pass: impl Into<String>, config: PassConfig) -> Self {
        self.set_pass_config(pass, config);
        self
    }

    pub fn set_summary_config(&mut self, config: PassConfig) -> &mut Self {
        self.summary = config;
        self
    }

    pub fn with_summary_config(mut self, config: PassConfig) -> Self {
        self.set_summary_config(config);
        self
    }

    /// Sets how many full lifecycles run per cell. Must be at least 1.
    pub fn set_samples(&mut self, samples: u32) -> Result<&mut Self> {
        if samples == 0 {
            return Err(BenchError::InvalidConfig {
                parameter: "samples".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        self.samples = samples;
        Ok(self)
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn tests(&self) -> impl Iterator<Item = &dyn CodeTest> {
        self.tests.iter().map(|t| t.as_ref())
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn pass_config(&self, pass: &str) -> Option<&PassConfig> {
        self.pass_configs
            .iter()
            .find(|(name, _)| name == pass)
            .map(|(_, config)| config)
    }

    /// Runs every enabled pass for every test registering it, against every
    /// parameter, in declaration/registration order.
    ///
    /// The first fatal error aborts the run and no results are returned.
    pub fn execute(&mut self) -> Result<TestResults> {
        let started = Instant::now();
        info!(
            suite = %self.name,
            tests = self.tests.len(),
            parameters = self.parameters.len(),
            passes = self.pass_configs.len(),
            samples = self.samples,
            "executing suite"
        );

        let mut results = TestResults::new(
            self.name.clone(),
            self.tests.iter().map(|t| t.name().to_string()).collect(),
            self.parameters.iter().map(Parameter::info).collect(),
            self.pass_configs
                .iter()
                .map(|(name, config)| PassInfo {
                    name: name.clone(),
                    config: *config,
                })
                .collect(),
            self.summary,
        );

        for (pass_index, (pass, config)) in self.pass_configs.iter().enumerate() {
            if !config.enabled {
                debug!(pass = %pass, "pass disabled, skipping");
                continue;
            }

            for (test_index, test) in self.tests.iter_mut().enumerate() {
                if !test.has_pass(pass) {
                    debug!(test = test.name(), pass = %pass, "test has no such pass, skipping");
                    continue;
                }

                for (parameter_index, parameter) in self.parameters.iter().enumerate() {
                    let measurement = run_samples(test.as_mut(), pass, parameter, self.samples)
                        .map_err(|source| BenchError::PassFailed {
                            test: test.name().to_string(),
                            parameter: parameter.name().to_string(),
                            pass: pass.clone(),
                            source: Box::new(source),
                        })?;

                    results.record(
                        ResultKey {
                            test: test_index,
                            parameter: parameter_index,
                            pass: pass_index,
                        },
                        measurement,
                    );
                }
            }
        }

        info!(
            suite = %self.name,
            entries = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "suite complete"
        );
        Ok(results)
    }
}

fn run_samples(
    test: &mut dyn CodeTest,
    pass: &str,
    parameter: &Parameter,
    samples: u32,
) -> Result<Measurement> {
    let mut measurement = test.run(pass, parameter)?;
    for _ in 1..samples {
        measurement = measurement.merge(test.run(pass, parameter)?);
    }
    Ok(measurement)
}
