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

//! Harness contract and the bootstrap that drives it.

use crate::error::Result;
use crate::harness::results::TestResults;
use crate::harness::suite::TestSuite;
use tracing::info;

/// Defines what to benchmark and how to present it.
pub trait TestHarness {
    /// Builds the suite. Called exactly once per run.
    fn create_test(&self) -> Result<TestSuite>;

    /// Presents the results of a completed run. Called exactly once per
    /// successful run and never after a fatal error.
    fn print_test(&self, results: TestResults) -> Result<()>;
}

/// Orchestrates a single harness run: build, execute once, print once.
///
/// There are no retries. Repeated sampling of whole runs is up to the
/// caller.
pub struct Bootstrap;

impl Bootstrap {
    /// Runs `harness` end to end.
    pub fn run_tests<H>(harness: &H) -> Result<()>
    where
        H: TestHarness + ?Sized,
    {
        let mut suite = harness.create_test()?;
        info!(suite = suite.name(), "suite created");

        let results = suite.execute()?;
        harness.print_test(results)
    }
}
