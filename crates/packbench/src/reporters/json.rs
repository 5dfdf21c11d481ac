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

//! JSON export for benchmark results.

use crate::error::{BenchError, Result};
use crate::harness::TestResults;
use crate::reporters::types::ResultsReport;
use crate::reporters::Printer;
use std::fs;
use std::path::{Path, PathBuf};

/// Exports results as pretty-printed JSON.
///
/// # Arguments
///
/// * `results` - The results to export
/// * `path` - Output file path
pub fn export_json(results: &TestResults, path: &Path) -> Result<()> {
    let report = ResultsReport::from_results(results);
    let json =
        serde_json::to_string_pretty(&report).map_err(|e| BenchError::Report(e.to_string()))?;

    fs::write(path, json).map_err(|e| BenchError::io(path, e))
}

/// Printer writing a JSON report to a file.
pub struct JsonPrinter {
    path: PathBuf,
}

impl JsonPrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Printer for JsonPrinter {
    fn print_results(&mut self, results: &TestResults) -> Result<()> {
        export_json(results, &self.path)
    }
}
