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

//! The compression benchmark harness.

use crate::cli::{Cli, Format};
use packbench::core::{PassConfig, SortMode};
use packbench::fixtures::load_parameters;
use packbench::reporters::{ChartJsPrinter, ConsolePrinter, JsonPrinter, Printer};
use packbench::{BenchError, Result, TestHarness, TestResults, TestSuite};
use packbench_codecs::{compression_test, COMPRESSION, DECOMPRESSION};
use std::path::PathBuf;
use tracing::info;

/// Benchmarks catalogue codecs over the files of one directory.
#[derive(Debug, Clone)]
pub struct CompressionHarness {
    data_dir: PathBuf,
    pattern: String,
    max_size: u64,
    codecs: Vec<String>,
    samples: u32,
    skip_passes: Vec<String>,
    formats: Vec<Format>,
    output_dir: PathBuf,
    open: bool,
}

impl CompressionHarness {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            pattern: "*.*".to_string(),
            max_size: crate::cli::DEFAULT_MAX_FILE_SIZE,
            codecs: Vec::new(),
            samples: 1,
            skip_passes: Vec::new(),
            formats: vec![Format::Console],
            output_dir: PathBuf::from("."),
            open: false,
        }
    }

    /// Builds a harness from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = cli.data_dir.clone().ok_or_else(|| BenchError::InvalidConfig {
            parameter: "data_dir".to_string(),
            reason: "a data directory is required".to_string(),
        })?;
        for pass in &cli.skip_passes {
            if pass != COMPRESSION && pass != DECOMPRESSION {
                return Err(BenchError::InvalidConfig {
                    parameter: "skip-pass".to_string(),
                    reason: format!("unknown pass '{}'", pass),
                });
            }
        }

        Ok(Self {
            data_dir,
            pattern: cli.pattern.clone(),
            max_size: cli.max_size,
            codecs: cli.codecs.clone(),
            samples: cli.samples,
            skip_passes: cli.skip_passes.clone(),
            formats: cli.formats.clone(),
            output_dir: cli.output_dir.clone(),
            open: cli.open,
        })
    }

    pub fn with_codecs(mut self, codecs: Vec<String>) -> Self {
        self.codecs = codecs;
        self
    }

    pub fn with_formats(mut self, formats: Vec<Format>) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    fn pass_config(&self, pass: &str, sort: SortMode) -> PassConfig {
        PassConfig::default()
            .with_sort(sort)
            .with_enabled(!self.skip_passes.iter().any(|p| p == pass))
    }
}

impl TestHarness for CompressionHarness {
    fn create_test(&self) -> Result<TestSuite> {
        let catalog = packbench_codecs::init();
        let mut suite = TestSuite::new(format!("Compression: {}", self.data_dir.display()));

        if self.codecs.is_empty() {
            for codec in catalog.create_all() {
                suite.add_test(compression_test(codec));
            }
        } else {
            for name in &self.codecs {
                suite.add_test(compression_test(catalog.create(name)?));
            }
        }

        for parameter in load_parameters(&self.data_dir, &self.pattern, Some(self.max_size))? {
            suite.add_parameter(parameter);
        }
        info!(
            dir = %self.data_dir.display(),
            pattern = %self.pattern,
            files = suite.parameters().len(),
            "loaded benchmark files"
        );

        suite
            .set_pass_config(COMPRESSION, self.pass_config(COMPRESSION, SortMode::Percentage))
            .set_pass_config(DECOMPRESSION, self.pass_config(DECOMPRESSION, SortMode::Time))
            .set_summary_config(PassConfig::default().with_sort(SortMode::Time))
            .set_samples(self.samples)?;
        Ok(suite)
    }

    fn print_test(&self, results: TestResults) -> Result<()> {
        for format in &self.formats {
            match format {
                Format::Console => ConsolePrinter::stdout().print_results(&results)?,
                Format::Json => {
                    let mut printer = JsonPrinter::new(self.output_dir.join("packbench.json"));
                    printer.print_results(&results)?;
                    info!(path = %printer.path().display(), "wrote JSON report");
                }
                Format::Html => {
                    let mut printer = ChartJsPrinter::new(self.output_dir.join("packbench.html"));
                    printer.print_results(&results)?;
                    info!(path = %printer.path().display(), "wrote HTML report");
                    if self.open {
                        printer.open()?;
                    }
                }
            }
        }
        Ok(())
    }
}
