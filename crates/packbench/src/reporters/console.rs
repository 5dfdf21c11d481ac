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

//! Console reporter for benchmark results.
//!
//! Formats one ranking table per enabled pass and parameter, followed by the
//! summary.

use crate::core::SortMode;
use crate::error::{BenchError, Result};
use crate::harness::{Ranked, TestResults};
use crate::reporters::Printer;
use std::io::{self, Write};

/// Printer writing ranking tables to any writer (stdout by default).
pub struct ConsolePrinter<W: Write> {
    out: W,
}

impl ConsolePrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_report(&mut self, results: &TestResults) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "\n{}", "=".repeat(80))?;
        writeln!(out, "BENCHMARK RESULTS: {}", results.suite_name())?;
        writeln!(out, "{}", "=".repeat(80))?;
        writeln!(
            out,
            "Tests: {}  Parameters: {}  Entries: {}",
            results.tests().len(),
            results.parameters().len(),
            results.len()
        )?;

        for (_, pass) in results.enabled_passes() {
            writeln!(out, "\n{}", "-".repeat(80))?;
            writeln!(
                out,
                "PASS: {} (sort: {})",
                pass.name,
                pass.config.sort.as_str()
            )?;
            writeln!(out, "{}", "-".repeat(80))?;

            for (i, parameter) in results.parameters().iter().enumerate() {
                let ranked = results.ranking(&pass.name, i);
                if ranked.is_empty() {
                    continue;
                }
                writeln!(out, "{} ({} bytes)", parameter.name, parameter.len)?;
                write_rows(out, &ranked, parameter.len, pass.config.sort)?;
            }
        }

        let summary = *results.summary_config();
        if summary.enabled {
            writeln!(out, "\n{}", "-".repeat(80))?;
            writeln!(out, "SUMMARY (sort: {})", summary.sort.as_str())?;
            writeln!(out, "{}", "-".repeat(80))?;

            for (i, parameter) in results.parameters().iter().enumerate() {
                let ranked = results.summary(i);
                if ranked.is_empty() {
                    continue;
                }
                writeln!(out, "{} ({} bytes)", parameter.name, parameter.len)?;
                write_rows(out, &ranked, parameter.len, summary.sort)?;
            }
        }

        writeln!(out, "{}\n", "=".repeat(80))?;
        out.flush()
    }
}

fn write_rows<W: Write>(out: &mut W, ranked: &[Ranked], bytes: u64, sort: SortMode) -> io::Result<()> {
    for row in ranked {
        let ratio = row
            .ratio
            .map(|r| format!("{:>7.2}%", r * 100.0))
            .unwrap_or_else(|| format!("{:>8}", "N/A"));
        let throughput = row
            .throughput_mbs(bytes)
            .map(|mbs| format!("{:.2} MB/s", mbs))
            .unwrap_or_else(|| "N/A".to_string());
        let marker = if row.rank == 1 && sort != SortMode::None {
            "*"
        } else {
            " "
        };
        writeln!(
            out,
            "  {}{:>2}. {:<16} {:>12} {} {:>12.3} ms  {}",
            marker,
            row.rank,
            row.name,
            row.value,
            ratio,
            row.best_millis(),
            throughput
        )?;
    }
    Ok(())
}

impl<W: Write> Printer for ConsolePrinter<W> {
    fn print_results(&mut self, results: &TestResults) -> Result<()> {
        self.write_report(results)
            .map_err(|e| BenchError::Report(e.to_string()))
    }
}
