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

//! Result printers.
//!
//! # Modules
//!
//! - `console`: Ranking tables on any `io::Write`
//! - `json`: JSON export
//! - `html`: Chart.js HTML report
//! - `types`: Serializable report structures shared by the exporters

pub mod console;
pub mod html;
pub mod json;
pub mod types;

use crate::error::Result;
use crate::harness::TestResults;

/// Renders results. Printers never inspect how results were produced.
pub trait Printer {
    /// Renders `results`.
    fn print_results(&mut self, results: &TestResults) -> Result<()>;

    /// Opens the rendered output for viewing, if that means anything for
    /// this printer.
    fn open(&self) -> Result<()> {
        Ok(())
    }
}

// Re-export commonly used types
pub use console::ConsolePrinter;
pub use html::ChartJsPrinter;
pub use json::{export_json, JsonPrinter};
pub use types::{ParameterRanking, PassReport, ResultsReport};
