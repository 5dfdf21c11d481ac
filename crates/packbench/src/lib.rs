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

//! PackBench Benchmark Harness
//!
//! A parameterized multi-pass benchmark harness. Tests register named passes
//! (setup, timed execute, teardown), a suite runs every enabled pass of every
//! test against every parameter, and printers rank and present the results.
//!
//! ## Features
//!
//! - **Pass tables**: Function-pointer registration with a fixed lifecycle
//! - **Rankings**: Per-pass sort policies with deterministic tie handling
//! - **Fixtures**: Directory scanning with glob patterns and size limits
//! - **Printers**: Console tables, JSON export and Chart.js HTML
//!
//! ## Usage
//!
//! ```
//! use packbench::core::{Parameter, PassConfig, SortMode};
//! use packbench::harness::{BenchTest, Pass, TestSuite};
//! use packbench::Result;
//!
//! fn halve(_: &mut (), param: &Parameter) -> Result<u64> {
//!     Ok(param.len() as u64 / 2)
//! }
//!
//! let results = TestSuite::new("halving")
//!     .with_test(BenchTest::new("half", ()).with_pass(Pass::new("compression", halve)))
//!     .with_parameter(Parameter::sized("eight", vec![1; 8]))
//!     .with_pass_config("compression", PassConfig::default().with_sort(SortMode::Percentage))
//!     .execute()
//!     .unwrap();
//!
//! let ranked = results.ranking("compression", 0);
//! assert_eq!(ranked[0].ratio, Some(0.5));
//! ```

pub mod core;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod reporters;

// Re-export key types for convenience
pub use crate::core::{Measurement, Parameter, PassConfig, SortMode, SortOrder, TieBreak};
pub use error::{BenchError, Result};
pub use harness::{
    BenchTest, Bootstrap, CodeTest, Pass, Ranked, TestHarness, TestResults, TestSuite,
};
pub use reporters::Printer;
