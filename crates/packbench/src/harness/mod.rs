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

//! Benchmark harness.
//!
//! Passes are registered on tests, tests and parameters are collected in a
//! suite, and the bootstrap runs a harness's suite once and hands the
//! results back to the harness for printing.
//!
//! # Modules
//!
//! - `pass`: Pass registration table and setup/execute/teardown lifecycle
//! - `test`: The `CodeTest` seam and the table-driven `BenchTest`
//! - `suite`: Execution matrix
//! - `results`: Captured results
//! - `aggregator`: Per-parameter ranking and the cross-pass summary
//! - `runner`: `TestHarness` contract and `Bootstrap`

pub mod aggregator;
pub mod pass;
pub mod results;
pub mod runner;
pub mod suite;
pub mod test;

pub use aggregator::{rank, Ranked};
pub use pass::{ExecuteFn, HookFn, Pass, PassTable};
pub use results::{PassInfo, ResultKey, TestResults};
pub use runner::{Bootstrap, TestHarness};
pub use suite::TestSuite;
pub use test::{BenchTest, CodeTest};
