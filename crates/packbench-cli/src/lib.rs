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

//! PackBench CLI library.
//!
//! - **cli**: Argument definitions
//! - **harness**: [`CompressionHarness`], the benchmark the binary runs

pub mod cli;
pub mod harness;

pub use cli::{Cli, Format, DEFAULT_MAX_FILE_SIZE};
pub use harness::CompressionHarness;

use packbench::{Bootstrap, Result};

/// Runs the command described by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.list_codecs {
        for spec in packbench_codecs::init().specs() {
            println!("{:<12} {}", spec.name, spec.description);
        }
        return Ok(());
    }

    let harness = CompressionHarness::from_cli(cli)?;
    Bootstrap::run_tests(&harness)
}
