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

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default per-file read limit (64 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Output format of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Ranking tables on stdout
    Console,
    /// `packbench.json` in the output directory
    Json,
    /// `packbench.html` with Chart.js charts in the output directory
    Html,
}

/// PackBench - compression codec benchmark
///
/// Loads every matching file in a directory, compresses and decompresses it
/// with each selected codec, verifies the round trip, and ranks the codecs
/// per file by compression ratio and time.
///
/// # Examples
///
/// ```bash
/// # All codecs over every file with an extension
/// packbench ./corpus
///
/// # LZ4 against Snappy on text files, five samples, HTML report
/// packbench ./corpus --pattern "*.txt" --codec lz4 --codec snappy \
///     --samples 5 --format html --open
/// ```
#[derive(Debug, Parser)]
#[command(name = "packbench")]
#[command(author, version, about = "PackBench - compression codec benchmark", long_about = None)]
pub struct Cli {
    /// Directory holding the files to benchmark
    #[arg(value_name = "DIR", required_unless_present = "list_codecs")]
    pub data_dir: Option<PathBuf>,

    /// Glob matched against file names (not recursive)
    #[arg(short, long, default_value = "*.*")]
    pub pattern: String,

    /// Maximum bytes read from each file
    #[arg(long, env = "PACKBENCH_MAX_FILE_SIZE", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Codec to benchmark (repeatable, defaults to all)
    #[arg(short, long = "codec", value_name = "NAME")]
    pub codecs: Vec<String>,

    /// Full setup/execute/teardown repetitions per measurement
    #[arg(short, long, default_value_t = 1)]
    pub samples: u32,

    /// Pass to disable: compression or decompression (repeatable)
    #[arg(long = "skip-pass", value_name = "PASS")]
    pub skip_passes: Vec<String>,

    /// Output format (repeatable)
    #[arg(short, long = "format", value_enum, default_values_t = [Format::Console])]
    pub formats: Vec<Format>,

    /// Directory for file outputs
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Open the HTML report when done
    #[arg(long)]
    pub open: bool,

    /// List available codecs and exit
    #[arg(long)]
    pub list_codecs: bool,
}
