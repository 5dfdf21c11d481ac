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

//! End-to-end tests for the packbench binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn packbench_cmd() -> Command {
    let mut cmd = Command::cargo_bin("packbench").expect("Failed to find packbench binary");
    cmd.env_remove("PACKBENCH_MAX_FILE_SIZE").env_remove("RUST_LOG");
    cmd
}

fn create_corpus() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("prose.txt"),
        "It was the best of times, it was the worst of times. ".repeat(200),
    )
    .expect("Failed to write prose");
    fs::write(dir.path().join("zeros.bin"), vec![0u8; 10_000]).expect("Failed to write zeros");
    dir
}

#[test]
fn test_help() {
    packbench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compression codec benchmark"));
}

#[test]
fn test_list_codecs() {
    packbench_cmd()
        .arg("--list-codecs")
        .assert()
        .success()
        .stdout(predicate::str::contains("lz4"))
        .stdout(predicate::str::contains("lz4-fast"))
        .stdout(predicate::str::contains("lz4-frame"))
        .stdout(predicate::str::contains("snappy"))
        .stdout(predicate::str::contains("deflate"))
        .stdout(predicate::str::contains("gzip"));
}

#[test]
fn test_console_report() {
    let dir = create_corpus();
    packbench_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BENCHMARK RESULTS"))
        .stdout(predicate::str::contains("PASS: compression (sort: percentage)"))
        .stdout(predicate::str::contains("PASS: decompression (sort: time)"))
        .stdout(predicate::str::contains("prose.txt"))
        .stdout(predicate::str::contains("zeros.bin"));
}

#[test]
fn test_json_and_html_outputs() {
    let dir = create_corpus();
    let out = tempdir().expect("Failed to create output dir");

    packbench_cmd()
        .arg(dir.path())
        .args(["--codec", "lz4", "--codec", "gzip", "--samples", "2"])
        .args(["--format", "json", "--format", "html"])
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success();

    let json = fs::read_to_string(out.path().join("packbench.json")).expect("json report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["tests"], serde_json::json!(["lz4", "gzip"]));
    assert_eq!(value["entries"].as_array().unwrap().len(), 2 * 2 * 2);

    let html = fs::read_to_string(out.path().join("packbench.html")).expect("html report");
    assert!(html.contains("renderChart("));
    assert!(html.contains("chart.js@2.9.4"));
}

#[test]
fn test_pattern_filters_files() {
    let dir = create_corpus();
    packbench_cmd()
        .arg(dir.path())
        .args(["--pattern", "*.txt", "--codec", "snappy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prose.txt"))
        .stdout(predicate::str::contains("zeros.bin").not());
}

#[test]
fn test_max_size_from_environment() {
    let dir = create_corpus();
    packbench_cmd()
        .env("PACKBENCH_MAX_FILE_SIZE", "100")
        .arg(dir.path())
        .args(["--codec", "lz4", "--skip-pass", "decompression"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(100 bytes)"));
}

#[test]
fn test_unknown_codec_fails() {
    let dir = create_corpus();
    packbench_cmd()
        .arg(dir.path())
        .args(["--codec", "zstd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown codec 'zstd'"));
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    packbench_cmd()
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_zero_samples_rejected() {
    let dir = create_corpus();
    packbench_cmd()
        .arg(dir.path())
        .args(["--samples", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("samples"));
}
