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

//! File discovery and loading.
//!
//! Used only while a harness builds its suite. Execution never touches the
//! filesystem.

use crate::core::Parameter;
use crate::error::{BenchError, Result};
use glob::{MatchOptions, Pattern};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// A file found by [`find_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Lazily enumerates regular files directly inside `dir` whose file name
/// matches the glob `pattern`, sorted by file name.
///
/// # Arguments
///
/// * `dir` - Directory to scan (not recursive)
/// * `pattern` - Glob matched against the file name, e.g. `*.*` or `*.txt`
///
/// # Errors
///
/// Fails up front on an invalid pattern; per-entry failures are yielded.
pub fn find_files(
    dir: impl AsRef<Path>,
    pattern: &str,
) -> Result<impl Iterator<Item = Result<FoundFile>>> {
    let matcher = Pattern::new(pattern).map_err(|e| BenchError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    let dir = dir.as_ref().to_path_buf();

    let walker = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter();

    Ok(walker.filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                return Some(Err(BenchError::io(path, e)));
            }
        };
        if !entry.file_type().is_file() {
            return None;
        }
        // Non-UTF-8 names are matched in their lossy form, like parameter names
        let name = entry.file_name().to_string_lossy();
        if !matcher.matches_with(&name, options) {
            return None;
        }
        Some(
            entry
                .metadata()
                .map(|meta| FoundFile {
                    path: entry.path().to_path_buf(),
                    size: meta.len(),
                })
                .map_err(|e| BenchError::io(entry.path(), e)),
        )
    }))
}

/// Reads a whole file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| BenchError::io(path, e))
}

/// Reads at most `max_size` bytes from the start of a file.
pub fn read_file_limited(path: impl AsRef<Path>, max_size: u64) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    let mut data = Vec::new();
    file.take(max_size)
        .read_to_end(&mut data)
        .map_err(|e| BenchError::io(path, e))?;
    Ok(data)
}

/// Builds a parameter from a file: named after the last path component,
/// bounded by the loaded length, optionally truncated to `max_size` bytes.
pub fn file_parameter(path: impl AsRef<Path>, max_size: Option<u64>) -> Result<Parameter> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let data = match max_size {
        Some(max) => read_file_limited(path, max)?,
        None => read_file(path)?,
    };
    Ok(Parameter::sized(name, data))
}

/// Loads every matching file in `dir` as a parameter.
///
/// Entries that cannot be read are skipped with a warning; an invalid
/// pattern or a missing directory is an error.
pub fn load_parameters(
    dir: impl AsRef<Path>,
    pattern: &str,
    max_size: Option<u64>,
) -> Result<Vec<Parameter>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(BenchError::io(dir, "not a directory"));
    }

    let mut parameters = Vec::new();
    for found in find_files(dir, pattern)? {
        match found.and_then(|f| file_parameter(&f.path, max_size)) {
            Ok(parameter) => parameters.push(parameter),
            Err(e) => warn!(error = %e, "skipping unreadable file"),
        }
    }
    Ok(parameters)
}
