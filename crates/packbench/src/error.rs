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

//! Error types for benchmark execution.
//!
//! Every failure the harness can hit is a [`BenchError`] variant. Only
//! [`BenchError::UnknownPass`] is recoverable: the suite skips the
//! combination. Everything else aborts the run, wrapped in
//! [`BenchError::PassFailed`] once the failing cell of the matrix is known.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// A test was asked to run a pass it never registered.
    #[error("test '{test}' has no pass named '{pass}'")]
    UnknownPass {
        /// Test name
        test: String,
        /// Requested pass name
        pass: String,
    },

    /// Decompressed output does not reproduce the source.
    #[error("round-trip mismatch: expected {expected_len} bytes, got {actual_len}{}", mismatch_suffix(.first_mismatch))]
    RoundTrip {
        /// Length of the source buffer
        expected_len: usize,
        /// Length of the restored buffer
        actual_len: usize,
        /// Offset of the first differing byte, if the lengths agree
        first_mismatch: Option<usize>,
    },

    /// The underlying codec library reported a failure.
    #[error("codec '{codec}' failed: {message}")]
    Codec {
        /// Codec name
        codec: String,
        /// Library error message
        message: String,
    },

    /// A destination buffer was too small for the operation.
    #[error("destination buffer too small: need at least {required} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes required (a lower bound when unknown)
        required: usize,
        /// Bytes available
        available: usize,
    },

    /// A codec wrote more than its advertised bound.
    #[error("codec '{codec}' wrote {written} bytes, above its bound of {bound}")]
    BoundExceeded {
        /// Codec name
        codec: String,
        /// Bytes written
        written: usize,
        /// Advertised bound
        bound: usize,
    },

    /// No codec with this name exists in the catalogue.
    #[error("unknown codec '{0}'")]
    UnknownCodec(String),

    /// A process-wide initialization step was skipped.
    #[error("{0} used before initialization")]
    NotInitialized(&'static str),

    /// Invalid configuration parameter
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// File enumeration or loading failed.
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// Offending path
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A file glob could not be compiled.
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// Writing or opening a report failed.
    #[error("report error: {0}")]
    Report(String),

    /// A fatal error inside one cell of the execution matrix.
    #[error("pass '{pass}' of test '{test}' failed on '{parameter}': {source}")]
    PassFailed {
        /// Test name
        test: String,
        /// Parameter name
        parameter: String,
        /// Pass name
        pass: String,
        /// Underlying failure
        #[source]
        source: Box<BenchError>,
    },
}

fn mismatch_suffix(first_mismatch: &Option<usize>) -> String {
    match first_mismatch {
        Some(offset) => format!(" (first difference at byte {})", offset),
        None => String::new(),
    }
}

impl BenchError {
    /// Builds an [`BenchError::Io`] from a path and any displayable error.
    pub fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        BenchError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Builds a [`BenchError::Codec`] from a codec name and library error.
    pub fn codec(codec: impl Into<String>, err: impl std::fmt::Display) -> Self {
        BenchError::Codec {
            codec: codec.into(),
            message: err.to_string(),
        }
    }

    /// Returns whether the harness recovers from this error by skipping.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BenchError::UnknownPass { .. })
    }

    /// Returns the innermost error, looking through [`BenchError::PassFailed`].
    pub fn root_cause(&self) -> &BenchError {
        match self {
            BenchError::PassFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
