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

//! Named benchmark inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identified input every test is measured against.
///
/// A parameter is immutable once built. The suite owns it and hands
/// `&Parameter` to tests during execution. The optional `bound` is the
/// denominator used by percentage scoring (the original size for file data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    data: Vec<u8>,
    bound: Option<u64>,
}

impl Parameter {
    /// Creates a parameter with no scoring bound.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            bound: None,
        }
    }

    /// Creates a parameter whose bound is its own length.
    pub fn sized(name: impl Into<String>, data: Vec<u8>) -> Self {
        let bound = data.len() as u64;
        Self::new(name, data).with_bound(bound)
    }

    /// Sets an explicit scoring bound.
    pub fn with_bound(mut self, bound: u64) -> Self {
        self.bound = Some(bound);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn bound(&self) -> Option<u64> {
        self.bound
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the serializable descriptor kept in results.
    pub fn info(&self) -> ParameterInfo {
        ParameterInfo {
            name: self.name.clone(),
            len: self.data.len() as u64,
            bound: self.bound,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Parameter metadata without the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Display name.
    pub name: String,
    /// Payload length in bytes.
    pub len: u64,
    /// Scoring bound, if any.
    pub bound: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_parameter_uses_length_as_bound() {
        let param = Parameter::sized("abc.txt", b"hello".to_vec());
        assert_eq!(param.bound(), Some(5));
        assert_eq!(param.len(), 5);
        assert_eq!(param.to_string(), "abc.txt");
    }

    #[test]
    fn test_unbounded_parameter() {
        let param = Parameter::new("raw", vec![1, 2, 3]);
        assert_eq!(param.bound(), None);
        assert_eq!(param.info().len, 3);
    }
}
