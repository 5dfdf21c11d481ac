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

//! Benchmarked tests.
//!
//! [`CodeTest`] is the object-safe seam the suite drives. [`BenchTest`] is
//! the standard implementation: a name, private scratch state shared by its
//! own passes, and a [`PassTable`] over that state.

use crate::core::{Measurement, Parameter};
use crate::error::{BenchError, Result};
use crate::harness::pass::{Pass, PassTable};

/// A named unit owning a set of passes.
pub trait CodeTest {
    /// Test name, unique within a suite.
    fn name(&self) -> &str;

    /// Registered pass names in registration order.
    fn pass_names(&self) -> Vec<&str>;

    /// Returns whether `pass` is registered.
    fn has_pass(&self, pass: &str) -> bool {
        self.pass_names().contains(&pass)
    }

    /// Runs one pass lifecycle for `parameter`.
    ///
    /// Fails with [`BenchError::UnknownPass`] when `pass` is not registered.
    fn run(&mut self, pass: &str, parameter: &Parameter) -> Result<Measurement>;
}

/// A test built from a pass table over private state `T`.
///
/// # Example
///
/// ```
/// use packbench::core::Parameter;
/// use packbench::harness::{BenchTest, CodeTest, Pass};
/// use packbench::Result;
///
/// fn count(state: &mut u64, param: &Parameter) -> Result<u64> {
///     *state += 1;
///     Ok(param.len() as u64)
/// }
///
/// let mut test = BenchTest::new("length", 0u64).with_pass(Pass::new("measure", count));
/// let m = test.run("measure", &Parameter::new("abc", b"abc".to_vec())).unwrap();
/// assert_eq!(m.value, 3);
/// assert_eq!(*test.state(), 1);
/// ```
pub struct BenchTest<T> {
    name: String,
    state: T,
    passes: PassTable<T>,
}

impl<T> BenchTest<T> {
    pub fn new(name: impl Into<String>, state: T) -> Self {
        Self {
            name: name.into(),
            state,
            passes: PassTable::new(),
        }
    }

    /// Registers a pass, replacing one with the same name.
    pub fn register_pass(&mut self, pass: Pass<T>) -> &mut Self {
        self.passes.register(pass);
        self
    }

    /// Builder form of [`register_pass`](Self::register_pass).
    pub fn with_pass(mut self, pass: Pass<T>) -> Self {
        self.passes.register(pass);
        self
    }

    pub fn state(&self) -> &T {
        &self.state
    }
}

impl<T> CodeTest for BenchTest<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn pass_names(&self) -> Vec<&str> {
        self.passes.names().collect()
    }

    fn has_pass(&self, pass: &str) -> bool {
        self.passes.get(pass).is_some()
    }

    fn run(&mut self, pass: &str, parameter: &Parameter) -> Result<Measurement> {
        let entry = self
            .passes
            .get(pass)
            .ok_or_else(|| BenchError::UnknownPass {
                test: self.name.clone(),
                pass: pass.to_string(),
            })?;
        entry.invoke(&mut self.state, parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Scratch {
        produced: Vec<u8>,
        leftovers: usize,
    }

    fn produce_setup(state: &mut Scratch, _: &Parameter) -> Result<()> {
        state.leftovers += state.produced.len();
        Ok(())
    }

    fn produce(state: &mut Scratch, param: &Parameter) -> Result<u64> {
        state.produced.extend_from_slice(param.data());
        Ok(state.produced.len() as u64)
    }

    fn produce_teardown(state: &mut Scratch, _: &Parameter) -> Result<()> {
        state.produced.clear();
        Ok(())
    }

    fn scratch_test() -> BenchTest<Scratch> {
        BenchTest::new("scratch", Scratch::default()).with_pass(
            Pass::new("produce", produce)
                .with_setup(produce_setup)
                .with_teardown(produce_teardown),
        )
    }

    #[test]
    fn test_unknown_pass() {
        let mut test = scratch_test();
        let err = test
            .run("fuzz", &Parameter::new("p", vec![]))
            .unwrap_err();
        assert_eq!(
            err,
            BenchError::UnknownPass {
                test: "scratch".to_string(),
                pass: "fuzz".to_string()
            }
        );
    }

    #[test]
    fn test_repeated_runs_need_no_manual_reset() {
        let mut test = scratch_test();
        let a = Parameter::new("a", vec![1; 4]);
        let b = Parameter::new("b", vec![2; 9]);

        assert_eq!(test.run("produce", &a).unwrap().value, 4);
        assert_eq!(test.run("produce", &b).unwrap().value, 9);
        assert_eq!(test.run("produce", &a).unwrap().value, 4);
        assert_eq!(test.state().leftovers, 0);
    }

    #[test]
    fn test_pass_names_and_lookup() {
        let test = scratch_test();
        assert_eq!(test.pass_names(), vec!["produce"]);
        assert!(test.has_pass("produce"));
        assert!(!test.has_pass("consume"));
    }
}
