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

//! Pass registration and lifecycle.
//!
//! A pass is a registration-table entry: function pointers over a test's
//! private state `T`, resolved when the pass runs. Only `execute` is timed.

use crate::core::{timed, Measurement, Parameter};
use crate::error::Result;
use tracing::debug;

/// Measured operation of a pass. Returns the value recorded in results.
pub type ExecuteFn<T> = fn(&mut T, &Parameter) -> Result<u64>;

/// Setup or teardown hook bracketing [`ExecuteFn`].
pub type HookFn<T> = fn(&mut T, &Parameter) -> Result<()>;

/// One named phase of a test.
pub struct Pass<T> {
    name: String,
    setup: Option<HookFn<T>>,
    execute: ExecuteFn<T>,
    teardown: Option<HookFn<T>>,
}

impl<T> Pass<T> {
    /// Creates a pass around its measured operation.
    pub fn new(name: impl Into<String>, execute: ExecuteFn<T>) -> Self {
        Self {
            name: name.into(),
            setup: None,
            execute,
            teardown: None,
        }
    }

    /// Runs `setup` before every execution.
    pub fn with_setup(mut self, setup: HookFn<T>) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Runs `teardown` after every execution, including failed ones.
    pub fn with_teardown(mut self, teardown: HookFn<T>) -> Self {
        self.teardown = Some(teardown);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs setup, timed execute and teardown against `state`.
    ///
    /// Teardown runs whenever setup was attempted. The first error wins:
    /// a setup or execute failure is reported over a teardown failure.
    pub fn invoke(&self, state: &mut T, parameter: &Parameter) -> Result<Measurement> {
        let prepared = match self.setup {
            Some(setup) => setup(state, parameter),
            None => Ok(()),
        };

        let outcome = prepared.and_then(|()| {
            let (value, elapsed) = timed(|| (self.execute)(state, parameter));
            value.map(|value| Measurement::single(value, elapsed))
        });

        let released = match self.teardown {
            Some(teardown) => teardown(state, parameter),
            None => Ok(()),
        };

        let measurement = outcome?;
        released?;

        debug!(
            pass = %self.name,
            parameter = %parameter,
            value = measurement.value,
            elapsed_ns = measurement.as_nanos(),
            "pass executed"
        );
        Ok(measurement)
    }
}

/// Ordered pass table. Names are unique; re-registering replaces in place.
pub struct PassTable<T> {
    passes: Vec<Pass<T>>,
}

impl<T> PassTable<T> {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Registers a pass, replacing any pass with the same name.
    pub fn register(&mut self, pass: Pass<T>) {
        match self.passes.iter_mut().find(|p| p.name == pass.name) {
            Some(existing) => *existing = pass,
            None => self.passes.push(pass),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Pass<T>> {
        self.passes.iter().find(|p| p.name == name)
    }

    /// Pass names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.passes.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl<T> Default for PassTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
