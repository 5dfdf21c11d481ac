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

//! Registry of the built-in codecs.
//!
//! The catalogue is built once by [`init`]; lookups before that fail with
//! [`BenchError::NotInitialized`].

use crate::codec::{Buffered, Codec};
use crate::deflate::{Deflate, Gzip};
use crate::lz4::{Lz4, Lz4Fast, Lz4Frame};
use crate::snappy::Snappy;
use once_cell::sync::OnceCell;
use packbench::{BenchError, Result};
use tracing::info;

/// Which adapter shape a codec uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Writes directly into caller-sized buffers.
    InPlace,
    /// Produces owned buffers, copied out by [`Buffered`].
    WholeBuffer,
}

/// Catalogue entry.
pub struct CodecSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub shape: Shape,
    factory: fn() -> Box<dyn Codec>,
}

impl CodecSpec {
    /// Builds a fresh codec instance.
    pub fn create(&self) -> Box<dyn Codec> {
        (self.factory)()
    }
}

pub struct Catalog {
    specs: Vec<CodecSpec>,
}

impl Catalog {
    fn builtin() -> Self {
        let specs = vec![
            CodecSpec {
                name: Lz4::NAME,
                description: "LZ4 block format",
                shape: Shape::InPlace,
                factory: || Box::new(Lz4),
            },
            CodecSpec {
                name: Lz4Fast::NAME,
                description: "LZ4 block format, acceleration 10",
                shape: Shape::InPlace,
                factory: || Box::new(Lz4Fast::default()),
            },
            CodecSpec {
                name: Lz4Frame::NAME,
                description: "LZ4 frame format",
                shape: Shape::WholeBuffer,
                factory: || Box::new(Buffered::new(Lz4Frame)),
            },
            CodecSpec {
                name: Snappy::NAME,
                description: "Snappy raw format",
                shape: Shape::InPlace,
                factory: || Box::new(Snappy::new()),
            },
            CodecSpec {
                name: Deflate::NAME,
                description: "Raw deflate, default level",
                shape: Shape::InPlace,
                factory: || Box::new(Deflate::default()),
            },
            CodecSpec {
                name: Gzip::NAME,
                description: "Gzip, default level",
                shape: Shape::WholeBuffer,
                factory: || Box::new(Buffered::new(Gzip::default())),
            },
        ];
        Self { specs }
    }

    /// Entries in registration order.
    pub fn specs(&self) -> &[CodecSpec] {
        &self.specs
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|s| s.name)
    }

    pub fn get(&self, name: &str) -> Option<&CodecSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Builds the codec registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Codec>> {
        self.get(name)
            .map(CodecSpec::create)
            .ok_or_else(|| BenchError::UnknownCodec(name.to_string()))
    }

    /// Builds every codec in registration order.
    pub fn create_all(&self) -> Vec<Box<dyn Codec>> {
        self.specs.iter().map(CodecSpec::create).collect()
    }
}

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Builds the catalogue. Safe to call any number of times.
pub fn init() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let catalog = Catalog::builtin();
        info!(codecs = catalog.specs.len(), "codec catalogue initialized");
        catalog
    })
}

/// The catalogue built by [`init`].
pub fn catalog() -> Result<&'static Catalog> {
    CATALOG
        .get()
        .ok_or(BenchError::NotInitialized("codec catalogue"))
}
