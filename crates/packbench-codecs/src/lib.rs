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

//! PackBench Codecs
//!
//! Compression codec adapters for the PackBench harness.
//!
//! ## Features
//!
//! - **Adapter contract**: [`Codec`] for size-aware in-place codecs,
//!   [`BufferCodec`] plus [`Buffered`] for whole-buffer libraries
//! - **Built-in codecs**: LZ4 block (default and accelerated) and frame,
//!   Snappy, raw deflate, gzip
//! - **Compression test**: `compression` and `decompression` passes with
//!   round-trip verification
//!
//! ## Usage
//!
//! ```
//! use packbench::core::{Parameter, PassConfig, SortMode};
//! use packbench::harness::TestSuite;
//! use packbench_codecs::{compression_test, COMPRESSION};
//!
//! let catalog = packbench_codecs::init();
//! let mut suite = TestSuite::new("codecs");
//! for codec in catalog.create_all() {
//!     suite.add_test(compression_test(codec));
//! }
//! suite
//!     .add_parameter(Parameter::sized("zeros", vec![0; 4096]))
//!     .set_pass_config(COMPRESSION, PassConfig::default().with_sort(SortMode::Percentage));
//!
//! let results = suite.execute().unwrap();
//! assert_eq!(results.ranking(COMPRESSION, 0).len(), 6);
//! ```

pub mod catalog;
pub mod codec;
pub mod deflate;
pub mod lz4;
pub mod snappy;

pub use catalog::{catalog, init, Catalog, CodecSpec, Shape};
pub use codec::{BufferCodec, Buffered, Codec, Phase};
pub use compression_test::{
    compression_test, verify, CompressionState, COMPRESSION, DECOMPRESSION,
};
pub use deflate::{Deflate, Gzip};
pub use crate::lz4::{Lz4, Lz4Fast, Lz4Frame};
pub use snappy::Snappy;
