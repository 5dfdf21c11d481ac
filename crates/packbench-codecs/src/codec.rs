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

//! Codec adapter contract.
//!
//! [`Codec`] is the canonical size-aware shape: the caller owns both buffers
//! and sizes the destination with [`Codec::bounded_size`]. [`BufferCodec`] is
//! the whole-buffer shape some libraries expose; [`Buffered`] adapts it.

use packbench::{BenchError, Result};

/// Which half of a round trip a hook brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Compress,
    Decompress,
}

/// A size-aware compression codec.
pub trait Codec: Send {
    /// Short identifier, also used as the test name.
    fn name(&self) -> &str;

    /// Largest input the format accepts.
    fn max_input_len(&self) -> usize {
        usize::MAX
    }

    /// Upper bound on compressed output for any `input_len`-byte input up to
    /// [`Codec::max_input_len`].
    fn bounded_size(&self, input_len: usize) -> usize;

    /// Compresses `src` into `dst`, returning the number of bytes written.
    ///
    /// Fails with [`BenchError::BufferTooSmall`] when `dst` cannot hold the
    /// output.
    fn compress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize>;

    /// Restores `src` into `dst`, returning the number of bytes written.
    fn decompress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize>;

    /// Acquires per-phase resources. Runs before every timed call.
    fn setup(&mut self, _phase: Phase) -> Result<()> {
        Ok(())
    }

    /// Releases what [`Codec::setup`] acquired.
    fn teardown(&mut self, _phase: Phase) -> Result<()> {
        Ok(())
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn max_input_len(&self) -> usize {
        (**self).max_input_len()
    }

    fn bounded_size(&self, input_len: usize) -> usize {
        (**self).bounded_size(input_len)
    }

    fn compress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        (**self).compress_into(src, dst)
    }

    fn decompress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        (**self).decompress_into(src, dst)
    }

    fn setup(&mut self, phase: Phase) -> Result<()> {
        (**self).setup(phase)
    }

    fn teardown(&mut self, phase: Phase) -> Result<()> {
        (**self).teardown(phase)
    }
}

/// A whole-buffer codec producing owned output.
pub trait BufferCodec: Send {
    fn name(&self) -> &str;

    fn max_compressed_len(&self, input_len: usize) -> usize;

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>>;

    /// Restores `src`; `original_len` is a capacity hint.
    fn decompress(&self, src: &[u8], original_len: usize) -> Result<Vec<u8>>;
}

/// Presents a [`BufferCodec`] as a [`Codec`] by copying its output into the
/// caller's buffer.
#[derive(Debug, Clone, Default)]
pub struct Buffered<C> {
    inner: C,
}

impl<C: BufferCodec> Buffered<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: BufferCodec> Codec for Buffered<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn bounded_size(&self, input_len: usize) -> usize {
        self.inner.max_compressed_len(input_len)
    }

    fn compress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let out = self.inner.compress(src)?;
        copy_out(&out, dst)
    }

    fn decompress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let out = self.inner.decompress(src, dst.len())?;
        copy_out(&out, dst)
    }
}

fn copy_out(out: &[u8], dst: &mut [u8]) -> Result<usize> {
    if out.len() > dst.len() {
        return Err(BenchError::BufferTooSmall {
            required: out.len(),
            available: dst.len(),
        });
    }
    dst[..out.len()].copy_from_slice(out);
    Ok(out.len())
}
