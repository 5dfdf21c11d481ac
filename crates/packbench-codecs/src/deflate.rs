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

//! Deflate adapters over flate2.
//!
//! [`Deflate`] drives raw (headerless) deflate streams directly against the
//! caller's buffers. [`Gzip`] uses the whole-buffer gzip encoder/decoder.

use crate::codec::{BufferCodec, Codec};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use packbench::{BenchError, Result};
use std::io::{Read, Write};

/// Gzip header and trailer.
const GZIP_OVERHEAD: usize = 18;

/// Worst-case raw deflate output for `n` input bytes.
fn deflate_bound(n: usize) -> usize {
    n + (n >> 12) + (n >> 14) + (n >> 25) + 13 + 64
}

/// Raw deflate with reusable stream state.
pub struct Deflate {
    compress: Compress,
    decompress: Decompress,
}

impl Deflate {
    pub const NAME: &'static str = "deflate";

    pub fn new(level: Compression) -> Self {
        Self {
            compress: Compress::new(level, false),
            decompress: Decompress::new(false),
        }
    }
}

impl Default for Deflate {
    fn default() -> Self {
        Self::new(Compression::default())
    }
}

impl Codec for Deflate {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn bounded_size(&self, input_len: usize) -> usize {
        deflate_bound(input_len)
    }

    fn compress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        self.compress.reset();
        loop {
            let consumed = self.compress.total_in() as usize;
            let written = self.compress.total_out() as usize;
            let status = self
                .compress
                .compress(&src[consumed..], &mut dst[written..], FlushCompress::Finish)
                .map_err(|e| BenchError::codec(Self::NAME, e))?;

            if status == Status::StreamEnd {
                return Ok(self.compress.total_out() as usize);
            }
            if self.compress.total_in() as usize == consumed
                && self.compress.total_out() as usize == written
            {
                return Err(BenchError::BufferTooSmall {
                    required: deflate_bound(src.len()),
                    available: dst.len(),
                });
            }
        }
    }

    fn decompress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        self.decompress.reset(false);
        loop {
            let consumed = self.decompress.total_in() as usize;
            let written = self.decompress.total_out() as usize;
            let status = self
                .decompress
                .decompress(&src[consumed..], &mut dst[written..], FlushDecompress::Finish)
                .map_err(|e| BenchError::codec(Self::NAME, e))?;

            if status == Status::StreamEnd {
                return Ok(self.decompress.total_out() as usize);
            }
            let stalled = self.decompress.total_in() as usize == consumed
                && self.decompress.total_out() as usize == written;
            if stalled {
                return if written == dst.len() {
                    Err(BenchError::BufferTooSmall {
                        required: dst.len() + 1,
                        available: dst.len(),
                    })
                } else {
                    Err(BenchError::codec(Self::NAME, "truncated deflate stream"))
                };
            }
        }
    }
}

/// Gzip container around deflate.
#[derive(Debug, Clone, Copy)]
pub struct Gzip {
    level: Compression,
}

impl Gzip {
    pub const NAME: &'static str = "gzip";

    pub fn new(level: Compression) -> Self {
        Self { level }
    }
}

impl Default for Gzip {
    fn default() -> Self {
        Self::new(Compression::default())
    }
}

impl BufferCodec for Gzip {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn max_compressed_len(&self, input_len: usize) -> usize {
        deflate_bound(input_len) + GZIP_OVERHEAD
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::with_capacity(src.len() / 2 + 64), self.level);
        encoder
            .write_all(src)
            .map_err(|e| BenchError::codec(Self::NAME, e))?;
        encoder.finish().map_err(|e| BenchError::codec(Self::NAME, e))
    }

    fn decompress(&self, src: &[u8], original_len: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(original_len);
        GzDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| BenchError::codec(Self::NAME, e))?;
        Ok(out)
    }
}
