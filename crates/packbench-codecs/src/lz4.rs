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

//! LZ4 adapters: the raw block format in place (default and accelerated),
//! and the frame format through the whole-buffer shape.

use crate::codec::{BufferCodec, Codec};
use lz4_flex::block::{self, CompressError, DecompressError};
use lz4_flex::frame::{FrameDecoder, FrameEncoder};
use ::lz4::block::{self as accelerated, CompressionMode};
use packbench::{BenchError, Result};
use std::io::{Read, Write};

/// Default frame block size.
const FRAME_BLOCK: usize = 64 * 1024;

/// Largest input the reference block compressor accepts.
const LZ4_MAX_INPUT: usize = 0x7E00_0000;

/// LZ4 block format. Output carries no length prefix, so restoring needs a
/// destination sized to the original input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4;

impl Lz4 {
    pub const NAME: &'static str = "lz4";
}

impl Codec for Lz4 {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn bounded_size(&self, input_len: usize) -> usize {
        block::get_maximum_output_size(input_len)
    }

    fn compress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let available = dst.len();
        block::compress_into(src, dst).map_err(|e| match e {
            CompressError::OutputTooSmall { .. } => BenchError::BufferTooSmall {
                required: self.bounded_size(src.len()),
                available,
            },
            #[allow(unreachable_patterns)]
            other => BenchError::codec(Self::NAME, other),
        })
    }

    fn decompress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let available = dst.len();
        block::decompress_into(src, dst).map_err(|e| match e {
            DecompressError::OutputTooSmall { .. } => BenchError::BufferTooSmall {
                required: available + 1,
                available,
            },
            other => BenchError::codec(Self::NAME, other),
        })
    }
}

/// LZ4 block format with acceleration: fewer match attempts, faster and
/// larger output than [`Lz4`]. Produces plain blocks any LZ4 decoder reads.
#[derive(Debug, Clone, Copy)]
pub struct Lz4Fast {
    acceleration: i32,
}

impl Lz4Fast {
    pub const NAME: &'static str = "lz4-fast";
    pub const DEFAULT_ACCELERATION: i32 = 10;

    pub fn new(acceleration: i32) -> Self {
        Self {
            acceleration: acceleration.max(1),
        }
    }

    pub fn acceleration(&self) -> i32 {
        self.acceleration
    }
}

impl Default for Lz4Fast {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ACCELERATION)
    }
}

impl Codec for Lz4Fast {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn max_input_len(&self) -> usize {
        LZ4_MAX_INPUT
    }

    fn bounded_size(&self, input_len: usize) -> usize {
        accelerated::compress_bound(input_len).unwrap_or(usize::MAX)
    }

    fn compress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let required = self.bounded_size(src.len());
        if dst.len() < required {
            return Err(BenchError::BufferTooSmall {
                required,
                available: dst.len(),
            });
        }
        let mode = Some(CompressionMode::FAST(self.acceleration));
        accelerated::compress_to_buffer(src, mode, false, dst)
            .map_err(|e| BenchError::codec(Self::NAME, e))
    }

    fn decompress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let capacity = i32::try_from(dst.len()).map_err(|_| {
            BenchError::codec(Self::NAME, format!("{} byte destination too large", dst.len()))
        })?;
        accelerated::decompress_to_buffer(src, Some(capacity), dst)
            .map_err(|e| BenchError::codec(Self::NAME, e))
    }
}

/// LZ4 frame format (magic, block headers, end mark).
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4Frame;

impl Lz4Frame {
    pub const NAME: &'static str = "lz4-frame";
}

impl BufferCodec for Lz4Frame {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn max_compressed_len(&self, input_len: usize) -> usize {
        let blocks = ((input_len + FRAME_BLOCK - 1) / FRAME_BLOCK).max(1);
        block::get_maximum_output_size(input_len) + blocks * 24 + 32
    }

    fn compress(&self, src: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = FrameEncoder::new(Vec::with_capacity(src.len() / 2 + 64));
        encoder
            .write_all(src)
            .map_err(|e| BenchError::codec(Self::NAME, e))?;
        encoder
            .finish()
            .map_err(|e| BenchError::codec(Self::NAME, e))
    }

    fn decompress(&self, src: &[u8], original_len: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(original_len);
        FrameDecoder::new(src)
            .read_to_end(&mut out)
            .map_err(|e| BenchError::codec(Self::NAME, e))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Buffered;

    const TEXT: &[u8] = b"the quick brown fox jumps over the lazy dog, the quick brown fox";

    #[test]
    fn test_block_round_trip() {
        let mut codec = Lz4;
        let mut compressed = vec![0; codec.bounded_size(TEXT.len())];
        let n = codec.compress_into(TEXT, &mut compressed).unwrap();

        let mut restored = vec![0; TEXT.len()];
        let m = codec.decompress_into(&compressed[..n], &mut restored).unwrap();
        assert_eq!(&restored[..m], TEXT);
    }

    #[test]
    fn test_block_destination_too_small() {
        let mut codec = Lz4;
        let mut compressed = [0u8; 4];
        let err = codec.compress_into(TEXT, &mut compressed).unwrap_err();
        assert!(matches!(err, BenchError::BufferTooSmall { .. }));
    }

    #[test]
    fn test_block_rejects_garbage() {
        let mut codec = Lz4;
        let mut restored = [0u8; 16];
        assert!(codec.decompress_into(&[0xff; 8], &mut restored).is_err());
    }

    #[test]
    fn test_fast_round_trip() {
        let input = TEXT.repeat(64);
        let mut codec = Lz4Fast::default();
        assert_eq!(codec.acceleration(), 10);

        let mut compressed = vec![0; codec.bounded_size(input.len())];
        let n = codec.compress_into(&input, &mut compressed).unwrap();
        assert!(n < input.len());

        let mut restored = vec![0; input.len()];
        let m = codec.decompress_into(&compressed[..n], &mut restored).unwrap();
        assert_eq!(restored[..m], input[..]);
    }

    #[test]
    fn test_fast_output_is_a_plain_block() {
        let input = TEXT.repeat(16);
        let mut fast = Lz4Fast::default();
        let mut compressed = vec![0; fast.bounded_size(input.len())];
        let n = fast.compress_into(&input, &mut compressed).unwrap();

        let mut restored = vec![0; input.len()];
        let m = Lz4.decompress_into(&compressed[..n], &mut restored).unwrap();
        assert_eq!(restored[..m], input[..]);
    }

    #[test]
    fn test_fast_destination_too_small() {
        let mut codec = Lz4Fast::default();
        let mut compressed = [0u8; 4];
        assert_eq!(
            codec.compress_into(TEXT, &mut compressed),
            Err(BenchError::BufferTooSmall {
                required: codec.bounded_size(TEXT.len()),
                available: 4,
            })
        );
    }

    #[test]
    fn test_fast_input_limit() {
        let codec = Lz4Fast::default();
        assert_eq!(codec.max_input_len(), 0x7E00_0000);
        assert!(codec.bounded_size(codec.max_input_len()) < usize::MAX);
        assert_eq!(codec.bounded_size(i32::MAX as usize + 1), usize::MAX);
    }

    #[test]
    fn test_fast_acceleration_clamped() {
        assert_eq!(Lz4Fast::new(0).acceleration(), 1);
        assert_eq!(Lz4Fast::new(-5).acceleration(), 1);
    }

    #[test]
    fn test_frame_round_trip() {
        let mut codec = Buffered::new(Lz4Frame);
        let mut compressed = vec![0; codec.bounded_size(TEXT.len())];
        let n = codec.compress_into(TEXT, &mut compressed).unwrap();
        assert_eq!(&compressed[..4], &[0x04, 0x22, 0x4d, 0x18]);

        let mut restored = vec![0; TEXT.len()];
        let m = codec.decompress_into(&compressed[..n], &mut restored).unwrap();
        assert_eq!(&restored[..m], TEXT);
    }
}
