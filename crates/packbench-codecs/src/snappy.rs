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

//! Snappy raw format.
//!
//! The encoder and decoder carry reusable scratch tables. They are built in
//! the setup hook of the phase that needs them and dropped in teardown, so
//! allocation stays outside the timed call.

use crate::codec::{Codec, Phase};
use packbench::{BenchError, Result};
use snap::raw::{max_compress_len, Decoder, Encoder};

/// Largest input whose worst-case output `32 + n + n / 6` still fits the
/// format's 32-bit length.
const MAX_INPUT_LEN: usize = ((u32::MAX as u64 - 32) * 6 / 7) as usize;

#[derive(Default)]
pub struct Snappy {
    encoder: Option<Encoder>,
    decoder: Option<Decoder>,
}

impl Snappy {
    pub const NAME: &'static str = "snappy";

    pub fn new() -> Self {
        Self::default()
    }
}

fn map_error(err: snap::Error, available: usize) -> BenchError {
    match err {
        snap::Error::BufferTooSmall { given, min } => BenchError::BufferTooSmall {
            required: min as usize,
            available: (given as usize).min(available),
        },
        other => BenchError::codec(Snappy::NAME, other),
    }
}

impl Codec for Snappy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn max_input_len(&self) -> usize {
        MAX_INPUT_LEN
    }

    fn bounded_size(&self, input_len: usize) -> usize {
        // Zero signals an input too large for the format.
        match max_compress_len(input_len) {
            0 => usize::MAX,
            n => n,
        }
    }

    fn compress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let available = dst.len();
        let encoder = self
            .encoder
            .as_mut()
            .ok_or(BenchError::NotInitialized("snappy encoder"))?;
        encoder
            .compress(src, dst)
            .map_err(|e| map_error(e, available))
    }

    fn decompress_into(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let available = dst.len();
        let decoder = self
            .decoder
            .as_mut()
            .ok_or(BenchError::NotInitialized("snappy decoder"))?;
        decoder
            .decompress(src, dst)
            .map_err(|e| map_error(e, available))
    }

    fn setup(&mut self, phase: Phase) -> Result<()> {
        match phase {
            Phase::Compress => self.encoder = Some(Encoder::new()),
            Phase::Decompress => self.decoder = Some(Decoder::new()),
        }
        Ok(())
    }

    fn teardown(&mut self, phase: Phase) -> Result<()> {
        match phase {
            Phase::Compress => self.encoder = None,
            Phase::Decompress => self.decoder = None,
        }
        Ok(())
    }
}
