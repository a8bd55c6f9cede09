//! codecs/lz4.rs
//! LZ4 block codecs (no frame, no size prefix).
//!
//! - `Lz4Compressor`: pure Rust `lz4_flex` encoder, default effort.
//! - `Lz4HcCompressor`: liblz4 high compression encoder at its maximum level.
//! - `Lz4Decompressor`: `lz4_flex` safe decoder, bounded by the destination slice.
//!
//! Both encoders emit the same block format, so one decoder serves both method tags.
use lz4::block::{compress_to_buffer, CompressionMode};
use lz4_flex::block::{
    compress_into as flex_compress_into, decompress_into as flex_decompress_into, get_maximum_output_size,
};

use crate::compression::types::{Compressor, Decompressor};
use crate::constants::LZ4_HC_MAX_LEVEL;
use crate::types::{DvplError, Result};

/// Block holding zero literals and no match: a single empty token.
const EMPTY_BLOCK: [u8; 1] = [0x00];

/// Largest input liblz4 accepts in one block call.
pub const LZ4_HC_MAX_INPUT: usize = i32::MAX as usize;

pub struct Lz4Compressor;

impl Lz4Compressor {
    pub fn new() -> Self { Self }
}

impl Default for Lz4Compressor {
    fn default() -> Self { Self::new() }
}

impl Compressor for Lz4Compressor {
    fn name(&self) -> &'static str { "lz4" }

    fn max_output_size(&self, input_len: usize) -> usize {
        get_maximum_output_size(input_len)
    }

    fn compress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize> {
        let capacity = out.len();
        flex_compress_into(input, out).map_err(|e| {
            tracing::debug!(codec = "lz4", err = %e, "block compression failed");
            DvplError::size_mismatch(capacity, self.max_output_size(input.len()))
        })
    }
}

pub struct Lz4HcCompressor {
    level: i32,
}

impl Lz4HcCompressor {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Default for Lz4HcCompressor {
    fn default() -> Self { Self::new(LZ4_HC_MAX_LEVEL) }
}

impl Compressor for Lz4HcCompressor {
    fn name(&self) -> &'static str { "lz4hc" }

    // lz4_flex's bound is never below LZ4_compressBound, so both encoders share it.
    fn max_output_size(&self, input_len: usize) -> usize {
        get_maximum_output_size(input_len)
    }

    fn compress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize> {
        let capacity = out.len();
        if input.is_empty() {
            let dst = out
                .get_mut(..EMPTY_BLOCK.len())
                .ok_or_else(|| DvplError::size_mismatch(capacity, EMPTY_BLOCK.len()))?;
            dst.copy_from_slice(&EMPTY_BLOCK);
            return Ok(EMPTY_BLOCK.len());
        }
        // liblz4 takes i32 lengths.
        if input.len() > LZ4_HC_MAX_INPUT {
            return Err(DvplError::size_mismatch(LZ4_HC_MAX_INPUT, input.len()));
        }
        compress_to_buffer(input, Some(CompressionMode::HIGHCOMPRESSION(self.level)), false, out)
            .map_err(|e| {
                tracing::debug!(codec = "lz4hc", err = %e, "block compression failed");
                DvplError::size_mismatch(capacity, self.max_output_size(input.len()))
            })
    }
}

pub struct Lz4Decompressor;

impl Lz4Decompressor {
    pub fn new() -> Self { Self }
}

impl Default for Lz4Decompressor {
    fn default() -> Self { Self::new() }
}

impl Decompressor for Lz4Decompressor {
    fn name(&self) -> &'static str { "lz4" }

    fn decompress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize> {
        flex_decompress_into(input, out).map_err(|e| DvplError::DecompressionFailed {
            method: "lz4",
            msg: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hc_empty_input_into_short_buffer_is_size_mismatch() {
        let mut out = [0u8; 0];
        let err = Lz4HcCompressor::default().compress_into(b"", &mut out).unwrap_err();
        assert_eq!(err, DvplError::SizeMismatch { declared: 0, actual: 1 });
    }

    #[test]
    fn hc_empty_input_is_single_token() {
        let mut out = [0xFFu8; 4];
        let n = Lz4HcCompressor::default().compress_into(b"", &mut out).unwrap();
        assert_eq!(&out[..n], &EMPTY_BLOCK);
    }

    #[test]
    fn hc_input_limit_matches_liblz4() {
        assert_eq!(LZ4_HC_MAX_INPUT as u64, i32::MAX as u64);
    }
}
