//! codecs/stored.rs
//! Pass-through codec for the `raw` method.

use crate::compression::types::{Compressor, Decompressor};
use crate::types::{DvplError, Result};

pub struct StoredCodec;

impl StoredCodec {
    pub fn new() -> Self { Self }
}

impl Default for StoredCodec {
    fn default() -> Self { Self::new() }
}

impl Compressor for StoredCodec {
    fn name(&self) -> &'static str { "raw" }

    fn max_output_size(&self, input_len: usize) -> usize {
        input_len
    }

    fn compress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize> {
        copy_bounded(input, out)
    }
}

impl Decompressor for StoredCodec {
    fn name(&self) -> &'static str { "raw" }

    /// Stored payloads must fill the destination exactly.
    fn decompress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize> {
        if input.len() != out.len() {
            return Err(DvplError::size_mismatch(out.len(), input.len()));
        }
        copy_bounded(input, out)
    }
}

fn copy_bounded(input: &[u8], out: &mut [u8]) -> Result<usize> {
    let capacity = out.len();
    let dst = out
        .get_mut(..input.len())
        .ok_or_else(|| DvplError::size_mismatch(capacity, input.len()))?;
    dst.copy_from_slice(input);
    Ok(input.len())
}
