//! container/unpack.rs
//! Decode direction of the container transform.

use tracing::debug;

use crate::compression::{create_decompressor, resolve, CodecFamily, CodecInfo};
use crate::constants::{LZ4_MAX_EXPANSION, TRAILER_LEN};
use crate::container::timed;
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};
use crate::trailer::{decode_trailer, split_container, Trailer};
use crate::types::{DvplError, Result};

/// Unpack a full container buffer back into the original bytes.
///
/// Validation runs first (marker, length, checksum); the method is dispatched only after,
/// so a corrupted container never reaches a decoder. The output is allocated from the
/// validated `original_len` and the decoder is bounded by it. Declared sizes the payload
/// cannot produce are rejected before allocating.
pub fn unpack(container: &[u8]) -> Result<Vec<u8>> {
    unpack_inner(container, None)
}

/// Same as [`unpack`], additionally recording stage times and byte counters.
pub fn unpack_with_telemetry(
    container: &[u8],
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
) -> Result<Vec<u8>> {
    let out = unpack_inner(container, Some(timer))?;
    counters.add_unpack(out.len(), container.len() - TRAILER_LEN, TRAILER_LEN);
    Ok(out)
}

fn unpack_inner(container: &[u8], mut timer: Option<&mut TelemetryTimer>) -> Result<Vec<u8>> {
    let (payload, trailer) = timed(&mut timer, Stage::Validate, || split_container(container))?;

    let method = trailer.method_kind()?;
    let family = method.family();
    let decompressor = create_decompressor(family, trailer.method)?;

    let original_len = trailer.original_len as usize;
    if family == CodecFamily::Stored && original_len != payload.len() {
        return Err(DvplError::size_mismatch(original_len, payload.len()));
    }
    if family == CodecFamily::Lz4 && !lz4_can_expand_to(payload.len(), original_len) {
        return Err(DvplError::DecompressionFailed {
            method: "lz4",
            msg: format!(
                "declared size {} exceeds what {} compressed bytes can encode",
                original_len,
                payload.len()
            ),
        });
    }

    let mut out = vec![0u8; original_len];
    let written = timed(&mut timer, Stage::Decompress, || {
        decompressor.decompress_into(payload, &mut out)
    })?;
    if written != original_len {
        return Err(DvplError::size_mismatch(original_len, written));
    }

    debug!(
        method = method.name(),
        original_len = trailer.original_len,
        packed_len = trailer.packed_len,
        "unpacked container"
    );
    Ok(out)
}

fn lz4_can_expand_to(packed_len: usize, original_len: usize) -> bool {
    let limit = (packed_len as u64)
        .saturating_mul(LZ4_MAX_EXPANSION)
        .saturating_add(LZ4_MAX_EXPANSION);
    original_len as u64 <= limit
}

/// Validated trailer view of a container, without decompressing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerInfo {
    pub trailer: Trailer,
    /// `None` when the method tag is not a known value.
    pub codec: Option<CodecInfo>,
}

impl ContainerInfo {
    pub fn method_name(&self) -> &'static str {
        self.codec.map(|c| c.name).unwrap_or("unknown")
    }

    pub fn is_supported(&self) -> bool {
        self.codec.map(|c| c.supported).unwrap_or(false)
    }

    /// Payload size over original size; 0 for empty originals.
    pub fn ratio(&self) -> f64 {
        if self.trailer.original_len == 0 {
            0.0
        } else {
            self.trailer.packed_len as f64 / self.trailer.original_len as f64
        }
    }
}

/// Validate a container and describe it.
/// Unknown method tags do not fail here; `unpack` reports them.
pub fn inspect(container: &[u8]) -> Result<ContainerInfo> {
    let trailer = decode_trailer(container)?;
    Ok(ContainerInfo { trailer, codec: resolve(trailer.method).ok() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lz4_expansion_limit() {
        assert!(lz4_can_expand_to(1, 0));
        assert!(lz4_can_expand_to(0, 255));
        assert!(lz4_can_expand_to(10, 2805));
        assert!(!lz4_can_expand_to(10, 2806));
        assert!(!lz4_can_expand_to(20, u32::MAX as usize));
    }
}
