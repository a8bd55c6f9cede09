//! container/pack.rs
//! Encode direction of the container transform.

use tracing::debug;

use crate::compression::{create_compressor, Method};
use crate::constants::TRAILER_LEN;
use crate::container::timed;
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};
use crate::trailer::{write_trailer, Trailer};
use crate::types::{DvplError, Result};
use crate::utils::compute_checksum;

/// Upper bound of the container produced by `pack(input, method)` for `input_len` bytes.
/// Callers use it to size a destination before packing.
pub fn max_packed_size(input_len: usize, method: Method) -> Result<usize> {
    let compressor = create_compressor(method)?;
    Ok(compressor.max_output_size(input_len).saturating_add(TRAILER_LEN))
}

/// Pack `input` into a container using `method`.
///
/// # Errors
/// - `UnsupportedMethod` for methods without an encoder (deflate).
/// - `SizeMismatch` when the input or payload does not fit a 32-bit trailer field.
pub fn pack(input: &[u8], method: Method) -> Result<Vec<u8>> {
    pack_inner(input, method, None)
}

/// Same as [`pack`], additionally recording stage times and byte counters.
pub fn pack_with_telemetry(
    input: &[u8],
    method: Method,
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
) -> Result<Vec<u8>> {
    let out = pack_inner(input, method, Some(timer))?;
    counters.add_pack(input.len(), out.len() - TRAILER_LEN, TRAILER_LEN);
    Ok(out)
}

fn pack_inner(input: &[u8], method: Method, mut timer: Option<&mut TelemetryTimer>) -> Result<Vec<u8>> {
    let compressor = create_compressor(method)?;
    let original_len = fit_u32(input.len())?;

    // Allocate the worst case once, compress in place, then shrink.
    let bound = compressor.max_output_size(input.len());
    let mut out = vec![0u8; bound.saturating_add(TRAILER_LEN)];

    let packed = timed(&mut timer, Stage::Compress, || {
        compressor.compress_into(input, &mut out[..bound])
    })?;
    let packed_len = fit_u32(packed)?;

    let checksum = timed(&mut timer, Stage::Checksum, || compute_checksum(&out[..packed]));
    let trailer = Trailer::new(original_len, packed_len, checksum, method.id());

    out.truncate(packed);
    write_trailer(&trailer, &mut out);
    out.shrink_to_fit();

    debug!(
        method = compressor.name(),
        original_len,
        packed_len,
        checksum,
        "packed container"
    );
    Ok(out)
}

fn fit_u32(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| DvplError::size_mismatch(u32::MAX as usize, len))
}
