//! trailer/decode.rs
//!
//! Trailer decoding and validation.
//!
//! Design notes:
//! - The trailer is the last 20 bytes of the buffer; everything before it is payload.
//! - Checks run in a fixed order (size, marker, length, checksum) so a given
//!   buffer always fails with the same error.
//! - Lengths are only trusted after all checks pass.

use byteorder::{ByteOrder, LittleEndian};
use tracing::trace;

use crate::constants::MAGIC_DVPL;
use crate::trailer::types::Trailer;
use crate::types::{DvplError, Result};
use crate::utils::compute_checksum;

/// Read the trailer at the end of `buf`, checking only size and marker.
#[inline]
pub fn parse_trailer(buf: &[u8]) -> Result<Trailer> {
    if buf.len() < Trailer::LEN {
        return Err(DvplError::TooSmall { have: buf.len(), need: Trailer::LEN });
    }
    let raw = &buf[buf.len() - Trailer::LEN..];

    let mut marker = [0u8; 4];
    marker.copy_from_slice(&raw[16..20]);
    if marker != MAGIC_DVPL {
        return Err(DvplError::BadMarker { found: marker });
    }

    Ok(Trailer {
        original_len: LittleEndian::read_u32(&raw[0..4]),
        packed_len:   LittleEndian::read_u32(&raw[4..8]),
        checksum:     LittleEndian::read_u32(&raw[8..12]),
        method:       LittleEndian::read_u32(&raw[12..16]),
        marker,
    })
}

/// Decode and validate the trailer of a full container buffer.
///
/// # Returns
/// - `Ok(Trailer)` once marker, payload length and checksum all agree with `buf`.
/// - `Err(DvplError)` with the first failing check otherwise.
///
/// The method tag is not classified here; see `Trailer::method_kind`.
pub fn decode_trailer(buf: &[u8]) -> Result<Trailer> {
    let t = parse_trailer(buf)?;

    let payload_len = buf.len() - Trailer::LEN;
    if t.packed_len as usize != payload_len {
        return Err(DvplError::size_mismatch(t.packed_len as usize, payload_len));
    }

    let computed = compute_checksum(&buf[..payload_len]);
    if computed != t.checksum {
        return Err(DvplError::ChecksumMismatch { stored: t.checksum, computed });
    }

    trace!(
        original_len = t.original_len,
        packed_len = t.packed_len,
        checksum = t.checksum,
        method = t.method,
        "trailer validated"
    );
    Ok(t)
}

/// Split a validated container into payload and trailer.
pub fn split_container(buf: &[u8]) -> Result<(&[u8], Trailer)> {
    let t = decode_trailer(buf)?;
    Ok((&buf[..t.packed_len as usize], t))
}
