//! trailer/encode.rs
//!
//! Serializes a `Trailer` into its fixed 20-byte wire form.
//! Field order must match `decode.rs` exactly.

use byteorder::{ByteOrder, LittleEndian};

use crate::trailer::types::Trailer;

/// Serialize a `Trailer` into 20 little-endian bytes. Pure and infallible.
#[inline]
pub fn encode_trailer(t: &Trailer) -> [u8; Trailer::LEN] {
    let mut out = [0u8; Trailer::LEN];

    LittleEndian::write_u32(&mut out[0..4], t.original_len);  // 0..4   original length
    LittleEndian::write_u32(&mut out[4..8], t.packed_len);    // 4..8   payload length
    LittleEndian::write_u32(&mut out[8..12], t.checksum);     // 8..12  CRC-32 of payload
    LittleEndian::write_u32(&mut out[12..16], t.method);      // 12..16 method tag
    out[16..20].copy_from_slice(&t.marker);                   // 16..20 marker

    out
}

/// Append the encoded trailer to a payload buffer.
#[inline]
pub fn write_trailer(t: &Trailer, out: &mut Vec<u8>) {
    out.extend_from_slice(&encode_trailer(t));
}
