//! trailer/types.rs
//! Trailer record and its typed views.

use crate::compression::Method;
use crate::constants::{MAGIC_DVPL, TRAILER_LEN};
use crate::types::Result;

/// Trailer closing every container.
///
/// Layout (little-endian):
/// `original_len:u32 | packed_len:u32 | checksum:u32 | method:u32 | marker:[u8;4]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailer {
    pub original_len: u32,     // size of the decompressed payload
    pub packed_len: u32,       // size of the payload preceding the trailer
    pub checksum: u32,         // CRC-32 of the payload bytes
    pub method: u32,           // raw method tag (see compression::method_ids)
    pub marker: [u8; 4],       // "DVPL"
}

impl Trailer {
    pub const LEN: usize = 4  // original_len
        + 4                   // packed_len
        + 4                   // checksum
        + 4                   // method
        + 4;                  // marker

    pub fn new(original_len: u32, packed_len: u32, checksum: u32, method: u32) -> Self {
        Self { original_len, packed_len, checksum, method, marker: MAGIC_DVPL }
    }

    /// Classify the method tag.
    pub fn method_kind(&self) -> Result<Method> {
        Method::from_raw(self.method)
    }

    /// Total container length this trailer describes.
    pub fn container_len(&self) -> usize {
        self.packed_len as usize + Self::LEN
    }

    pub fn has_valid_marker(&self) -> bool {
        self.marker == MAGIC_DVPL
    }
}

const _: () = assert!(Trailer::LEN == TRAILER_LEN);
