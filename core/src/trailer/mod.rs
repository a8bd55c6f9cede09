//! trailer/mod.rs
//! Public module export for the container trailer.
//!
//! Notes:
//! - Fixed-size trailer (20 bytes) at the very end of a container; no padding.
//! - Integers are little-endian on the wire (written explicitly, never via the host order).
//! - `parse_trailer` checks framing only; `decode_trailer` is the full validation gate.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
