//! dvpl-core
//!
//! Pure Rust codec for the DVPL container format.
//! No file I/O, no global state: every call takes a buffer and returns a buffer.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Format layers
pub mod trailer;
pub mod compression;
pub mod container;
pub mod telemetry;

pub use types::{DvplError, ErrorKind, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{CodecFamily, Effort, Method};
    pub use crate::container::{inspect, max_packed_size, pack, unpack, DvplConfig, Operation};
    pub use crate::trailer::Trailer;
    pub use crate::types::{DvplError, ErrorKind, Result};
}
