//! compression/mod.rs
//! Method tags, codec families and the registry that maps one to the other.
//!
//! Notes:
//! - The wire tag folds two things together: the decode algorithm and the encoder effort.
//! - Decoding branches on `CodecFamily` only; encoder presets branch on `Effort`.
//! - Registry resolves method tags to implementations.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;
