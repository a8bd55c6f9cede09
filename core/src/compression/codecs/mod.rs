//! compression/codecs/mod.rs
//! Concrete codecs behind the registry.
//!
//! - `stored`: verbatim copy, bounded by the destination.
//! - `lz4`: block encoders (default and high compression) and the one shared block decoder.

pub mod lz4;
pub mod stored;

pub use lz4::*;
pub use stored::*;
