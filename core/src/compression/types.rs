//! compression/types.rs
//! Method enum, codec family split, and the codec traits.
use std::fmt;
use std::str::FromStr;
use num_enum::TryFromPrimitive;

use crate::compression::constants::method_ids;
use crate::types::{DvplError, Result};

/// Compression method as recorded in the trailer.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Method {
    Raw     = method_ids::RAW,
    Lz4     = method_ids::LZ4,
    Lz4Hc   = method_ids::LZ4_HC,
    Deflate = method_ids::DEFLATE,
}

/// Decode algorithm family. The decoder switch never grows with new encoder presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodecFamily {
    Stored,
    Lz4,
    Unsupported,
}

/// Encoder effort preset inside a family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effort {
    Default,
    Max,
}

impl Method {
    /// Classify a raw trailer tag.
    pub fn from_raw(raw: u32) -> Result<Self> {
        Method::try_from_primitive(raw).map_err(|_| DvplError::UnsupportedMethod { raw })
    }

    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    pub const fn family(self) -> CodecFamily {
        match self {
            Method::Raw              => CodecFamily::Stored,
            Method::Lz4 | Method::Lz4Hc => CodecFamily::Lz4,
            Method::Deflate          => CodecFamily::Unsupported,
        }
    }

    pub const fn effort(self) -> Effort {
        match self {
            Method::Lz4Hc => Effort::Max,
            _             => Effort::Default,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Method::Raw     => "raw",
            Method::Lz4     => "lz4",
            Method::Lz4Hc   => "lz4hc",
            Method::Deflate => "deflate",
        }
    }

    pub const fn is_supported(self) -> bool {
        !matches!(self.family(), CodecFamily::Unsupported)
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Lz4Hc
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for method names that are neither a known alias nor a digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError(pub String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown method '{}' (expected raw, fast, high, deflate or a tag number)", self.0)
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "store" | "stored" | "none" => Ok(Method::Raw),
            "fast" | "lz4"                      => Ok(Method::Lz4),
            "high" | "hc" | "lz4hc" | "max"     => Ok(Method::Lz4Hc),
            "deflate" | "zlib"                  => Ok(Method::Deflate),
            other => other
                .parse::<u32>()
                .ok()
                .and_then(|raw| Method::try_from_primitive(raw).ok())
                .ok_or_else(|| ParseMethodError(s.to_string())),
        }
    }
}

// Require Send + Sync so codecs can be shared across threads packing disjoint buffers.
pub trait Compressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Worst-case payload size for `input_len` bytes of input.
    fn max_output_size(&self, input_len: usize) -> usize;

    /// Compress `input` into `out`, returning bytes written.
    /// `out` must hold at least `max_output_size(input.len())` bytes.
    fn compress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize>;
}

pub trait Decompressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Decompress `input` into `out`, never writing past `out.len()`.
    /// Returns bytes written.
    fn decompress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize>;
}
