//! types.rs
//! Unified, classified error for every codec operation.
//!
//! - Each variant maps to exactly one failure class; nothing is reported as a generic error.
//! - Messages aim to be stable and contextual for logs and CLI diagnostics.

use std::fmt;
use thiserror::Error;

use crate::compression::Method;
use crate::utils::{enum_name_or_hex, fmt_bytes};

pub type Result<T> = std::result::Result<T, DvplError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DvplError {
    /// Buffer shorter than one trailer.
    #[error("buffer too small for a DVPL trailer: {have} < {need}")]
    TooSmall { have: usize, need: usize },

    /// Trailer marker is not "DVPL".
    #[error("not a DVPL container: marker {}", fmt_bytes(.found))]
    BadMarker { found: [u8; 4] },

    /// Declared length disagrees with the actual one.
    #[error("size mismatch: declared {declared}, actual {actual}")]
    SizeMismatch { declared: u64, actual: u64 },

    /// Payload bytes do not hash to the stored checksum.
    #[error("checksum mismatch: stored 0x{stored:08x}, computed 0x{computed:08x}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    /// Method tag is unknown or not implemented.
    #[error("unsupported compression method: {}", method_name_or_hex(.raw))]
    UnsupportedMethod { raw: u32 },

    /// Compressed stream is structurally invalid for its method.
    #[error("{method} decompression failed: {msg}")]
    DecompressionFailed { method: &'static str, msg: String },
}

/// Field-less discriminant of [`DvplError`], for callers that only classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TooSmall,
    BadMarker,
    SizeMismatch,
    ChecksumMismatch,
    UnsupportedMethod,
    DecompressionFailed,
}

fn method_name_or_hex(raw: &u32) -> String {
    enum_name_or_hex::<Method>(*raw)
}

impl DvplError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DvplError::TooSmall { .. }            => ErrorKind::TooSmall,
            DvplError::BadMarker { .. }           => ErrorKind::BadMarker,
            DvplError::SizeMismatch { .. }        => ErrorKind::SizeMismatch,
            DvplError::ChecksumMismatch { .. }    => ErrorKind::ChecksumMismatch,
            DvplError::UnsupportedMethod { .. }   => ErrorKind::UnsupportedMethod,
            DvplError::DecompressionFailed { .. } => ErrorKind::DecompressionFailed,
        }
    }

    pub(crate) fn size_mismatch(declared: usize, actual: usize) -> Self {
        DvplError::SizeMismatch { declared: declared as u64, actual: actual as u64 }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TooSmall            => "too-small",
            ErrorKind::BadMarker           => "bad-marker",
            ErrorKind::SizeMismatch        => "size-mismatch",
            ErrorKind::ChecksumMismatch    => "checksum-mismatch",
            ErrorKind::UnsupportedMethod   => "unsupported-method",
            ErrorKind::DecompressionFailed => "decompression-failed",
        };
        f.write_str(name)
    }
}
