//! compression/registry.rs
//! Codec registry and factory functions.
//!
//! Encoders are picked per `Method` (family + effort); decoders per `CodecFamily` only.

use crate::compression::codecs::{Lz4Compressor, Lz4Decompressor, Lz4HcCompressor, StoredCodec};
use crate::compression::types::{CodecFamily, Compressor, Decompressor, Effort, Method};
use crate::constants::LZ4_HC_MAX_LEVEL;
use crate::types::{DvplError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub method: Method,
    pub family: CodecFamily,
    pub effort: Effort,
    pub supported: bool,
}

/// Describe a raw method tag. Deflate resolves (it is a known tag) but is marked unsupported.
pub fn resolve(raw: u32) -> Result<CodecInfo> {
    let method = Method::from_raw(raw)?;
    Ok(CodecInfo {
        name: method.name(),
        method,
        family: method.family(),
        effort: method.effort(),
        supported: method.is_supported(),
    })
}

pub fn create_compressor(method: Method) -> Result<Box<dyn Compressor>> {
    match (method.family(), method.effort()) {
        (CodecFamily::Stored, _)          => Ok(Box::new(StoredCodec::new())),
        (CodecFamily::Lz4, Effort::Default) => Ok(Box::new(Lz4Compressor::new())),
        (CodecFamily::Lz4, Effort::Max)   => Ok(Box::new(Lz4HcCompressor::new(LZ4_HC_MAX_LEVEL))),
        (CodecFamily::Unsupported, _)     => Err(DvplError::UnsupportedMethod { raw: method.id() }),
    }
}

/// `raw` is only used for the error when the family has no decoder.
pub fn create_decompressor(family: CodecFamily, raw: u32) -> Result<Box<dyn Decompressor>> {
    match family {
        CodecFamily::Stored      => Ok(Box::new(StoredCodec::new())),
        CodecFamily::Lz4         => Ok(Box::new(Lz4Decompressor::new())),
        CodecFamily::Unsupported => Err(DvplError::UnsupportedMethod { raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::constants::method_ids;

    #[test]
    fn resolve_known_tags() {
        let info = resolve(method_ids::LZ4_HC).unwrap();
        assert_eq!(info.family, CodecFamily::Lz4);
        assert_eq!(info.effort, Effort::Max);
        assert!(info.supported);

        let info = resolve(method_ids::DEFLATE).unwrap();
        assert_eq!(info.name, "deflate");
        assert!(!info.supported);
    }

    #[test]
    fn resolve_unknown_tag() {
        assert_eq!(resolve(9).unwrap_err(), DvplError::UnsupportedMethod { raw: 9 });
    }

    #[test]
    fn deflate_has_no_codecs() {
        assert!(matches!(
            create_compressor(Method::Deflate),
            Err(DvplError::UnsupportedMethod { raw: 4 })
        ));
        assert!(matches!(
            create_decompressor(Method::Deflate.family(), 4),
            Err(DvplError::UnsupportedMethod { raw: 4 })
        ));
    }

    #[test]
    fn both_lz4_tags_share_the_decoder() {
        let fast = create_decompressor(Method::Lz4.family(), method_ids::LZ4).unwrap();
        let high = create_decompressor(Method::Lz4Hc.family(), method_ids::LZ4_HC).unwrap();
        assert_eq!(fast.name(), high.name());
        assert_ne!(
            create_compressor(Method::Lz4).unwrap().name(),
            create_compressor(Method::Lz4Hc).unwrap().name()
        );
    }
}
