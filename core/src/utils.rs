use std::fmt;
use num_enum::TryFromPrimitive;

/// CRC-32/ISO-HDLC (reflected 0xEDB88320, init all-ones, final complement).
/// Computed over the compressed payload only, never over the trailer.
#[inline]
pub fn compute_checksum(data: &[u8]) -> u32 {
    use crc32fast::Hasher;
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_check_value() {
        assert_eq!(compute_checksum(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn crc32_of_empty_is_zero() {
        assert_eq!(compute_checksum(&[]), 0);
    }

    #[test]
    fn fmt_bytes_prefers_text() {
        assert_eq!(fmt_bytes(b"DVPL"), "b\"DVPL\"");
        assert_eq!(fmt_bytes(&[0, 1, 0xff, 2]), "0x0001ff02");
    }
}
