/// Magic marker closing every container.
/// - Stored as `[u8; 4]` so the type itself enforces "exactly 4 bytes" and matches the trailer field.
pub const MAGIC_DVPL: [u8; 4] = *b"DVPL";

/// Fixed trailer size in bytes (four u32 fields + marker).
pub const TRAILER_LEN: usize = 20;

/// File extension carried by packed files.
pub const FILE_EXTENSION: &str = "dvpl";

/// Maximum-effort level of the LZ4 high compression encoder.
pub const LZ4_HC_MAX_LEVEL: i32 = 12;

/// Upper bound of bytes an LZ4 block can expand to per compressed byte.
/// A single match length byte of 0xFF adds 255 output bytes.
pub const LZ4_MAX_EXPANSION: u64 = 255;
