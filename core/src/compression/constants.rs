/// Stable method tags (u32) for the trailer and wire format.
pub mod method_ids {
    pub const RAW: u32     = 0;
    pub const LZ4: u32     = 1;
    pub const LZ4_HC: u32  = 2;
    /// Declared by the format, never implemented.
    pub const DEFLATE: u32 = 4;
}

/// Method used when the caller does not pick one (matches the original packer).
pub const DEFAULT_METHOD_ID: u32 = method_ids::LZ4_HC;
