pub const CONTINUATION_BIT: u8 = 0x80;
pub const PAYLOAD_MASK: u8 = 0x7f;
pub const PAYLOAD_BITS: u32 = 7;

/// A zigzag-encoded i64 never needs more than 10 varint bytes.
pub const MAX_LONG_BYTES: u32 = 10;

pub const BOOL_FALSE: u8 = 0x00;
pub const BOOL_TRUE: u8 = 0x01;
