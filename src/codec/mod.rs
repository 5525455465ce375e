// Codec module for the Fulgur compact TLV wire format
//
// Wire layout, bit-exact:
//
//   TLV    ::= Tag Length Value
//   Tag    ::= byte (high bit 0)                   -- 0..=127
//            | byte1 (high bit 1) byte2            -- (byte1 & 0x7F) << 8 | byte2
//   Length ::= byte (high bit 0)                   -- 0..=127
//            | byte1 (high bit 1) byte2            -- byte2, 0..=255
//   Value  ::= exactly Length raw bytes
//
// A value may itself hold a nested TLV sibling stream; which tags do is
// protocol convention, decided by the caller and never by this codec.

pub mod decode;
pub mod encode;
pub mod length;
pub mod tag;
pub mod types;

use bytes::{Bytes, BytesMut};

use crate::internal::error::Result;

/// Types that decode from the front of a shared byte buffer.
pub trait Decode: Sized {
    /// Decodes one value, returning it and the number of bytes consumed.
    fn decode(data: &Bytes) -> Result<(Self, usize)>;
}

/// Types that encode onto the end of a byte buffer.
pub trait Encode {
    fn encode(&self, buf: &mut BytesMut) -> Result<()>;
}
