use byteorder::ReadBytesExt;

use crate::internal::error::{Error, Result};

/// Highest length that fits the single-byte short form.
pub const MAX_SHORT_LENGTH: usize = 0x7F;
/// Highest length the scheme can represent at all.
pub const MAX_LENGTH: usize = 0xFF;
/// Canonical first byte of the two-byte long form.
pub const LONG_LENGTH_PREFIX: u8 = 0x80;

/// Decodes a length field from the front of `data`.
///
/// A first byte with the high bit clear is the length. With the high bit
/// set, the *next* byte is the length (0..=255) and the remaining bits of
/// the first byte carry no information. This is deliberately not BER: the
/// high-bit byte never encodes a count of subsequent length bytes.
/// Returns the length and the number of bytes consumed.
pub fn decode_length(data: &[u8]) -> Result<(usize, usize)> {
    let mut reader = data;
    if reader.is_empty() {
        return Err(Error::truncated("length", 1, 0));
    }
    let first = reader.read_u8()?;
    if first & LONG_LENGTH_PREFIX == 0 {
        return Ok((usize::from(first), 1));
    }
    if reader.is_empty() {
        return Err(Error::truncated("length continuation byte", 1, 0));
    }
    let second = reader.read_u8()?;
    Ok((usize::from(second), 2))
}

/// Encodes a length in its canonical form. Lengths above [`MAX_LENGTH`]
/// cannot be represented by the single-extra-byte long form and are
/// rejected.
pub fn encode_length(len: usize) -> Result<Vec<u8>> {
    if len > MAX_LENGTH {
        return Err(Error::out_of_range("length", len as u64, MAX_LENGTH as u64));
    }
    if len <= MAX_SHORT_LENGTH {
        Ok(vec![len as u8])
    } else {
        Ok(vec![LONG_LENGTH_PREFIX, len as u8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_length() {
        assert_eq!(encode_length(0).unwrap(), vec![0x00]);
        assert_eq!(encode_length(5).unwrap(), vec![0x05]);
        assert_eq!(encode_length(0x7F).unwrap(), vec![0x7F]);
        assert_eq!(encode_length(0x80).unwrap(), vec![0x80, 0x80]);
        assert_eq!(encode_length(200).unwrap(), vec![0x80, 0xC8]);
        assert_eq!(encode_length(0xFF).unwrap(), vec![0x80, 0xFF]);
    }

    #[test]
    fn test_encode_length_out_of_range() {
        let err = encode_length(0x100).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                field: "length",
                value: 0x100,
                max: 0xFF,
            }
        );
        assert!(encode_length(usize::MAX).is_err());
    }

    #[test]
    fn test_decode_length() {
        assert_eq!(decode_length(&[0x00]).unwrap(), (0, 1));
        assert_eq!(decode_length(&[0x05]).unwrap(), (5, 1));
        assert_eq!(decode_length(&[0x7F]).unwrap(), (0x7F, 1));
        assert_eq!(decode_length(&[0x80, 0xC8]).unwrap(), (200, 2));
        assert_eq!(decode_length(&[0x80, 0xFF]).unwrap(), (0xFF, 2));
        // The low bits of a high-bit first byte are ignored on decode.
        assert_eq!(decode_length(&[0x81, 0x05]).unwrap(), (5, 2));
    }

    #[test]
    fn test_decode_length_truncated() {
        assert_eq!(
            decode_length(&[]).unwrap_err(),
            Error::TruncatedInput {
                need: 1,
                got: 0,
                context: "length",
            }
        );
        assert!(decode_length(&[0x80]).is_err());
    }
}
