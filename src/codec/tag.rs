use byteorder::ReadBytesExt;

use crate::internal::error::{Error, Result};

/// Highest tag value that fits the single-byte short form.
pub const MAX_SHORT_TAG: u16 = 0x7F;
/// Highest tag value the encoder will accept.
pub const MAX_TAG: u16 = 0x3FFF;
/// High-bit discriminator selecting the two-byte long form.
pub const LONG_FORM_BIT: u8 = 0x80;

/// Decodes a tag from the front of `data`.
///
/// A first byte with the high bit clear is the whole tag. With the high
/// bit set, the low 7 bits of the first byte form the high half and the
/// second byte the low half. Returns the tag and the number of bytes
/// consumed.
pub fn decode_tag(data: &[u8]) -> Result<(u16, usize)> {
    let mut reader = data;
    if reader.is_empty() {
        return Err(Error::truncated("tag", 1, 0));
    }
    let first = reader.read_u8()?;
    if first & LONG_FORM_BIT == 0 {
        return Ok((u16::from(first), 1));
    }
    if reader.is_empty() {
        return Err(Error::truncated("tag continuation byte", 1, 0));
    }
    let second = reader.read_u8()?;
    Ok((u16::from(first & !LONG_FORM_BIT) << 8 | u16::from(second), 2))
}

/// Encodes a tag in its canonical form: the shortest encoding that
/// represents the value. Tags above [`MAX_TAG`] do not fit the two-byte
/// scheme and are rejected.
pub fn encode_tag(tag: u16) -> Result<Vec<u8>> {
    if tag > MAX_TAG {
        return Err(Error::out_of_range("tag", u64::from(tag), u64::from(MAX_TAG)));
    }
    if tag <= MAX_SHORT_TAG {
        Ok(vec![tag as u8])
    } else {
        Ok(vec![(tag >> 8) as u8 | LONG_FORM_BIT, (tag & 0xFF) as u8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_tag() {
        assert_eq!(encode_tag(0x00).unwrap(), vec![0x00]);
        assert_eq!(encode_tag(0x01).unwrap(), vec![0x01]);
        assert_eq!(encode_tag(0x7F).unwrap(), vec![0x7F]);
        assert_eq!(encode_tag(0x80).unwrap(), vec![0x80, 0x80]);
        assert_eq!(encode_tag(0x0101).unwrap(), vec![0x81, 0x01]);
        assert_eq!(encode_tag(0x1C2D).unwrap(), vec![0x9C, 0x2D]);
        assert_eq!(encode_tag(MAX_TAG).unwrap(), vec![0xBF, 0xFF]);
    }

    #[test]
    fn test_encode_tag_out_of_range() {
        let err = encode_tag(MAX_TAG + 1).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                field: "tag",
                value: 0x4000,
                max: 0x3FFF,
            }
        );
        assert!(encode_tag(u16::MAX).is_err());
    }

    #[test]
    fn test_decode_tag() {
        assert_eq!(decode_tag(&[0x00]).unwrap(), (0x00, 1));
        assert_eq!(decode_tag(&[0x7F]).unwrap(), (0x7F, 1));
        assert_eq!(decode_tag(&[0x80, 0x80]).unwrap(), (0x80, 2));
        assert_eq!(decode_tag(&[0x81, 0x01]).unwrap(), (0x0101, 2));
        assert_eq!(decode_tag(&[0xBF, 0xFF]).unwrap(), (0x3FFF, 2));
        // Trailing bytes beyond the tag are left untouched.
        assert_eq!(decode_tag(&[0x05, 0xAA, 0xBB]).unwrap(), (0x05, 1));
    }

    #[test]
    fn test_decode_tag_accepts_non_canonical_long_form() {
        // A long-form encoding of a short-form value decodes fine; only the
        // encoder is held to canonical output.
        assert_eq!(decode_tag(&[0x80, 0x05]).unwrap(), (0x05, 2));
    }

    #[test]
    fn test_decode_tag_truncated() {
        assert_eq!(
            decode_tag(&[]).unwrap_err(),
            Error::TruncatedInput {
                need: 1,
                got: 0,
                context: "tag",
            }
        );
        assert!(decode_tag(&[0x81]).is_err());
    }
}
