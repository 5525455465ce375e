use bytes::Bytes;
use tracing::trace;

use crate::codec::length::decode_length;
use crate::codec::tag::decode_tag;
use crate::codec::types::TlvNode;
use crate::codec::Decode;
use crate::internal::error::{Error, Result};

/// Decodes the single TLV element starting at `offset`.
///
/// The returned node's value is a shared slice of `data`; no value bytes
/// are copied. Returns the node and the total number of bytes consumed
/// (tag, length field and value together), so callers can step to the next
/// sibling.
pub fn parse_one(data: &Bytes, offset: usize) -> Result<(TlvNode, usize)> {
    let remaining = data.get(offset..).unwrap_or_default();
    let (tag, tag_len) = decode_tag(remaining)?;
    let (length, length_len) = decode_length(&remaining[tag_len..])?;

    let header_len = tag_len + length_len;
    let available = remaining.len() - header_len;
    if available < length {
        return Err(Error::truncated("value", length, available));
    }

    let value_start = offset + header_len;
    let value = data.slice(value_start..value_start + length);
    Ok((TlvNode::new(tag, value), header_len + length))
}

/// Parses every sibling element in `data`, in order.
///
/// An empty buffer yields an empty vector. Trailing bytes that do not form
/// a complete element surface as [`Error::TruncatedInput`], never as a
/// silently shortened result. The input is not mutated; parsing the same
/// buffer again yields the same sequence.
pub fn parse_all(data: &Bytes) -> Result<Vec<TlvNode>> {
    let mut nodes = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let (node, consumed) = parse_one(data, offset)?;
        offset += consumed;
        nodes.push(node);
    }
    trace!(count = nodes.len(), bytes = data.len(), "parsed sibling stream");
    Ok(nodes)
}

/// Parses `node`'s value as a nested sibling stream.
///
/// Which tags hold nested streams is protocol convention known to the
/// caller; the codec never decides that itself.
pub fn parse_nested(node: &TlvNode) -> Result<Vec<TlvNode>> {
    parse_all(node.value())
}

impl Decode for TlvNode {
    fn decode(data: &Bytes) -> Result<(Self, usize)> {
        parse_one(data, 0)
    }
}
