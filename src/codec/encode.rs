use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::codec::length::{encode_length, MAX_LENGTH};
use crate::codec::tag::{encode_tag, MAX_TAG};
use crate::codec::types::TlvNode;
use crate::codec::Encode;
use crate::internal::error::{Error, Result};

impl Encode for TlvNode {
    /// Writes tag, length field and value. The length field is always
    /// recomputed from the actual value, so a hand-built node can never
    /// carry a stale length onto the wire.
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        buf.extend_from_slice(&encode_tag(self.tag())?);
        buf.extend_from_slice(&encode_length(self.len())?);
        buf.extend_from_slice(self.value());
        Ok(())
    }
}

/// Encodes a single element in canonical form.
pub fn encode_one(node: &TlvNode) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(4 + node.len());
    node.encode(&mut buf)?;
    Ok(buf.freeze())
}

/// Encodes an ordered sequence of sibling elements. Sibling order is
/// significant and is preserved byte-for-byte.
pub fn encode_all(nodes: &[TlvNode]) -> Result<Bytes> {
    let mut buf = BytesMut::new();
    for node in nodes {
        node.encode(&mut buf)?;
    }
    trace!(count = nodes.len(), bytes = buf.len(), "encoded sibling stream");
    Ok(buf.freeze())
}

/// Builds a container node whose value is the encoded `children` stream,
/// its length computed bottom-up from the encoded bytes.
///
/// Range checks run here rather than at the eventual encode, so an
/// over-full container is rejected while the caller still knows which
/// children went into it.
pub fn build_container(tag: u16, children: &[TlvNode]) -> Result<TlvNode> {
    if tag > MAX_TAG {
        return Err(Error::out_of_range("tag", u64::from(tag), u64::from(MAX_TAG)));
    }
    let value = encode_all(children)?;
    if value.len() > MAX_LENGTH {
        return Err(Error::out_of_range(
            "length",
            value.len() as u64,
            MAX_LENGTH as u64,
        ));
    }
    Ok(TlvNode::new(tag, value))
}
