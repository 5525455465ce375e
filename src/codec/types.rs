use bytes::Bytes;
use byteorder::{BigEndian, ReadBytesExt};

/// One TLV element: a tag and its value bytes.
///
/// Nodes are immutable once constructed. The length written on the wire is
/// always the value's actual byte length; no separately stored length
/// exists to drift out of sync with the value. The parser builds nodes
/// whose values are shared slices of the input buffer, so cloning a node
/// never copies value bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvNode {
    tag: u16,
    value: Bytes,
}

impl TlvNode {
    /// Creates a node from a tag and value bytes.
    pub fn new(tag: u16, value: impl Into<Bytes>) -> Self {
        TlvNode {
            tag,
            value: value.into(),
        }
    }

    pub fn tag(&self) -> u16 {
        self.tag
    }

    /// Byte length of the value, exactly what the length field encodes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Returns a new node with the same tag carrying `value`. The wire
    /// length follows the new value automatically.
    pub fn with_value(&self, value: impl Into<Bytes>) -> Self {
        TlvNode::new(self.tag, value)
    }

    /// The value as UTF-8 text, when it is valid UTF-8.
    pub fn value_utf8(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// The value as a big-endian unsigned integer of 1 to 8 bytes.
    pub fn value_uint(&self) -> Option<u64> {
        if self.value.is_empty() || self.value.len() > 8 {
            return None;
        }
        let mut reader = self.value.as_ref();
        reader.read_uint::<BigEndian>(self.value.len()).ok()
    }
}
