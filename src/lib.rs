// Fulgur library entry point

pub mod codec;
pub mod internal;

pub use codec::decode::{parse_all, parse_nested, parse_one};
pub use codec::encode::{build_container, encode_all, encode_one};
pub use codec::types::TlvNode;
pub use codec::{Decode, Encode};
pub use internal::error::{Error, Result};
