use std::io;

use thiserror::Error;

/// Unified error type for the fulgur library.
///
/// Decode failures are always `TruncatedInput`; encode failures are always
/// `OutOfRange`. Both carry the numbers a caller needs to report the
/// failure without re-parsing the buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Decoding required more bytes than the buffer holds.
    #[error("truncated input: {context} needs {need} byte(s), {got} remain")]
    TruncatedInput {
        need: usize,
        got: usize,
        context: &'static str,
    },

    /// An encode input exceeds the representable range of its wire form.
    #[error("{field} {value} exceeds the encodable maximum {max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

impl Error {
    pub(crate) fn truncated(context: &'static str, need: usize, got: usize) -> Self {
        Error::TruncatedInput { need, got, context }
    }

    pub(crate) fn out_of_range(field: &'static str, value: u64, max: u64) -> Self {
        Error::OutOfRange { field, value, max }
    }
}

/// A specialized `Result` type for fulgur operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(_: io::Error) -> Self {
        // Reads only go through `byteorder` on in-memory slices, where the
        // sole failure mode is running off the end of the buffer. Every
        // call site checks the remaining length first, so this conversion
        // exists for the `?` operator rather than as a real path.
        Error::truncated("read", 1, 0)
    }
}
