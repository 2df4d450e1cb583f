//! Error types for the packed AST reader.
//!
//! The writer has no recoverable failure modes: invalid tags, out-of-range
//! skip slots and 16-bit skip overflow are all programming-contract
//! violations and panic (see module docs on [`crate::ast`]). Only the
//! reader, which may be pointed at a corrupt buffer, returns [`AstError`].

use thiserror::Error;

/// A single `format-corrupt` error category reported by defensive reader operations.
#[derive(Debug, Error)]
pub enum AstError {
    #[error("cursor {at} is past the end of the buffer (len {len})")]
    UnexpectedEof { at: u32, len: u32 },

    #[error("tag byte {0} has no catalog entry")]
    UnknownTag(u8),

    #[error("skip slot {which} out of range for tag {tag:?} (num_skips = {num_skips})")]
    SkipOutOfRange {
        tag: crate::catalog::Tag,
        which: u8,
        num_skips: u8,
    },

    #[error("varint at offset {0} has no terminating byte within the buffer")]
    TruncatedVarint(u32),

    #[error("inline string at offset {0} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        at: u32,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("numeric literal at offset {at} ({text:?}) could not be parsed as a number")]
    InvalidNumber { at: u32, text: String },

    #[error("trailing bytes after the root subtree: cursor stopped at {at}, buffer length is {len}")]
    TrailingBytes { at: u32, len: u32 },
}

/// Convenience alias for fallible reader operations.
pub type AstResult<T> = Result<T, AstError>;
