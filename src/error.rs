//! Crate-wide error type.
//!
//! Stream operations and both codecs report failures through [`Error`].  A
//! failed stream write may already have grown the buffer or moved the cursor;
//! callers should treat the buffer contents past the last successful write as
//! unspecified.  Codec failures never touch memory outside the slices the
//! caller handed in.

use std::io;

/// Errors returned by [`ByteBuffer`](crate::stream::ByteBuffer) operations,
/// the Yaz0 / LZ77 codecs and the container helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A seek or read computed a position outside the stream.
    #[error("position {position} is outside stream bounds (length {length})")]
    OutOfRange { position: i64, length: u64 },

    /// The operation is not legal in the current state (e.g. shrinking resize).
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// Compressed input is malformed: truncated, or a back-reference points
    /// before the start of the output or past its end.
    #[error("compressed data out of bounds at offset {offset}: {reason}")]
    Bounds { reason: &'static str, offset: usize },

    /// Growing a buffer could not obtain memory.
    #[error("could not allocate {requested} bytes")]
    Allocation { requested: usize },

    /// No known container header at the start of the data.
    #[error("unrecognised container header")]
    UnknownContainer,

    /// File load/save failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

// ─────────────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────────────

impl Error {
    #[inline]
    pub(crate) fn bounds(reason: &'static str, offset: usize) -> Self {
        Error::Bounds { reason, offset }
    }

    #[inline]
    pub(crate) fn out_of_range(position: i64, length: u64) -> Self {
        Error::OutOfRange { position, length }
    }

    /// Returns `true` for the malformed-compressed-data kind.
    pub fn is_bounds(&self) -> bool {
        matches!(self, Error::Bounds { .. })
    }
}
