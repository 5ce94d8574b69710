//! Lossless codecs for game asset payloads.
//!
//! Both codecs share the same shape (control byte + eight literal/reference
//! flags) and the same encoder core in [`lz`]; they differ in token packing,
//! flag polarity and whether the stream carries its own size.  Neither depends
//! on the [`stream`](crate::stream) module.

pub mod lz;
pub mod lz77;
pub mod yaz0;

pub use lz::{Match, Token, Window};

use crate::error::Result;

/// Decompress a raw Yaz0 stream into `dst`; see [`yaz0::decode`].
pub fn yaz0_decode(src: &[u8], dst: &mut [u8], uncompressed_size: usize) -> Result<usize> {
    yaz0::decode(src, dst, uncompressed_size)
}

/// Compress into a raw Yaz0 stream; see [`yaz0::encode`].
pub fn yaz0_encode(src: &[u8]) -> Vec<u8> {
    yaz0::encode(src)
}

/// Decompress a self-sized LZ77 stream; see [`lz77::decode`].
pub fn lz77_decode(src: &[u8]) -> Result<Vec<u8>> {
    lz77::decode(src)
}

/// Compress into an LZ77 stream; see [`lz77::encode`].
pub fn lz77_encode(src: &[u8], extended: bool) -> Result<Vec<u8>> {
    lz77::encode(src, extended)
}
