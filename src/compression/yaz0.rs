//! Yaz0 raw stream codec.
//!
//! Wire format (after any container header):
//!
//! ```text
//! group   := control unit{1..8}
//! control := 8 flags, bit 7 first; 1 = literal, 0 = back-reference
//! literal := 1 byte
//! ref     := NR RR          N != 0: length = N + 2          (3..=17)
//!          | 0R RR LL       N == 0: length = LL + 0x12      (18..=273)
//!            distance - 1 = RRR (12 bits, big-endian)        (1..=4096)
//! ```
//!
//! The stream is not self-describing: the caller must persist the
//! uncompressed size and pass it back to [`decode`].  Decoding stops exactly
//! at that size, so the unused low flags of the last control byte are
//! ignored.

use tracing::debug;

use super::lz::{copy_back_reference, GroupWriter, Input, Parser, Token, Window};
use crate::error::{Error, Result};

/// Largest back-reference distance.
pub const MAX_DISTANCE: usize = 0x1000;
/// Shortest match emitted as a reference.
pub const MIN_MATCH: usize = 3;
/// Longest match: one-byte escape plus 0x12.
pub const MAX_MATCH: usize = 0xFF + 0x12;

/// Length threshold at which the third (escape) byte is used.
const ESCAPE_LENGTH: usize = 0x12;

// Most output bytes one input byte can account for (a maximal 3-byte
// reference plus its share of a control byte).
const MAX_EXPANSION: usize = 91;

pub(crate) const WINDOW: Window = Window {
    max_distance: MAX_DISTANCE,
    min_match: MIN_MATCH,
    max_match: MAX_MATCH,
};

// ─────────────────────────────────────────────────────────────────────────────
// Decode
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress `src` into the first `uncompressed_size` bytes of `dst`.
///
/// Returns the number of bytes written, which always equals
/// `uncompressed_size` on success.  Fails with [`Error::Bounds`] when `dst`
/// is too small, the input ends early, or a back-reference points outside the
/// output produced so far.
pub fn decode(src: &[u8], dst: &mut [u8], uncompressed_size: usize) -> Result<usize> {
    if uncompressed_size > dst.len() {
        return Err(Error::bounds(
            "destination smaller than uncompressed size",
            dst.len(),
        ));
    }
    let dst = &mut dst[..uncompressed_size];
    let mut input = Input::new(src);
    let mut out = 0usize;

    while out < uncompressed_size {
        let control = input.byte()?;
        for bit in (0..8).rev() {
            if out >= uncompressed_size {
                break;
            }
            if control & (1 << bit) != 0 {
                dst[out] = input.byte()?;
                out += 1;
                continue;
            }
            let b1 = input.byte()?;
            let b2 = input.byte()?;
            let distance = (usize::from(b1 & 0x0F) << 8 | usize::from(b2)) + 1;
            let length = match b1 >> 4 {
                0 => usize::from(input.byte()?) + ESCAPE_LENGTH,
                n => usize::from(n) + 2,
            };
            out = copy_back_reference(dst, out, distance, length)?;
        }
    }

    debug!(
        compressed = input.position(),
        decompressed = out,
        "yaz0 decode"
    );
    Ok(out)
}

/// Decompress into a freshly allocated buffer of `uncompressed_size` bytes.
///
/// Sizes no input of `src.len()` bytes could produce are rejected before
/// allocating.
pub fn decode_to_vec(src: &[u8], uncompressed_size: usize) -> Result<Vec<u8>> {
    if uncompressed_size > src.len().saturating_mul(MAX_EXPANSION) {
        return Err(Error::bounds(
            "declared size exceeds what the input can produce",
            0,
        ));
    }
    let mut dst = Vec::new();
    dst.try_reserve_exact(uncompressed_size)
        .map_err(|_| Error::Allocation {
            requested: uncompressed_size,
        })?;
    dst.resize(uncompressed_size, 0);
    decode(src, &mut dst, uncompressed_size)?;
    Ok(dst)
}

// ─────────────────────────────────────────────────────────────────────────────
// Encode
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into a raw Yaz0 stream.
///
/// The result's length is the compressed size; `src.len()` must be stored
/// separately by the caller.
pub fn encode(src: &[u8]) -> Vec<u8> {
    let mut groups = GroupWriter::with_capacity(src.len() + src.len() / 8 + 1);

    for token in Parser::new(src, WINDOW) {
        match token {
            Token::Literal(byte) => {
                groups.flag(true);
                groups.push(byte);
            }
            Token::Reference(m) => {
                groups.flag(false);
                let dist = m.distance - 1;
                if m.length >= ESCAPE_LENGTH {
                    groups.extend(&[
                        (dist >> 8) as u8,
                        dist as u8,
                        (m.length - ESCAPE_LENGTH) as u8,
                    ]);
                } else {
                    groups.extend(&[((m.length - 2) << 4 | dist >> 8) as u8, dist as u8]);
                }
            }
        }
    }

    let out = groups.finish();
    debug!(
        decompressed = src.len(),
        compressed = out.len(),
        "yaz0 encode"
    );
    out
}
