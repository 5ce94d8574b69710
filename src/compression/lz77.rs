//! Nintendo-style LZ77 codec, basic (type `0x10`) and extended (type `0x11`).
//!
//! Layout:
//!
//! ```text
//! header  := u32 LE: type | size << 8
//!            (extended only) size bits == 0 → followed by u32 LE size
//! group   := control unit{1..8}
//! control := 8 flags, bit 7 first; 0 = literal, 1 = back-reference
//!
//! basic ref     := LR RR                 length = L + 3          (3..=18)
//! extended ref  := LR RR      (L >= 2)   length = L + 1          (3..=16)
//!                | 0L LR RR              length = LL + 0x11      (17..=272)
//!                | 1L LL LR RR           length = LLLL + 0x111   (273..=65808)
//! distance - 1 = RRR (12 bits)                                   (1..=4096)
//! ```
//!
//! Unlike Yaz0 the stream carries its own size, and the encoder grows its
//! own output buffer.

use tracing::debug;

use super::lz::{copy_back_reference, GroupWriter, Input, Parser, Token, Window};
use crate::error::{Error, Result};

/// Type byte of the basic format.
pub const TYPE_BASIC: u8 = 0x10;
/// Type byte of the extended format.
pub const TYPE_EXTENDED: u8 = 0x11;

/// Largest back-reference distance (both variants).
pub const MAX_DISTANCE: usize = 0x1000;
/// Shortest match emitted as a reference (both variants).
pub const MIN_MATCH: usize = 3;
/// Longest basic match.
pub const MAX_MATCH_BASIC: usize = 0xF + 3;
/// Longest extended match.
pub const MAX_MATCH_EXTENDED: usize = 0xFFFF + 0x111;

/// Largest size that fits the 24-bit header field.
const MAX_INLINE_SIZE: usize = 0xFF_FFFF;

// Most output bytes one input byte can account for: a maximal token plus its
// share of a control byte.  Declared sizes beyond this are rejected before
// allocating.
const MAX_EXPANSION_BASIC: usize = 9;
const MAX_EXPANSION_EXTENDED: usize = 16_000;

const WINDOW_BASIC: Window = Window {
    max_distance: MAX_DISTANCE,
    min_match: MIN_MATCH,
    max_match: MAX_MATCH_BASIC,
};

const WINDOW_EXTENDED: Window = Window {
    max_distance: MAX_DISTANCE,
    min_match: MIN_MATCH,
    max_match: MAX_MATCH_EXTENDED,
};

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

/// Parsed stream header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub extended: bool,
    pub decompressed_size: usize,
}

impl Header {
    /// Parse the header at the start of `src`, returning it and its length.
    pub fn parse(src: &[u8]) -> Result<(Header, usize)> {
        let mut input = Input::new(src);
        let header = Self::read(&mut input)?;
        Ok((header, input.position()))
    }

    fn read(input: &mut Input<'_>) -> Result<Header> {
        let word = u32::from_le_bytes(le4(input.take(4)?));
        let extended = match (word & 0xFF) as u8 {
            TYPE_BASIC => false,
            TYPE_EXTENDED => true,
            _ => return Err(Error::bounds("unknown LZ77 type byte", 0)),
        };
        let mut decompressed_size = (word >> 8) as usize;
        if decompressed_size == 0 && extended && input.remaining() >= 4 {
            decompressed_size = u32::from_le_bytes(le4(input.take(4)?)) as usize;
        }
        Ok(Header {
            extended,
            decompressed_size,
        })
    }

    fn write(&self) -> Vec<u8> {
        let ty = if self.extended { TYPE_EXTENDED } else { TYPE_BASIC };
        if self.decompressed_size <= MAX_INLINE_SIZE {
            let word = u32::from(ty) | (self.decompressed_size as u32) << 8;
            word.to_le_bytes().to_vec()
        } else {
            let mut out = u32::from(ty).to_le_bytes().to_vec();
            out.extend_from_slice(&(self.decompressed_size as u32).to_le_bytes());
            out
        }
    }
}

#[inline]
fn le4(bytes: &[u8]) -> [u8; 4] {
    [bytes[0], bytes[1], bytes[2], bytes[3]]
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress a complete LZ77 stream (header included).
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    let mut input = Input::new(src);
    let header = Header::read(&mut input)?;
    let size = header.decompressed_size;

    let expansion = if header.extended {
        MAX_EXPANSION_EXTENDED
    } else {
        MAX_EXPANSION_BASIC
    };
    if size > input.remaining().saturating_mul(expansion) {
        return Err(Error::bounds(
            "declared size exceeds what the input can produce",
            input.position(),
        ));
    }

    let mut dst = Vec::new();
    dst.try_reserve_exact(size)
        .map_err(|_| Error::Allocation { requested: size })?;
    dst.resize(size, 0);

    let mut out = 0usize;
    while out < size {
        let control = input.byte()?;
        for bit in (0..8).rev() {
            if out >= size {
                break;
            }
            if control & (1 << bit) == 0 {
                dst[out] = input.byte()?;
                out += 1;
                continue;
            }
            let (distance, length) = if header.extended {
                read_extended_reference(&mut input)?
            } else {
                read_basic_reference(&mut input)?
            };
            out = copy_back_reference(&mut dst, out, distance, length)?;
        }
    }

    debug!(
        extended = header.extended,
        compressed = input.position(),
        decompressed = out,
        "lz77 decode"
    );
    Ok(dst)
}

fn read_basic_reference(input: &mut Input<'_>) -> Result<(usize, usize)> {
    let b1 = input.byte()?;
    let b2 = input.byte()?;
    let length = usize::from(b1 >> 4) + 3;
    let distance = (usize::from(b1 & 0x0F) << 8 | usize::from(b2)) + 1;
    Ok((distance, length))
}

fn read_extended_reference(input: &mut Input<'_>) -> Result<(usize, usize)> {
    let b1 = input.byte()?;
    match b1 >> 4 {
        0 => {
            let b2 = input.byte()?;
            let b3 = input.byte()?;
            let length = (usize::from(b1 & 0x0F) << 4 | usize::from(b2 >> 4)) + 0x11;
            let distance = (usize::from(b2 & 0x0F) << 8 | usize::from(b3)) + 1;
            Ok((distance, length))
        }
        1 => {
            let b2 = input.byte()?;
            let b3 = input.byte()?;
            let b4 = input.byte()?;
            let length = (usize::from(b1 & 0x0F) << 12
                | usize::from(b2) << 4
                | usize::from(b3 >> 4))
                + 0x111;
            let distance = (usize::from(b3 & 0x0F) << 8 | usize::from(b4)) + 1;
            Ok((distance, length))
        }
        n => {
            let b2 = input.byte()?;
            let length = usize::from(n) + 1;
            let distance = (usize::from(b1 & 0x0F) << 8 | usize::from(b2)) + 1;
            Ok((distance, length))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Encode
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into a complete LZ77 stream.
///
/// `extended` selects type `0x11` (longer matches, 32-bit size escape).  The
/// basic header only holds 24 bits of size, so larger inputs require the
/// extended variant; anything past `u32::MAX` is rejected for both.
pub fn encode(src: &[u8], extended: bool) -> Result<Vec<u8>> {
    if src.len() > u32::MAX as usize || (!extended && src.len() > MAX_INLINE_SIZE) {
        return Err(Error::InvalidOperation("input too large for LZ77 header"));
    }
    let header = Header {
        extended,
        decompressed_size: src.len(),
    };
    let mut head = header.write();
    head.reserve(src.len() + src.len() / 8 + 1);
    let mut groups = GroupWriter::with_header(head);

    let window = if extended { WINDOW_EXTENDED } else { WINDOW_BASIC };
    for token in Parser::new(src, window) {
        match token {
            Token::Literal(byte) => {
                groups.flag(false);
                groups.push(byte);
            }
            Token::Reference(m) => {
                groups.flag(true);
                let dist = m.distance - 1;
                let (hi, lo) = ((dist >> 8) as u8, dist as u8);
                if !extended {
                    groups.extend(&[((m.length - 3) as u8) << 4 | hi, lo]);
                } else if m.length <= 0x10 {
                    groups.extend(&[((m.length - 1) as u8) << 4 | hi, lo]);
                } else if m.length <= 0x110 {
                    let l = m.length - 0x11;
                    groups.extend(&[(l >> 4) as u8, ((l & 0x0F) as u8) << 4 | hi, lo]);
                } else {
                    let l = m.length - 0x111;
                    groups.extend(&[
                        0x10 | (l >> 12) as u8,
                        (l >> 4) as u8,
                        ((l & 0x0F) as u8) << 4 | hi,
                        lo,
                    ]);
                }
            }
        }
    }

    let out = groups.finish();
    debug!(
        extended,
        decompressed = src.len(),
        compressed = out.len(),
        "lz77 encode"
    );
    Ok(out)
}
