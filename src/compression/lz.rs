//! Shared LZ machinery for the Yaz0 and LZ77 codecs.
//!
//! Encode side:
//!   - [`MatchFinder`]: hash-chain search over the sliding window
//!     `[pos - max_distance, pos)` for the longest match at `pos`.
//!   - [`Parser`]: greedy parse with one-step lazy evaluation, yielding a
//!     stream of [`Token`]s.
//!   - [`GroupWriter`]: packs flag bits eight to a control byte, high bit
//!     first, interleaved with the token bytes they describe.
//!
//! Decode side:
//!   - [`Input`]: bounds-checked byte reader over the source.
//!   - [`copy_back_reference`]: the overlap-safe, byte-at-a-time copy.

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Window parameters and tokens
// ─────────────────────────────────────────────────────────────────────────────

/// Per-format limits of the match search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Largest encodable back-reference distance.
    pub max_distance: usize,
    /// Shortest match worth a reference; shorter runs stay literal.
    pub min_match: usize,
    /// Longest encodable match.
    pub max_match: usize,
}

/// A back-reference: copy `length` bytes starting `distance` bytes behind the
/// current output position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub distance: usize,
    pub length: usize,
}

/// One parse decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Literal(u8),
    Reference(Match),
}

// ─────────────────────────────────────────────────────────────────────────────
// MatchFinder
// ─────────────────────────────────────────────────────────────────────────────

const HASH_LOG: u32 = 13;
const HASH_SIZE: usize = 1 << HASH_LOG;
const NONE: usize = usize::MAX;

/// Bytes hashed per position.  Every window using this finder must have
/// `min_match >= HASH_BYTES`.
const HASH_BYTES: usize = 3;

#[inline(always)]
fn hash3(src: &[u8], pos: usize) -> usize {
    let v = u32::from(src[pos]) | u32::from(src[pos + 1]) << 8 | u32::from(src[pos + 2]) << 16;
    (v.wrapping_mul(2_654_435_761) >> (32 - HASH_LOG)) as usize
}

/// Hash-chain index over every position already passed by the parser.
///
/// `head` maps a 3-byte hash to the most recent position with that hash;
/// `prev` (a ring sized to cover the window) links each position to the
/// previous one with the same hash.  Chains are walked nearest-first and a
/// candidate replaces the best only when strictly longer, so ties keep the
/// shorter distance.
pub struct MatchFinder<'a> {
    src: &'a [u8],
    window: Window,
    head: Vec<usize>,
    prev: Vec<usize>,
    mask: usize,
    next_to_update: usize,
}

impl<'a> MatchFinder<'a> {
    pub fn new(src: &'a [u8], window: Window) -> Self {
        debug_assert!(window.min_match >= HASH_BYTES);
        let ring = window.max_distance.next_power_of_two();
        MatchFinder {
            src,
            window,
            head: vec![NONE; HASH_SIZE],
            prev: vec![NONE; ring],
            mask: ring - 1,
            next_to_update: 0,
        }
    }

    /// Index every position in `[next_to_update, target)`.
    fn insert(&mut self, target: usize) {
        while self.next_to_update < target {
            let pos = self.next_to_update;
            if pos + HASH_BYTES <= self.src.len() {
                let h = hash3(self.src, pos);
                self.prev[pos & self.mask] = self.head[h];
                self.head[h] = pos;
            }
            self.next_to_update += 1;
        }
    }

    /// Longest match for the bytes at `pos`, or `None` when nothing reaches
    /// `min_match`.  Positions must be queried in non-decreasing order.
    pub fn find(&mut self, pos: usize) -> Option<Match> {
        self.insert(pos);

        let max_len = self.window.max_match.min(self.src.len() - pos);
        if max_len < self.window.min_match {
            return None;
        }

        let mut best: Option<Match> = None;
        let mut best_len = self.window.min_match - 1;
        let mut candidate = self.head[hash3(self.src, pos)];

        while candidate != NONE {
            let distance = pos - candidate;
            if distance > self.window.max_distance {
                break;
            }
            // Cheap reject: a longer match must agree at the current best length.
            if self.src[candidate + best_len] == self.src[pos + best_len] {
                let length = common_length(self.src, candidate, pos, max_len);
                if length > best_len {
                    best_len = length;
                    best = Some(Match { distance, length });
                    if length == max_len {
                        break;
                    }
                }
            }
            candidate = self.prev[candidate & self.mask];
        }
        best
    }
}

/// Number of equal bytes at `a` and `b` (`a < b`), capped at `max_len`.
/// The ranges may overlap; that is exactly the run-length case the decoder's
/// byte-wise copy reproduces.
#[inline]
fn common_length(src: &[u8], a: usize, b: usize, max_len: usize) -> usize {
    src[a..]
        .iter()
        .zip(&src[b..b + max_len])
        .take_while(|(x, y)| x == y)
        .count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser
// ─────────────────────────────────────────────────────────────────────────────

/// Left-to-right token stream over `src`.
///
/// Greedy longest match, except that a literal is emitted when the match at
/// the next position is at least two bytes longer than the one here.
pub struct Parser<'a> {
    finder: MatchFinder<'a>,
    src: &'a [u8],
    pos: usize,
    lookahead: Option<(usize, Option<Match>)>,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a [u8], window: Window) -> Self {
        Parser {
            finder: MatchFinder::new(src, window),
            src,
            pos: 0,
            lookahead: None,
        }
    }

    fn match_at(&mut self, pos: usize) -> Option<Match> {
        match self.lookahead.take() {
            Some((at, found)) if at == pos => found,
            _ => self.finder.find(pos),
        }
    }
}

impl Iterator for Parser<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let pos = self.pos;
        let byte = *self.src.get(pos)?;

        let Some(here) = self.match_at(pos) else {
            self.pos += 1;
            return Some(Token::Literal(byte));
        };

        if pos + 1 < self.src.len() {
            let next = self.finder.find(pos + 1);
            self.lookahead = Some((pos + 1, next));
            if matches!(next, Some(m) if m.length >= here.length + 2) {
                self.pos += 1;
                return Some(Token::Literal(byte));
            }
        }

        self.pos += here.length;
        Some(Token::Reference(here))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GroupWriter
// ─────────────────────────────────────────────────────────────────────────────

/// Output buffer organised as groups of one control byte plus up to eight
/// units.  Flags fill the control byte from bit 7 down; a short final group
/// leaves its unused low bits clear.
pub struct GroupWriter {
    out: Vec<u8>,
    control_at: usize,
    flags_in_group: u8,
}

impl GroupWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        GroupWriter {
            out: Vec::with_capacity(capacity),
            control_at: 0,
            flags_in_group: 8,
        }
    }

    /// Start from a pre-written header.
    pub fn with_header(header: Vec<u8>) -> Self {
        GroupWriter {
            out: header,
            control_at: 0,
            flags_in_group: 8,
        }
    }

    /// Record the flag for the next unit, opening a new group when needed.
    #[inline]
    pub fn flag(&mut self, set: bool) {
        if self.flags_in_group == 8 {
            self.control_at = self.out.len();
            self.out.push(0);
            self.flags_in_group = 0;
        }
        if set {
            self.out[self.control_at] |= 0x80 >> self.flags_in_group;
        }
        self.flags_in_group += 1;
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.out.push(byte);
    }

    #[inline]
    pub fn extend(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    pub fn finish(self) -> Vec<u8> {
        self.out
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Bounds-checked reader over compressed input.  Running out of bytes is a
/// [`Error::Bounds`] at the offset where the next byte was expected.
pub struct Input<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Input<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Input { src, pos: 0 }
    }

    #[inline]
    pub fn byte(&mut self) -> Result<u8> {
        let b = *self
            .src
            .get(self.pos)
            .ok_or_else(|| Error::bounds("truncated input", self.pos))?;
        self.pos += 1;
        Ok(b)
    }

    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.src.len())
            .ok_or_else(|| Error::bounds("truncated input", self.src.len()))?;
        let bytes = &self.src[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }
}

/// Copy `length` bytes from `distance` bytes behind `out` to `out`, one byte
/// at a time, and return the new output position.
///
/// The source and destination ranges overlap whenever `distance < length`;
/// copying byte by byte replicates the repeating pattern, which a block copy
/// would corrupt.  A distance reaching before the start of `dst`, or a length
/// running past its end, is rejected before anything is written.
#[inline]
pub fn copy_back_reference(
    dst: &mut [u8],
    out: usize,
    distance: usize,
    length: usize,
) -> Result<usize> {
    if distance == 0 || distance > out {
        return Err(Error::bounds("back-reference before start of output", out));
    }
    let end = out
        .checked_add(length)
        .filter(|&end| end <= dst.len())
        .ok_or_else(|| Error::bounds("back-reference past end of output", out))?;
    for i in out..end {
        dst[i] = dst[i - distance];
    }
    Ok(end)
}
