//! Owned, exactly-growing byte block with a bit-precise cursor.
//!
//! [`ByteBuffer`] keeps three pieces of state next to its bytes:
//!
//! | Field          | Meaning                                                 |
//! |----------------|---------------------------------------------------------|
//! | `position`     | Byte cursor; `position <= len()` between operations     |
//! | `bit_position` | Next bit inside `data[position]`, 0..=7 (bit 0 = LSB)   |
//! | `endian`       | Byte order applied by every typed read/write            |
//!
//! Writes past the end grow the block to *exactly* the offset they need and
//! zero-fill the gap; the length never shrinks.  Growth is not amortised, so a
//! long run of tiny appends to an unsized buffer costs O(n²) copying.  Pre-size
//! with [`ByteBuffer::with_length`] or [`ByteBuffer::resize`] when the final
//! size is known.

use tracing::trace;

use super::endian::Endian;
use crate::config::{DEFAULT_CAPACITY, DEFAULT_ENDIAN};
use crate::error::{Error, Result};

/// Reference point for [`ByteBuffer::seek`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekOrigin {
    /// Offset from byte 0.
    Begin,
    /// Offset from the current byte position.
    Current,
    /// Offset from `len()`; negative offsets move back into the data.
    End,
}

/// Growable in-memory byte stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteBuffer {
    pub(crate) data: Vec<u8>,
    pub(crate) position: usize,
    pub(crate) bit_position: u8,
    pub(crate) endian: Endian,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

impl ByteBuffer {
    /// Empty stream (length 0) with a small reserved capacity.
    pub fn new() -> Self {
        ByteBuffer {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            position: 0,
            bit_position: 0,
            endian: DEFAULT_ENDIAN,
        }
    }

    /// Zero-filled stream of `length` bytes, cursor at 0.
    pub fn with_length(length: usize) -> Result<Self> {
        let mut buf = ByteBuffer {
            data: Vec::new(),
            ..Self::new()
        };
        buf.grow_to(length)?;
        Ok(buf)
    }

    /// Take ownership of `data` without copying.
    pub fn from_vec(data: Vec<u8>) -> Self {
        ByteBuffer {
            data,
            ..Self::new()
        }
    }

    /// Copy `data` into a new stream.
    pub fn from_slice(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Builder-style endianness selection.
    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Accessors
// ─────────────────────────────────────────────────────────────────────────────

impl ByteBuffer {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Pending bit index inside the byte at [`position`](Self::position).
    #[inline]
    pub fn bit_position(&self) -> u8 {
        self.bit_position
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    #[inline]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    #[inline]
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    #[inline]
    pub fn is_big_endian(&self) -> bool {
        self.endian == Endian::Big
    }

    #[inline]
    pub fn is_little_endian(&self) -> bool {
        self.endian == Endian::Little
    }

    /// Borrow the whole block.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Copy of the first `len()` bytes.  The cursor does not move.
    pub fn read_as_block(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Release the storage.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Replace the storage, resetting both cursors.  Endianness is kept.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
        self.position = 0;
        self.bit_position = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cursor movement and sizing
// ─────────────────────────────────────────────────────────────────────────────

impl ByteBuffer {
    /// Move the byte cursor.
    ///
    /// The target is computed relative to `origin` and must not be negative.
    /// A target beyond `len()` grows the buffer to exactly that offset; seeking
    /// never truncates.  Any pending bit position is dropped without
    /// advancing past the partial byte.
    pub fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<()> {
        let base = match origin {
            SeekOrigin::Begin => 0,
            SeekOrigin::Current => self.position,
            SeekOrigin::End => self.data.len(),
        };
        let target = i64::try_from(base)
            .unwrap_or(i64::MAX)
            .saturating_add(offset);
        if target < 0 {
            return Err(Error::out_of_range(target, self.data.len() as u64));
        }
        let target = usize::try_from(target)
            .map_err(|_| Error::out_of_range(target, self.data.len() as u64))?;

        if target > self.data.len() {
            self.grow_to(target)?;
        }
        self.position = target;
        self.bit_position = 0;
        Ok(())
    }

    /// Select the bit written or read next inside the current byte.
    pub fn seek_bit(&mut self, bit: u8) -> Result<()> {
        if bit > 7 {
            return Err(Error::InvalidOperation("bit position out of range"));
        }
        self.bit_position = bit;
        Ok(())
    }

    /// Grow to `new_size` bytes, zero-filling the tail.
    ///
    /// Shrinking is illegal and fails with [`Error::InvalidOperation`].
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        if new_size < self.data.len() {
            return Err(Error::InvalidOperation(
                "new size cannot be less than the old size",
            ));
        }
        self.grow_to(new_size)
    }

    /// Exact-size growth; a no-op when `new_len <= len()`.
    pub(crate) fn grow_to(&mut self, new_len: usize) -> Result<()> {
        let old_len = self.data.len();
        if new_len <= old_len {
            return Ok(());
        }
        self.data
            .try_reserve_exact(new_len - old_len)
            .map_err(|_| Error::Allocation { requested: new_len })?;
        self.data.resize(new_len, 0);
        trace!(old_len, new_len, "stream grown");
        Ok(())
    }

    /// Close a partially written bit byte: the cursor moves to the next whole
    /// byte and any further packing into the old one is abandoned.
    #[inline]
    pub(crate) fn flush_bits(&mut self) {
        if self.bit_position > 0 {
            self.bit_position = 0;
            self.position += 1;
        }
    }

    /// Flush pending bits and make sure `width` bytes are writable at the
    /// cursor.  Returns the write offset.
    pub(crate) fn prepare_write(&mut self, width: usize) -> Result<usize> {
        self.flush_bits();
        let end = self
            .position
            .checked_add(width)
            .ok_or(Error::Allocation { requested: usize::MAX })?;
        self.grow_to(end)?;
        Ok(self.position)
    }

    /// Byte offset a non-bit read of `width` bytes would start at, checked
    /// against the length.  Does not move the cursor.
    pub(crate) fn prepare_read(&self, width: usize) -> Result<usize> {
        let start = self.position + usize::from(self.bit_position > 0);
        match start.checked_add(width) {
            Some(end) if end <= self.data.len() => Ok(start),
            _ => Err(Error::out_of_range(start as i64, self.data.len() as u64)),
        }
    }
}
