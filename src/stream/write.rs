//! Typed write operations.
//!
//! Every write except [`ByteBuffer::write_bit`] first closes a partially
//! written bit byte, then grows the buffer to fit and stores the value at the
//! cursor in the configured byte order.

use super::buffer::ByteBuffer;
use super::endian::SwapBytes;
use crate::error::Result;

/// UTF-16 byte-order mark.
pub(crate) const BOM: u16 = 0xFEFF;

impl ByteBuffer {
    /// Set or clear bit `bit_position` (bit 0 = least significant) of the byte
    /// at the cursor, then advance the bit cursor.  Crossing bit 7 moves to the
    /// next byte.  Bits therefore pack LSB-first: writing 1,0,1,1,0,0,0,1
    /// produces the single byte `0x8D`.
    pub fn write_bit(&mut self, value: bool) -> Result<()> {
        self.grow_to(self.position + 1)?;
        let mask = 1u8 << self.bit_position;
        if value {
            self.data[self.position] |= mask;
        } else {
            self.data[self.position] &= !mask;
        }
        self.bit_position += 1;
        if self.bit_position > 7 {
            self.bit_position = 0;
            self.position += 1;
        }
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        let at = self.prepare_write(1)?;
        self.data[at] = value;
        self.position += 1;
        Ok(())
    }

    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Copy `bytes` verbatim at the cursor.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let at = self.prepare_write(bytes.len())?;
        self.data[at..at + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
        Ok(())
    }

    /// Write `count` copies of `value`.
    pub fn fill(&mut self, value: u8, count: usize) -> Result<()> {
        let at = self.prepare_write(count)?;
        self.data[at..at + count].fill(value);
        self.position += count;
        Ok(())
    }

    /// Store any fixed-width value in the configured byte order.
    pub fn write_fixed<T: SwapBytes>(&mut self, value: T) -> Result<()> {
        let at = self.prepare_write(T::WIDTH)?;
        value
            .to_endian(self.endian)
            .write_ne(&mut self.data[at..at + T::WIDTH]);
        self.position += T::WIDTH;
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_fixed(value)
    }

    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_fixed(value)
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_fixed(value)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_fixed(value)
    }

    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_fixed(value)
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_fixed(value)
    }

    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_fixed(value)
    }

    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_fixed(value)
    }

    /// One byte, 0 or 1.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(u8::from(value))
    }

    /// C-string write: bytes up to (not including) the first embedded NUL,
    /// followed by exactly one NUL terminator.  `"ab\0cd"` stores `61 62 00`.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let bytes = value.as_bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let at = self.prepare_write(end + 1)?;
        self.data[at..at + end].copy_from_slice(&bytes[..end]);
        self.data[at + end] = 0;
        self.position += end + 1;
        Ok(())
    }

    /// UTF-16 string: a BOM unit, the UTF-16 units of `value` (any BOM units
    /// in the input are dropped), then one zero unit.  Every unit goes through
    /// the 16-bit endian-aware path.
    pub fn write_unicode_string(&mut self, value: &str) -> Result<()> {
        self.write_u16(BOM)?;
        for unit in value.encode_utf16().filter(|&u| u != BOM) {
            self.write_u16(unit)?;
        }
        self.write_u16(0)
    }
}
