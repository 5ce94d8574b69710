//! Typed read operations, mirroring [`write`](super::write).
//!
//! Reads never grow the buffer.  A read that would run past `len()` fails
//! with [`Error::OutOfRange`] and leaves both cursors untouched.

use super::buffer::ByteBuffer;
use super::endian::SwapBytes;
use super::write::BOM;
use crate::error::{Error, Result};

impl ByteBuffer {
    /// Read bit `bit_position` of the byte at the cursor and advance the bit
    /// cursor, LSB-first like [`write_bit`](Self::write_bit).
    pub fn read_bit(&mut self) -> Result<bool> {
        let byte = *self
            .data
            .get(self.position)
            .ok_or_else(|| Error::out_of_range(self.position as i64, self.data.len() as u64))?;
        let value = byte & (1 << self.bit_position) != 0;
        self.bit_position += 1;
        if self.bit_position > 7 {
            self.bit_position = 0;
            self.position += 1;
        }
        Ok(value)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let at = self.prepare_read(1)?;
        self.position = at + 1;
        self.bit_position = 0;
        Ok(self.data[at])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_u8().map(|b| b as i8)
    }

    /// Borrow the next `len` bytes and advance past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        let at = self.prepare_read(len)?;
        self.position = at + len;
        self.bit_position = 0;
        Ok(&self.data[at..at + len])
    }

    /// Load any fixed-width value stored in the configured byte order.
    pub fn read_fixed<T: SwapBytes>(&mut self) -> Result<T> {
        let endian = self.endian;
        let raw = self.read_bytes(T::WIDTH)?;
        Ok(T::read_ne(raw).to_endian(endian))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_fixed()
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_fixed()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_fixed()
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_fixed()
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_fixed()
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_fixed()
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_fixed()
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_fixed()
    }

    /// Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_u8().map(|b| b != 0)
    }

    /// Bytes up to the next NUL; the NUL is consumed.  Invalid UTF-8 is
    /// replaced, not rejected.  A missing terminator is an error.
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.prepare_read(0)?;
        let len = self.data[start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| Error::out_of_range(self.data.len() as i64, self.data.len() as u64))?;
        let bytes = self.read_bytes(len + 1)?;
        Ok(String::from_utf8_lossy(&bytes[..len]).into_owned())
    }

    /// UTF-16 units up to a zero unit.  A leading BOM is consumed; if it
    /// arrives byte-swapped, the remaining units are swapped too.
    pub fn read_unicode_string(&mut self) -> Result<String> {
        let restore = (self.position, self.bit_position);
        match self.read_unicode_units() {
            Ok(units) => Ok(String::from_utf16_lossy(&units)),
            Err(e) => {
                (self.position, self.bit_position) = restore;
                Err(e)
            }
        }
    }

    fn read_unicode_units(&mut self) -> Result<Vec<u16>> {
        let mut units = Vec::new();
        let mut swapped = false;
        let mut first = true;
        loop {
            let mut unit = self.read_u16()?;
            if swapped {
                unit = unit.swap_bytes();
            }
            if first {
                first = false;
                if unit == BOM {
                    continue;
                }
                if unit == BOM.swap_bytes() {
                    swapped = true;
                    continue;
                }
            }
            if unit == 0 {
                return Ok(units);
            }
            units.push(unit);
        }
    }
}
