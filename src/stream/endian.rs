//! Byte-order selection and the pure byte-swap primitive.
//!
//! Typed stream operations store values in native order after passing them
//! through [`SwapBytes::to_endian`], which reverses the full byte sequence
//! only when the configured [`Endian`] differs from the host.  Floats are
//! swapped on their raw bit pattern, never on the numeric value.

use std::fmt;

/// Byte ordering of multi-byte values in a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most-significant byte first.
    Big,
    /// Least-significant byte first.
    Little,
}

impl Endian {
    /// Byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    #[inline]
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Big => f.write_str("BigEndian"),
            Endian::Little => f.write_str("LittleEndian"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SwapBytes
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed-width values that can be byte-reversed and moved to/from raw bytes.
pub trait SwapBytes: Copy {
    /// Width in bytes.
    const WIDTH: usize;

    /// Reverse the full byte sequence of the value.
    fn swap_bytes(self) -> Self;

    /// Raw bytes in host order.
    fn write_ne(self, out: &mut [u8]);

    /// Reassemble from raw host-order bytes.  `bytes.len()` must equal `WIDTH`.
    fn read_ne(bytes: &[u8]) -> Self;

    /// Swap when `endian` differs from the host order.  The operation is its
    /// own inverse, so it converts in both directions.
    #[inline]
    fn to_endian(self, endian: Endian) -> Self {
        if endian.is_native() {
            self
        } else {
            self.swap_bytes()
        }
    }
}

macro_rules! impl_swap_int {
    ($($t:ty),*) => {$(
        impl SwapBytes for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline]
            fn swap_bytes(self) -> Self {
                <$t>::swap_bytes(self)
            }

            #[inline]
            fn write_ne(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            #[inline]
            fn read_ne(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(bytes);
                <$t>::from_ne_bytes(raw)
            }
        }
    )*};
}

impl_swap_int!(u16, i16, u32, i32, u64, i64);

macro_rules! impl_swap_float {
    ($($t:ty => $bits:ty),*) => {$(
        impl SwapBytes for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline]
            fn swap_bytes(self) -> Self {
                <$t>::from_bits(self.to_bits().swap_bytes())
            }

            #[inline]
            fn write_ne(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            #[inline]
            fn read_ne(bytes: &[u8]) -> Self {
                <$t>::from_bits(<$bits as SwapBytes>::read_ne(bytes))
            }
        }
    )*};
}

impl_swap_float!(f32 => u32, f64 => u64);
