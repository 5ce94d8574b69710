//! Endian-aware, bit-precise, growable byte streams.
//!
//! [`ByteBuffer`] owns the bytes and the cursor; the typed read/write
//! operations live in the `read` and `write` submodules as inherent methods,
//! so one value serves as both the buffer and its typed view.

pub mod buffer;
pub mod endian;
pub mod file;
pub mod read;
pub mod write;

pub use buffer::{ByteBuffer, SeekOrigin};
pub use endian::{Endian, SwapBytes};
