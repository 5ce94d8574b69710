// config.rs — Compile-time configuration constants.
//
// Stream defaults are fixed at build time.  The CLI's default container format
// can be overridden at runtime by the BINPACK_FORMAT environment variable or
// the --format flag; everything else here has no runtime override.

use crate::stream::Endian;

// Byte order a freshly constructed stream uses.
// Game-save records on the handheld targets are little-endian; console asset
// formats (Yaz0 headers, most Wii/GameCube data) switch to Big explicitly.
pub const DEFAULT_ENDIAN: Endian = Endian::Little;

// Bytes reserved (not allocated as length) by `ByteBuffer::new()`.
// Length still starts at 0; this only avoids the first few reallocations.
pub const DEFAULT_CAPACITY: usize = 0x10;

// Chunk size used when persisting a stream to disk.
pub const SAVE_BLOCK_SIZE: usize = 0x4000;

// Default display level for the binpack CLI.
// 0 = silent; 1 = errors only; 2 = normal; 3 = verbose; 4 = debug.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Container format used by `binpack compress` when neither --format nor
// BINPACK_FORMAT is given.
pub const FORMAT_DEFAULT: &str = "yaz0";
