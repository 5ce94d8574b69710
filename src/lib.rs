// binstream — byte streams and asset codecs for game-save tooling

pub mod cli;
pub mod compression;
pub mod config;
pub mod container;
pub mod error;
pub mod stream;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use compression::{lz77_decode, lz77_encode, yaz0_decode, yaz0_encode};
pub use container::{Format, Info};
pub use error::{Error, Result};
pub use stream::{ByteBuffer, Endian, SeekOrigin, SwapBytes};

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
