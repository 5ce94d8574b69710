//! Loading a stream from disk and persisting it back.
//!
//! Both directions move whole buffers; there is no partial or streaming file
//! access.  Saving writes the first `len()` bytes in [`SAVE_BLOCK_SIZE`]
//! chunks regardless of the cursor.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::buffer::ByteBuffer;
use crate::config::SAVE_BLOCK_SIZE;
use crate::error::Result;

impl ByteBuffer {
    /// Read the whole file at `path` into a new stream (cursor 0, default
    /// endianness).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        debug!(path = %path.display(), len = data.len(), "stream loaded");
        Ok(ByteBuffer::from_vec(data))
    }

    /// Write the stream's bytes to `path`, creating or truncating the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        for block in self.data.chunks(SAVE_BLOCK_SIZE) {
            out.write_all(block)?;
        }
        out.flush()?;
        debug!(path = %path.display(), len = self.data.len(), "stream saved");
        Ok(())
    }
}
