//! Compressed asset containers: a header plus one codec payload.
//!
//! | Format         | Header                                              |
//! |----------------|-----------------------------------------------------|
//! | `Yaz0`         | `"Yaz0"`, u32 BE decompressed size, 8 zero bytes    |
//! | `Lz77`         | u32 LE `0x10 | size << 8`                           |
//! | `Lz77Extended` | u32 LE `0x11 | size << 8` (+ u32 LE size if needed) |
//!
//! The codecs themselves know nothing about the Yaz0 header; this module
//! composes them with a [`ByteBuffer`] the way format readers/writers do.

use std::fmt;
use std::str::FromStr;

use crate::compression::{lz77, yaz0};
use crate::error::{Error, Result};
use crate::stream::{ByteBuffer, Endian};

/// Yaz0 magic bytes.
pub const YAZ0_MAGIC: &[u8; 4] = b"Yaz0";
/// Size of the Yaz0 file header.
pub const YAZ0_HEADER_LEN: usize = 16;

/// Supported container formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Yaz0,
    Lz77,
    Lz77Extended,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Yaz0, Format::Lz77, Format::Lz77Extended];

    /// Name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Format::Yaz0 => "yaz0",
            Format::Lz77 => "lz77",
            Format::Lz77Extended => "lz77-ext",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Yaz0 => "szs",
            Format::Lz77 | Format::Lz77Extended => "lz",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format '{0}' (expected yaz0, lz77 or lz77-ext)")]
pub struct ParseFormatError(String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFormatError(s.to_owned()))
    }
}

/// What a container header declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Info {
    pub format: Format,
    pub header_len: usize,
    pub compressed_size: usize,
    pub decompressed_size: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Identify the container at the start of `data` from its header alone.
pub fn detect(data: &[u8]) -> Result<Info> {
    if data.len() >= YAZ0_HEADER_LEN && data.starts_with(YAZ0_MAGIC) {
        let mut header =
            ByteBuffer::from_slice(&data[..YAZ0_HEADER_LEN]).with_endian(Endian::Big);
        header.read_bytes(YAZ0_MAGIC.len())?;
        let size = header.read_u32()? as usize;
        return Ok(Info {
            format: Format::Yaz0,
            header_len: YAZ0_HEADER_LEN,
            compressed_size: data.len(),
            decompressed_size: size,
        });
    }

    match lz77::Header::parse(data) {
        Ok((header, header_len)) => Ok(Info {
            format: if header.extended {
                Format::Lz77Extended
            } else {
                Format::Lz77
            },
            header_len,
            compressed_size: data.len(),
            decompressed_size: header.decompressed_size,
        }),
        Err(_) => Err(Error::UnknownContainer),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pack / unpack
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `data` and wrap it in `format`'s header.
pub fn pack(format: Format, data: &[u8]) -> Result<Vec<u8>> {
    match format {
        Format::Yaz0 => {
            let size = u32::try_from(data.len())
                .map_err(|_| Error::InvalidOperation("input too large for Yaz0 header"))?;
            let payload = yaz0::encode(data);
            let mut out = ByteBuffer::with_length(0)?.with_endian(Endian::Big);
            out.resize(YAZ0_HEADER_LEN + payload.len())?;
            out.write_bytes(YAZ0_MAGIC)?;
            out.write_u32(size)?;
            out.fill(0, 8)?;
            out.write_bytes(&payload)?;
            Ok(out.into_inner())
        }
        Format::Lz77 => lz77::encode(data, false),
        Format::Lz77Extended => lz77::encode(data, true),
    }
}

/// Detect the container and decompress its payload.
pub fn unpack(data: &[u8]) -> Result<(Format, Vec<u8>)> {
    let info = detect(data)?;
    let out = match info.format {
        Format::Yaz0 => yaz0::decode_to_vec(&data[info.header_len..], info.decompressed_size)?,
        Format::Lz77 | Format::Lz77Extended => lz77::decode(data)?,
    };
    Ok((info.format, out))
}
