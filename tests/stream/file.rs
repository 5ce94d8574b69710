// Integration tests for src/stream/file.rs — load / save

use std::fs;

use binstream::{ByteBuffer, Endian, Error};
use tempfile::TempDir;

#[test]
fn save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quest.sav");

    let mut buf = ByteBuffer::new().with_endian(Endian::Big);
    buf.write_string("ZELDA").unwrap();
    buf.write_u32(0xCAFE_BABE).unwrap();
    buf.save(&path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), buf.as_slice());

    let mut loaded = ByteBuffer::load(&path).unwrap().with_endian(Endian::Big);
    assert_eq!(loaded.position(), 0);
    assert_eq!(loaded.read_string().unwrap(), "ZELDA");
    assert_eq!(loaded.read_u32().unwrap(), 0xCAFE_BABE);
}

#[test]
fn save_ignores_cursor_and_writes_whole_length() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large.bin");

    let data: Vec<u8> = (0u8..=255).cycle().take(100_000).collect();
    let mut buf = ByteBuffer::from_vec(data.clone());
    buf.read_bytes(10).unwrap();
    buf.save(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), data);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ByteBuffer::load(dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
