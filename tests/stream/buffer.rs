// Integration tests for src/stream/buffer.rs — construction, seek, resize
//
// Covers:
//   - Constructors: new / with_length / from_vec / from_slice / set_data
//   - seek with every origin, growth on seek, negative targets
//   - resize: exact growth, zero-filled tail, shrink rejected
//   - read_as_block does not move the cursor

use binstream::{ByteBuffer, Endian, Error, SeekOrigin};

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn new_buffer_is_empty_little_endian() {
    let buf = ByteBuffer::new();
    assert!(buf.is_empty());
    assert_eq!(buf.position(), 0);
    assert!(buf.at_end());
    assert_eq!(buf.endian(), Endian::Little);
    assert!(buf.is_little_endian());
}

#[test]
fn with_length_is_zero_filled() {
    let buf = ByteBuffer::with_length(12).unwrap();
    assert_eq!(buf.len(), 12);
    assert_eq!(buf.as_slice(), &[0u8; 12]);
    assert_eq!(buf.position(), 0);
}

#[test]
fn from_vec_takes_ownership_without_copy() {
    let data = vec![9u8; 64];
    let ptr = data.as_ptr();
    let buf = ByteBuffer::from_vec(data);
    assert_eq!(buf.as_slice().as_ptr(), ptr);
}

#[test]
fn from_slice_copies() {
    let data = [1u8, 2, 3];
    let buf = ByteBuffer::from_slice(&data);
    assert_ne!(buf.as_slice().as_ptr(), data.as_ptr());
    assert_eq!(buf.as_slice(), &data);
}

#[test]
fn set_data_resets_cursor_keeps_endian() {
    let mut buf = ByteBuffer::new().with_endian(Endian::Big);
    buf.write_u32(7).unwrap();
    buf.set_data(vec![0xAA, 0xBB]);
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.len(), 2);
    assert!(buf.is_big_endian());
}

// ─────────────────────────────────────────────────────────────────────────────
// seek
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn seek_begin_current_end() {
    let mut buf = ByteBuffer::with_length(10).unwrap();
    buf.seek(4, SeekOrigin::Begin).unwrap();
    assert_eq!(buf.position(), 4);
    buf.seek(3, SeekOrigin::Current).unwrap();
    assert_eq!(buf.position(), 7);
    buf.seek(-2, SeekOrigin::Current).unwrap();
    assert_eq!(buf.position(), 5);
    buf.seek(-1, SeekOrigin::End).unwrap();
    assert_eq!(buf.position(), 9);
    assert_eq!(buf.len(), 10);
}

#[test]
fn seek_beyond_end_grows_without_truncating() {
    let mut buf = ByteBuffer::from_slice(&[1, 2, 3, 4]);
    buf.seek(4, SeekOrigin::End).unwrap();
    assert_eq!(buf.len(), 8);
    assert_eq!(buf.position(), 8);
    assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 0, 0, 0, 0]);

    buf.seek(0, SeekOrigin::Begin).unwrap();
    assert_eq!(buf.len(), 8);
}

#[test]
fn seek_negative_target_is_out_of_range() {
    let mut buf = ByteBuffer::with_length(4).unwrap();
    let err = buf.seek(-1, SeekOrigin::Begin).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { position: -1, .. }));

    buf.seek(2, SeekOrigin::Begin).unwrap();
    assert!(matches!(
        buf.seek(-3, SeekOrigin::Current),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        buf.seek(-5, SeekOrigin::End),
        Err(Error::OutOfRange { .. })
    ));
    assert_eq!(buf.position(), 2);
}

#[test]
fn seek_resets_bit_cursor_without_flush() {
    let mut buf = ByteBuffer::new();
    buf.write_bit(true).unwrap();
    buf.write_bit(true).unwrap();
    buf.seek(0, SeekOrigin::Current).unwrap();
    assert_eq!(buf.bit_position(), 0);
    assert_eq!(buf.position(), 0);
    // The partial byte is now overwritten rather than skipped.
    buf.write_u8(0x55).unwrap();
    assert_eq!(buf.as_slice(), &[0x55]);
}

#[test]
fn seek_bit_range_checked() {
    let mut buf = ByteBuffer::with_length(1).unwrap();
    buf.seek_bit(7).unwrap();
    assert_eq!(buf.bit_position(), 7);
    assert!(matches!(buf.seek_bit(8), Err(Error::InvalidOperation(_))));
}

// ─────────────────────────────────────────────────────────────────────────────
// resize / growth
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn resize_grows_exactly_and_preserves_head() {
    let mut buf = ByteBuffer::from_slice(&[0xDE, 0xAD]);
    buf.resize(5).unwrap();
    assert_eq!(buf.as_slice(), &[0xDE, 0xAD, 0, 0, 0]);
    buf.resize(5).unwrap();
    assert_eq!(buf.len(), 5);
}

#[test]
fn resize_shrink_is_invalid_operation() {
    let mut buf = ByteBuffer::with_length(8).unwrap();
    let err = buf.resize(4).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
    assert_eq!(buf.len(), 8);
}

#[test]
fn write_past_end_grows_to_minimum_offset() {
    let mut buf = ByteBuffer::from_slice(&[1, 2, 3]);
    buf.seek(2, SeekOrigin::Begin).unwrap();
    buf.write_u32(0xFFFF_FFFF).unwrap();
    assert_eq!(buf.len(), 6);
    assert_eq!(buf.as_slice(), &[1, 2, 0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn read_as_block_copies_and_keeps_cursor() {
    let mut buf = ByteBuffer::new();
    buf.write_u16(0x1234).unwrap();
    let block = buf.read_as_block();
    assert_eq!(block, vec![0x34, 0x12]);
    assert_eq!(buf.position(), 2);
    assert_eq!(buf.into_inner(), block);
}
