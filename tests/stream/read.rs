// Integration tests for src/stream/read.rs — typed reads
//
// Reading back with the matching endianness must reproduce every value; reads
// past the end fail without moving the cursor and never grow the buffer.

use binstream::{ByteBuffer, Endian, Error, SeekOrigin};

fn rewind(mut buf: ByteBuffer) -> ByteBuffer {
    buf.seek(0, SeekOrigin::Begin).unwrap();
    buf
}

#[test]
fn values_round_trip_in_both_orders() {
    for endian in [Endian::Big, Endian::Little] {
        let mut buf = ByteBuffer::new().with_endian(endian);
        buf.write_u8(0xF0).unwrap();
        buf.write_i16(-12345).unwrap();
        buf.write_u32(0x0102_0304).unwrap();
        buf.write_i64(i64::MIN + 7).unwrap();
        buf.write_f32(3.25).unwrap();
        buf.write_f64(f64::EPSILON).unwrap();
        buf.write_bool(true).unwrap();

        let mut buf = rewind(buf);
        assert_eq!(buf.read_u8().unwrap(), 0xF0);
        assert_eq!(buf.read_i16().unwrap(), -12345);
        assert_eq!(buf.read_u32().unwrap(), 0x0102_0304);
        assert_eq!(buf.read_i64().unwrap(), i64::MIN + 7);
        assert_eq!(buf.read_f32().unwrap(), 3.25);
        assert_eq!(buf.read_f64().unwrap(), f64::EPSILON);
        assert!(buf.read_bool().unwrap());
        assert!(buf.at_end());
    }
}

#[test]
fn mismatched_order_reads_swapped_value() {
    let mut buf = ByteBuffer::new().with_endian(Endian::Big);
    buf.write_u32(0x0102_0304).unwrap();
    let mut buf = rewind(buf);
    buf.set_endian(Endian::Little);
    assert_eq!(buf.read_u32().unwrap(), 0x0403_0201);
}

#[test]
fn bits_read_back_in_write_order() {
    let pattern = [true, false, true, true, false, false, false, true, true];
    let mut buf = ByteBuffer::new();
    for &b in &pattern {
        buf.write_bit(b).unwrap();
    }
    let mut buf = rewind(buf);
    for &b in &pattern {
        assert_eq!(buf.read_bit().unwrap(), b);
    }
}

#[test]
fn byte_read_skips_rest_of_bit_byte() {
    let mut buf = ByteBuffer::from_slice(&[0b0000_0010, 0x7F]);
    assert!(!buf.read_bit().unwrap());
    assert!(buf.read_bit().unwrap());
    assert_eq!(buf.read_u8().unwrap(), 0x7F);
}

#[test]
fn read_past_end_is_out_of_range_and_keeps_cursor() {
    let mut buf = ByteBuffer::from_slice(&[1, 2]);
    assert!(matches!(buf.read_u32(), Err(Error::OutOfRange { .. })));
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.len(), 2);
    buf.read_u16().unwrap();
    assert!(matches!(buf.read_bit(), Err(Error::OutOfRange { .. })));
    assert!(matches!(buf.read_u8(), Err(Error::OutOfRange { .. })));
}

#[test]
fn read_bytes_borrows_and_advances() {
    let mut buf = ByteBuffer::from_slice(b"HEADbody");
    assert_eq!(buf.read_bytes(4).unwrap(), b"HEAD");
    assert_eq!(buf.position(), 4);
    assert_eq!(buf.read_bytes(4).unwrap(), b"body");
    assert!(buf.read_bytes(1).is_err());
}

#[test]
fn strings_round_trip() {
    let mut buf = ByteBuffer::new().with_endian(Endian::Big);
    buf.write_string("Hyrule").unwrap();
    buf.write_unicode_string("ゼルダ").unwrap();
    buf.write_string("ab\0cd").unwrap();

    let mut buf = rewind(buf);
    assert_eq!(buf.read_string().unwrap(), "Hyrule");
    assert_eq!(buf.read_unicode_string().unwrap(), "ゼルダ");
    assert_eq!(buf.read_string().unwrap(), "ab");
    assert!(buf.at_end());
}

#[test]
fn unterminated_unicode_string_restores_cursor() {
    let mut buf = ByteBuffer::from_slice(&[0xFF, 0xFE, 0x41, 0x00]);
    assert!(buf.read_unicode_string().is_err());
    assert_eq!(buf.position(), 0);
}
