// e2e/error_handling.rs — every error kind surfaced through the public API
//
// Each section drives the library into one failure and checks both the kind
// and that the stream or output was left usable afterwards.

use binstream::container;
use binstream::{lz77_decode, lz77_encode, yaz0_decode, yaz0_encode};
use binstream::{ByteBuffer, Endian, Error, SeekOrigin};
use tempfile::TempDir;

// ── 1. OutOfRange ────────────────────────────────────────────────────────────

#[test]
fn seek_before_start() {
    let mut buf = ByteBuffer::from_slice(&[1, 2, 3, 4]);
    buf.seek(2, SeekOrigin::Begin).unwrap();

    match buf.seek(-3, SeekOrigin::Current) {
        Err(Error::OutOfRange { position, length }) => {
            assert_eq!(position, -1);
            assert_eq!(length, 4);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
    assert!(buf.seek(-5, SeekOrigin::End).is_err());
    assert!(buf.seek(-1, SeekOrigin::Begin).is_err());

    // The failed seeks left the cursor where it was.
    assert_eq!(buf.position(), 2);
    assert_eq!(buf.read_u8().unwrap(), 3);
}

#[test]
fn reads_past_end() {
    let mut buf = ByteBuffer::from_slice(b"ab");
    assert!(matches!(buf.read_u64(), Err(Error::OutOfRange { .. })));
    assert!(matches!(buf.read_bytes(3), Err(Error::OutOfRange { .. })));
    // Missing terminator.
    assert!(matches!(buf.read_string(), Err(Error::OutOfRange { .. })));
    assert_eq!(buf.len(), 2);
}

// ── 2. InvalidOperation ──────────────────────────────────────────────────────

#[test]
fn shrinking_resize_is_rejected() {
    let mut buf = ByteBuffer::with_length(16).unwrap();
    assert!(matches!(buf.resize(8), Err(Error::InvalidOperation(_))));
    assert_eq!(buf.len(), 16);
    buf.resize(16).unwrap();
    buf.resize(32).unwrap();
    assert_eq!(buf.len(), 32);
}

#[test]
fn bit_position_beyond_byte_is_rejected() {
    let mut buf = ByteBuffer::new();
    assert!(matches!(buf.seek_bit(8), Err(Error::InvalidOperation(_))));
    buf.seek_bit(7).unwrap();
    assert_eq!(buf.bit_position(), 7);
}

// ── 3. Allocation ────────────────────────────────────────────────────────────

#[test]
fn impossible_growth_reports_allocation() {
    let mut buf = ByteBuffer::new().with_endian(Endian::Big);
    buf.write_u32(7).unwrap();
    assert!(matches!(
        buf.seek(i64::MAX, SeekOrigin::Begin),
        Err(Error::Allocation { .. })
    ));
    // Nothing was lost.
    assert_eq!(buf.as_slice(), &[0, 0, 0, 7]);
}

// ── 4. Bounds (malformed compressed data) ────────────────────────────────────

#[test]
fn truncated_streams_report_bounds() {
    let data = b"Zora's Domain, Zora's River, Zora's Fountain".repeat(8);

    let yaz0 = yaz0_encode(&data);
    let mut out = vec![0u8; data.len()];
    for cut in [0, 1, yaz0.len() / 2, yaz0.len() - 1] {
        let err = yaz0_decode(&yaz0[..cut], &mut out, data.len()).unwrap_err();
        assert!(err.is_bounds(), "yaz0 cut {cut}: {err}");
    }

    let lz = lz77_encode(&data, true).unwrap();
    for cut in [0, 3, lz.len() / 2, lz.len() - 1] {
        let err = lz77_decode(&lz[..cut]).unwrap_err();
        assert!(err.is_bounds(), "lz77 cut {cut}: {err}");
    }
}

#[test]
fn corrupt_reference_reports_bounds_not_panic() {
    // Flip the first control byte to claim every unit is a reference.
    let data = b"abcdefgh".repeat(4);
    let mut lz = lz77_encode(&data, false).unwrap();
    lz[4] = 0xFF;
    assert!(lz77_decode(&lz).is_err());

    let mut yaz0 = yaz0_encode(&data);
    yaz0[0] = 0x00;
    let mut out = vec![0u8; data.len()];
    assert!(yaz0_decode(&yaz0, &mut out, data.len()).unwrap_err().is_bounds());
}

#[test]
fn bounds_error_message_names_offset() {
    let err = lz77_decode(&[0x10, 4, 0, 0, 0x80, 0x00, 0x05]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("offset"), "{msg}");
}

// ── 5. UnknownContainer and Io ───────────────────────────────────────────────

#[test]
fn unknown_container() {
    assert!(matches!(
        container::unpack(b"\x89PNG\r\n\x1a\n"),
        Err(Error::UnknownContainer)
    ));
}

#[test]
fn io_errors_are_wrapped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.sav");
    assert!(matches!(ByteBuffer::load(&missing), Err(Error::Io(_))));

    // Saving into a directory that does not exist.
    let bad = dir.path().join("no_such_dir").join("out.sav");
    let err = ByteBuffer::from_slice(b"x").save(&bad).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!bad.exists());
}
