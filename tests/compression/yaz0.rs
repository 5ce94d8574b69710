// Integration tests for src/compression/yaz0.rs
//
// Covers:
//   - Hand-built streams: literals, inline and escaped references, overlap
//   - Malformed input: distance beyond output, truncation, short destination
//   - Encoder: round-trips, window limit, short final group
//
// Byte-for-byte parity with other Yaz0 encoders is not asserted; only that
// the output decodes back to the input.

use binstream::compression::yaz0::{self, MAX_DISTANCE, MAX_MATCH};
use binstream::{yaz0_decode, yaz0_encode, Error};

fn round_trip(src: &[u8]) -> Vec<u8> {
    let packed = yaz0_encode(src);
    let mut out = vec![0u8; src.len()];
    let n = yaz0_decode(&packed, &mut out, src.len()).expect("decode failed");
    assert_eq!(n, src.len());
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding hand-built streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn all_literal_group() {
    let src = [0xFF, b'S', b'A', b'R', b'I', b'A', b'K', b'O', b'!'];
    let mut dst = [0u8; 8];
    assert_eq!(yaz0_decode(&src, &mut dst, 8).unwrap(), 8);
    assert_eq!(&dst, b"SARIAKO!");
}

#[test]
fn overlapping_reference_replicates_byte() {
    // literal 0xAA; reference distance 1 length 5 (N = 3).
    let src = [0x80, 0xAA, 0x30, 0x00];
    let mut dst = [0u8; 6];
    yaz0_decode(&src, &mut dst, 6).unwrap();
    assert_eq!(dst, [0xAA; 6]);
}

#[test]
fn overlapping_reference_replicates_pattern() {
    // "ab" then distance 2, length 7 (N = 5): "ababababa".
    let src = [0xC0, b'a', b'b', 0x50, 0x01];
    let mut dst = [0u8; 9];
    yaz0_decode(&src, &mut dst, 9).unwrap();
    assert_eq!(&dst, b"ababababa");
}

#[test]
fn escaped_maximum_length() {
    // literal, then N = 0 with escape 0xFF → 0xFF + 0x12 = 273 bytes.
    let src = [0x80, 7, 0x00, 0x00, 0xFF];
    let mut dst = vec![0u8; 274];
    yaz0_decode(&src, &mut dst, 274).unwrap();
    assert!(dst.iter().all(|&b| b == 7));
}

#[test]
fn decode_stops_at_size_ignoring_trailing_flags() {
    // Control byte claims 8 literals but only 2 are wanted and present.
    let src = [0xFF, 1, 2];
    let mut dst = [0u8; 2];
    assert_eq!(yaz0_decode(&src, &mut dst, 2).unwrap(), 2);
    assert_eq!(dst, [1, 2]);
}

#[test]
fn decode_into_larger_destination_leaves_tail() {
    let src = [0x80, 9];
    let mut dst = [0xEEu8; 4];
    assert_eq!(yaz0_decode(&src, &mut dst, 1).unwrap(), 1);
    assert_eq!(dst, [9, 0xEE, 0xEE, 0xEE]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn distance_beyond_output_is_bounds_error() {
    // One literal, then distance 3 with only 1 byte produced.
    let src = [0x80, 0x11, 0x30, 0x02];
    let mut dst = [0u8; 8];
    let err = yaz0_decode(&src, &mut dst, 8).unwrap_err();
    assert!(matches!(err, Error::Bounds { .. }));
}

#[test]
fn reference_as_first_unit_is_bounds_error() {
    let src = [0x00, 0x10, 0x00];
    let mut dst = [0u8; 4];
    assert!(yaz0_decode(&src, &mut dst, 4).unwrap_err().is_bounds());
}

#[test]
fn truncated_input_is_bounds_error() {
    let mut dst = [0u8; 4];
    // Missing literal bytes.
    assert!(yaz0_decode(&[0xFF, 1, 2], &mut dst, 4).unwrap_err().is_bounds());
    // Missing second token byte.
    assert!(yaz0_decode(&[0x80, 1, 0x30], &mut dst, 4).unwrap_err().is_bounds());
    // Missing escape byte.
    assert!(yaz0_decode(&[0x80, 1, 0x00, 0x00], &mut dst, 4).unwrap_err().is_bounds());
    // Nothing at all.
    assert!(yaz0_decode(&[], &mut dst, 4).unwrap_err().is_bounds());
}

#[test]
fn reference_overrunning_size_is_bounds_error() {
    // literal then length 5 reference, but only 3 bytes wanted.
    let src = [0x80, 0xAA, 0x30, 0x00];
    let mut dst = [0u8; 16];
    assert!(yaz0_decode(&src, &mut dst, 3).unwrap_err().is_bounds());
}

#[test]
fn destination_smaller_than_size_is_bounds_error() {
    let src = yaz0_encode(b"twelve bytes");
    let mut dst = [0u8; 4];
    assert!(yaz0_decode(&src, &mut dst, 12).unwrap_err().is_bounds());
}

#[test]
fn decode_to_vec_rejects_impossible_size() {
    assert!(yaz0::decode_to_vec(&[0x80, 1], 1 << 30).unwrap_err().is_bounds());
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn round_trip_text() {
    let src = b"It's dangerous to go alone! Take this. It's dangerous to go alone!".repeat(30);
    let packed = yaz0_encode(&src);
    assert!(packed.len() < src.len() / 4);
    assert_eq!(round_trip(&src), src);
}

#[test]
fn round_trip_incompressible() {
    let src: Vec<u8> = (0..5000u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
        .collect();
    let packed = yaz0_encode(&src);
    // Worst case: one control byte per eight literals.
    assert!(packed.len() <= src.len() + (src.len() + 7) / 8);
    assert_eq!(round_trip(&src), src);
}

#[test]
fn round_trip_tiny_inputs() {
    for len in 0..20 {
        let src: Vec<u8> = (0..len as u8).map(|b| b % 3).collect();
        assert_eq!(round_trip(&src), src, "len {len}");
    }
}

#[test]
fn matches_never_exceed_window() {
    // A block repeated exactly MAX_DISTANCE + 1 bytes later must not be
    // referenced; one repeated MAX_DISTANCE later may be.
    let mut src: Vec<u8> = (0..MAX_DISTANCE + 1)
        .map(|i| (i as u32).wrapping_mul(0x9E37_79B9).rotate_left(7) as u8)
        .collect();
    let head = src[..64].to_vec();
    src.extend_from_slice(&head);
    assert_eq!(round_trip(&src), src);
}

#[test]
fn long_runs_use_maximum_length() {
    let src = vec![0x42u8; MAX_MATCH * 4 + 1];
    let packed = yaz0_encode(&src);
    // One literal then four maximal escaped references.
    assert_eq!(packed.len(), 1 + 1 + 4 * 3);
    assert_eq!(round_trip(&src), src);
}

#[test]
fn short_final_group_has_zero_trailing_flags() {
    let packed = yaz0_encode(b"abc");
    assert_eq!(packed, vec![0xE0, b'a', b'b', b'c']);
}
