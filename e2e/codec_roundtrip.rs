// e2e/codec_roundtrip.rs — codec round-trips over assorted corpora
//
// Every corpus goes through every format, both through the raw codec entry
// points and through the container layer, and must come back unchanged.

use binstream::container::{self, YAZ0_HEADER_LEN};
use binstream::{lz77_decode, lz77_encode, yaz0_decode, yaz0_encode, Format};

// ── Corpora ──────────────────────────────────────────────────────────────────

fn text(len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "the ", "hero ", "of ", "time ", "opens ", "a ", "chest ", "and ", "finds ", "rupees ",
    ];
    let mut out = Vec::with_capacity(len);
    let mut i = 0usize;
    while out.len() < len {
        out.extend_from_slice(WORDS[(i * 7 + i / 3) % WORDS.len()].as_bytes());
        i += 1;
    }
    out.truncate(len);
    out
}

fn noise(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as u8
        })
        .collect()
}

/// Fixed-width records with a few varying fields, like a parameter table.
fn table(rows: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(rows * 16);
    for row in 0..rows as u32 {
        out.extend_from_slice(&row.to_be_bytes());
        out.extend_from_slice(&(row % 5).to_be_bytes());
        out.extend_from_slice(&[0, 0, 0x3F, 0x80]);
        out.extend_from_slice(&[0xFF; 4]);
    }
    out
}

fn corpora() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("empty", Vec::new()),
        ("one byte", vec![0x5A]),
        ("text", text(64 * 1024)),
        ("noise", noise(32 * 1024)),
        ("table", table(4096)),
        ("zeros", vec![0u8; 200_000]),
        ("noise then repeat", {
            let mut v = noise(3000);
            let head = v[..3000].to_vec();
            v.extend_from_slice(&head);
            v
        }),
    ]
}

// ── 1. Raw codecs ────────────────────────────────────────────────────────────

#[test]
fn yaz0_raw_round_trip() {
    for (name, data) in corpora() {
        let packed = yaz0_encode(&data);
        let mut out = vec![0u8; data.len()];
        let n = yaz0_decode(&packed, &mut out, data.len())
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(n, data.len(), "{name}");
        assert_eq!(out, data, "{name}");
    }
}

#[test]
fn lz77_raw_round_trip() {
    for (name, data) in corpora() {
        for extended in [false, true] {
            let packed = lz77_encode(&data, extended).unwrap();
            let out = lz77_decode(&packed).unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(out, data, "{name} extended={extended}");
        }
    }
}

// ── 2. Containers ────────────────────────────────────────────────────────────

#[test]
fn container_round_trip_all_formats() {
    for (name, data) in corpora() {
        for format in Format::ALL {
            let packed = container::pack(format, &data).unwrap();
            let info = container::detect(&packed).unwrap();
            assert_eq!(info.format, format, "{name}");
            assert_eq!(info.decompressed_size, data.len(), "{name}");

            let (detected, out) = container::unpack(&packed).unwrap();
            assert_eq!(detected, format, "{name}");
            assert_eq!(out, data, "{name} {format}");
        }
    }
}

#[test]
fn yaz0_container_payload_is_raw_stream() {
    let data = text(5000);
    let packed = container::pack(Format::Yaz0, &data).unwrap();
    assert_eq!(&packed[YAZ0_HEADER_LEN..], yaz0_encode(&data).as_slice());
}

// ── 3. Compression sanity ────────────────────────────────────────────────────

#[test]
fn compressible_data_shrinks() {
    for data in [text(64 * 1024), table(4096), vec![0u8; 200_000]] {
        assert!(yaz0_encode(&data).len() < data.len() / 2);
        assert!(lz77_encode(&data, false).unwrap().len() < data.len() / 2);
        assert!(lz77_encode(&data, true).unwrap().len() < data.len() / 2);
    }
}

#[test]
fn noise_expands_by_at_most_control_bytes() {
    let data = noise(32 * 1024);
    let bound = data.len() + (data.len() + 7) / 8;
    assert!(yaz0_encode(&data).len() <= bound);
    assert!(lz77_encode(&data, false).unwrap().len() <= bound + 4);
}

#[test]
fn repeat_within_window_is_found() {
    // 3000 bytes of noise repeated once: the second copy fits the 4 KiB
    // window, so it costs a handful of references rather than 3000 literals.
    let mut data = noise(3000);
    let head = data.clone();
    data.extend_from_slice(&head);
    let packed = yaz0_encode(&data);
    assert!(packed.len() < 3000 + 3000 / 8 + 200);
}
