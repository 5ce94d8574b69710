// e2e/stream_records.rs — building and parsing a structured save file
//
// Exercises ByteBuffer the way a save-file editor does: a big-endian header,
// packed flag bits, strings in both encodings, a little-endian section, an
// embedded compressed blob, patching a field in place, then a trip through
// the filesystem.

use binstream::container;
use binstream::{ByteBuffer, Endian, Format, SeekOrigin};
use tempfile::TempDir;

const MAGIC: &[u8; 4] = b"SAVE";

#[derive(Debug, Clone, PartialEq)]
struct Save {
    slot: u8,
    name: String,
    nickname: String,
    hearts: u16,
    rupees: u32,
    position: [f32; 3],
    play_time: f64,
    flags: Vec<bool>,
    map: Vec<u8>,
}

fn sample() -> Save {
    Save {
        slot: 2,
        name: "Link".into(),
        nickname: "勇者".into(),
        hearts: 20 * 4,
        rupees: 999,
        position: [-1024.5, 12.25, 300.0],
        play_time: 86_400.125,
        flags: (0..21).map(|i| i % 3 == 0).collect(),
        map: b"#####....##....~~~~".repeat(40),
    }
}

fn write_save(save: &Save) -> ByteBuffer {
    let mut buf = ByteBuffer::new().with_endian(Endian::Big);
    buf.write_bytes(MAGIC).unwrap();
    let size_at = buf.position();
    buf.write_u32(0).unwrap(); // patched below
    buf.write_u8(save.slot).unwrap();
    buf.write_string(&save.name).unwrap();
    buf.write_unicode_string(&save.nickname).unwrap();
    buf.write_u16(save.hearts).unwrap();
    buf.write_u32(save.rupees).unwrap();

    buf.write_u8(save.flags.len() as u8).unwrap();
    for &flag in &save.flags {
        buf.write_bit(flag).unwrap();
    }

    buf.set_endian(Endian::Little);
    for v in save.position {
        buf.write_f32(v).unwrap();
    }
    buf.write_f64(save.play_time).unwrap();

    let blob = container::pack(Format::Yaz0, &save.map).unwrap();
    buf.write_u32(blob.len() as u32).unwrap();
    buf.write_bytes(&blob).unwrap();

    let total = buf.len() as u32;
    buf.set_endian(Endian::Big);
    buf.seek(size_at as i64, SeekOrigin::Begin).unwrap();
    buf.write_u32(total).unwrap();
    buf.seek(0, SeekOrigin::End).unwrap();
    buf
}

fn read_save(buf: &mut ByteBuffer) -> Save {
    buf.set_endian(Endian::Big);
    buf.seek(0, SeekOrigin::Begin).unwrap();
    assert_eq!(buf.read_bytes(4).unwrap(), MAGIC);
    assert_eq!(buf.read_u32().unwrap() as usize, buf.len());
    let slot = buf.read_u8().unwrap();
    let name = buf.read_string().unwrap();
    let nickname = buf.read_unicode_string().unwrap();
    let hearts = buf.read_u16().unwrap();
    let rupees = buf.read_u32().unwrap();

    let count = buf.read_u8().unwrap();
    let flags = (0..count).map(|_| buf.read_bit().unwrap()).collect();

    buf.set_endian(Endian::Little);
    let position = [
        buf.read_f32().unwrap(),
        buf.read_f32().unwrap(),
        buf.read_f32().unwrap(),
    ];
    let play_time = buf.read_f64().unwrap();

    let blob_len = buf.read_u32().unwrap() as usize;
    let blob = buf.read_bytes(blob_len).unwrap().to_vec();
    let (format, map) = container::unpack(&blob).unwrap();
    assert_eq!(format, Format::Yaz0);

    Save {
        slot,
        name,
        nickname,
        hearts,
        rupees,
        position,
        play_time,
        flags,
        map,
    }
}

// ── 1. In memory ─────────────────────────────────────────────────────────────

#[test]
fn save_record_round_trips_in_memory() {
    let save = sample();
    let mut buf = write_save(&save);
    assert_eq!(read_save(&mut buf), save);
    assert!(buf.at_end());
}

#[test]
fn header_fields_are_big_endian() {
    let buf = write_save(&sample());
    let bytes = buf.as_slice();
    assert_eq!(&bytes[..4], MAGIC);
    assert_eq!(
        u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize,
        bytes.len()
    );
    assert_eq!(bytes[8], 2);
    assert_eq!(&bytes[9..14], b"Link\0");
    // UTF-16 BE with byte-order mark.
    assert_eq!(&bytes[14..16], &[0xFE, 0xFF]);
}

// ── 2. Patching ──────────────────────────────────────────────────────────────

#[test]
fn patch_field_in_place() {
    let save = sample();
    let mut buf = write_save(&save);
    let len = buf.len();

    // rupees sits after magic, size, slot, "Link\0", BOM + 2 units + NUL, hearts.
    let rupees_at = 4 + 4 + 1 + 5 + 8 + 2;
    buf.set_endian(Endian::Big);
    buf.seek(rupees_at, SeekOrigin::Begin).unwrap();
    buf.write_u32(0).unwrap();
    assert_eq!(buf.len(), len);

    let mut expected = save;
    expected.rupees = 0;
    assert_eq!(read_save(&mut buf), expected);
}

#[test]
fn appending_after_seek_to_end_grows() {
    let mut buf = write_save(&sample());
    let len = buf.len();
    buf.seek(0, SeekOrigin::End).unwrap();
    buf.set_endian(Endian::Big);
    buf.write_u32(0xDEAD_BEEF).unwrap();
    assert_eq!(buf.len(), len + 4);
    assert_eq!(&buf.as_slice()[len..], &[0xDE, 0xAD, 0xBE, 0xEF]);
}

// ── 3. Through the filesystem ────────────────────────────────────────────────

#[test]
fn save_record_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zelda.sav");

    let save = sample();
    write_save(&save).save(&path).unwrap();

    let mut loaded = ByteBuffer::load(&path).unwrap();
    assert_eq!(read_save(&mut loaded), save);
}

#[test]
fn whole_file_can_be_compressed_and_restored() {
    let dir = TempDir::new().unwrap();
    let packed_path = dir.path().join("zelda.sav.lz");

    let raw = write_save(&sample()).into_inner();
    let packed = container::pack(Format::Lz77Extended, &raw).unwrap();
    ByteBuffer::from_vec(packed).save(&packed_path).unwrap();

    let loaded = ByteBuffer::load(&packed_path).unwrap();
    let (_, restored) = container::unpack(loaded.as_slice()).unwrap();
    let mut restored = ByteBuffer::from_vec(restored);
    assert_eq!(read_save(&mut restored), sample());
}
