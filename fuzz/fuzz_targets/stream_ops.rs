#![no_main]
use binstream::{ByteBuffer, Endian, SeekOrigin};
use libfuzzer_sys::fuzz_target;

// Interpret the input as a little program of stream operations.  No sequence
// may panic; growth is capped by keeping seek offsets small.
fuzz_target!(|data: &[u8]| {
    let mut buf = ByteBuffer::new();
    let mut ops = data.chunks_exact(2);
    for op in &mut ops {
        let (code, arg) = (op[0], op[1]);
        let _ = match code % 12 {
            0 => buf.write_bit(arg & 1 == 1),
            1 => buf.write_u8(arg),
            2 => buf.write_u32(u32::from(arg) * 0x0101_0101),
            3 => buf.write_f64(f64::from(arg)),
            4 => buf.write_string(if arg & 1 == 0 { "a\0b" } else { "xyz" }),
            5 => buf.write_unicode_string("\u{FEFF}ü"),
            6 => buf.read_bit().map(drop),
            7 => buf.read_u16().map(drop),
            8 => buf.read_string().map(drop),
            9 => buf.read_unicode_string().map(drop),
            10 => buf.seek(i64::from(arg as i8), SeekOrigin::Current),
            _ => {
                buf.set_endian(if arg & 1 == 0 { Endian::Big } else { Endian::Little });
                Ok(())
            }
        };
        assert!(buf.position() <= buf.len());
    }
});
