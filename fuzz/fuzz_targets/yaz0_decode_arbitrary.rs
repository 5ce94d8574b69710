#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary input must never panic or write outside `dst`; errors are fine.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let size = usize::from(u16::from_le_bytes([data[0], data[1]]));
    let mut dst = vec![0u8; size];
    let _ = binstream::yaz0_decode(&data[2..], &mut dst, size);

    // The container path sizes its own output from the header.
    let _ = binstream::container::unpack(data);
});
