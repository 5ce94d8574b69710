#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let packed = binstream::yaz0_encode(data);

    let mut out = vec![0u8; data.len()];
    let n = binstream::yaz0_decode(&packed, &mut out, data.len())
        .expect("decoding freshly encoded Yaz0 must succeed");

    assert_eq!(n, data.len());
    assert_eq!(out, data, "yaz0 round-trip mismatch ({} packed bytes)", packed.len());
});
