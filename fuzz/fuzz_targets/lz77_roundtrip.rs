#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the variant so both share one corpus.
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let extended = selector & 1 == 1;

    let packed = binstream::lz77_encode(payload, extended).expect("encode");
    let out = binstream::lz77_decode(&packed).expect("decode of fresh stream");
    assert_eq!(out, payload, "lz77 round-trip mismatch (extended={extended})");
});
