// Property tests for both codecs.
//
// Two properties per codec:
//   - decode(encode(x)) == x for arbitrary and for highly repetitive input
//   - decoding arbitrary bytes returns Ok or Err, never panics

use binstream::{lz77_decode, lz77_encode, yaz0_decode, yaz0_encode};
use proptest::prelude::*;

/// Short alphabet so the match finder has something to find.
fn repetitive() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', 0u8]), 0..4096)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn yaz0_round_trip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let packed = yaz0_encode(&data);
        let mut out = vec![0u8; data.len()];
        prop_assert_eq!(yaz0_decode(&packed, &mut out, data.len()).unwrap(), data.len());
        prop_assert_eq!(out, data);
    }

    #[test]
    fn yaz0_round_trip_repetitive(data in repetitive()) {
        let packed = yaz0_encode(&data);
        let mut out = vec![0u8; data.len()];
        yaz0_decode(&packed, &mut out, data.len()).unwrap();
        prop_assert_eq!(out, data);
    }

    #[test]
    fn lz77_round_trip(data in prop::collection::vec(any::<u8>(), 0..4096), extended in any::<bool>()) {
        let packed = lz77_encode(&data, extended).unwrap();
        prop_assert_eq!(lz77_decode(&packed).unwrap(), data);
    }

    #[test]
    fn lz77_round_trip_repetitive(data in repetitive(), extended in any::<bool>()) {
        let packed = lz77_encode(&data, extended).unwrap();
        prop_assert_eq!(lz77_decode(&packed).unwrap(), data);
    }

    #[test]
    fn yaz0_decode_arbitrary_never_panics(
        src in prop::collection::vec(any::<u8>(), 0..512),
        size in 0usize..2048,
    ) {
        let mut out = vec![0u8; size];
        let _ = yaz0_decode(&src, &mut out, size);
    }

    #[test]
    fn lz77_decode_arbitrary_never_panics(src in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = lz77_decode(&src);
    }
}
