#![cfg(any(feature = "zlib", feature = "zlib-static", feature = "zlib-ng"))]

use proptest::prelude::*;
use proptest::collection::vec;

use scarlet_zlib::{Interface, StatusKind};

proptest! {
    #[test]
    fn roundtrip_with_sufficient_capacity(data in vec(any::<u8>(), 0..8192), level in 0i32..=9) {
        let engine = Interface::system();
        let mut output = vec![0; engine.compress_bound(data.len())];
        let result = engine.compress(&data, &mut output, level);
        prop_assert_eq!(result.status.kind(), StatusKind::Success);

        let decompressed = miniz_oxide::inflate::decompress_to_vec_zlib(&output[..result.written]).expect("valid zlib stream");
        prop_assert_eq!(decompressed, data);
    }

    #[test]
    fn never_exceeds_capacity(data in vec(any::<u8>(), 0..2048), capacity in 0usize..2100, level in 0i32..=9) {
        const SENTINEL: u8 = 0x5A;
        let engine = Interface::system();
        let mut output = vec![SENTINEL; capacity + 32];
        let result = engine.compress(&data, &mut output[..capacity], level);

        prop_assert!(result.written <= capacity);
        prop_assert!(output[capacity..].iter().all(|byte| *byte == SENTINEL));
        match result.status.kind() {
            StatusKind::Success => {
                let decompressed = miniz_oxide::inflate::decompress_to_vec_zlib(&output[..result.written]).expect("valid zlib stream");
                prop_assert_eq!(decompressed, data);
            },
            kind => {
                prop_assert_eq!(kind, StatusKind::InsufficientCapacity);
                prop_assert_eq!(result.written, 0);
            }
        }
    }
}
