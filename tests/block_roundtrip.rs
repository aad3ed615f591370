use mosaic::{decode_block, encode_block, BLOCK_HEADER_SIZE};
use proptest::prelude::*;

#[test]
fn roundtrip_fixed_payload_sizes() {
    for len in [0usize, 1, 4096] {
        let payload: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let raw = encode_block(42, &payload);
        assert_eq!(raw.len(), BLOCK_HEADER_SIZE + len);
        let block = decode_block(&raw).unwrap();
        assert_eq!(block.block_id, 42);
        assert_eq!(block.content, payload);
    }
}

#[test]
fn roundtrip_extreme_block_ids() {
    for id in [0u32, 1, u32::MAX] {
        let block = decode_block(&encode_block(id, b"x")).unwrap();
        assert_eq!(block.block_id, id);
    }
}

proptest! {
    #[test]
    fn roundtrip_random(id in any::<u32>(), payload in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let block = decode_block(&encode_block(id, &payload)).unwrap();
        prop_assert_eq!(block.block_id, id);
        prop_assert_eq!(block.content, payload);
    }
}
