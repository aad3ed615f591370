use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            // Arbitrary bytes must either decode or fail cleanly.
            if let Ok(block) = mosaic::decode_block(data) {
                assert!(data.len() >= mosaic::BLOCK_HEADER_SIZE + block.content.len());
            }
        });
    }
}
