use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let set = mosaic::scan_stream(data);
            let expected = set.size();
            let out = mosaic::assemble(&set, expected);
            // Assembly is total and its count is bounded both ways.
            assert!(out.assembled_count <= expected);
            assert!(out.assembled_count <= set.populated());
        });
    }
}
