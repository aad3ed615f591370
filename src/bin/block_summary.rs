use std::env;
use std::fs;

use mosaic::{decode_block, BLOCK_HEADER_SIZE};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <stream>", args[0]);
        return;
    }

    let data = match fs::read(&args[1]) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", args[1]);
            return;
        }
    };

    let mut offset = 0usize;
    let mut count = 0usize;
    while offset < data.len() {
        match decode_block(&data[offset..]) {
            Ok(block) => {
                let prefix = &block.content[..block.content.len().min(8)];
                println!(
                    "block {:>4}  offset {:>8}  len {:>8}  {}",
                    block.block_id,
                    offset,
                    block.content.len(),
                    hex::encode(prefix)
                );
                offset += BLOCK_HEADER_SIZE + block.content.len();
                count += 1;
            }
            Err(e) => {
                eprintln!("stopping at offset {offset}: {e}");
                break;
            }
        }
    }
    println!("{count} blocks, {offset} of {} bytes", data.len());
}
