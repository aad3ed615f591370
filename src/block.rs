//! Wire codec for image blocks.
//!
//! Every block on the wire carries a fixed 12-byte little-endian header
//! followed by an opaque payload:
//!
//! ```text
//! offset 0..3   : block_id        u32
//! offset 4..11  : content_length  u64
//! offset 12..   : content_length bytes of payload
//! ```

use crate::MosaicError;

/// Size of the encoded block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 12;

/// One decoded block of a larger image.
///
/// `block_id` is the block's position in the 0-indexed sequence
/// `0..nblocks` for its query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub block_id: u32,
    pub content: Vec<u8>,
}

/// Encode a block into its wire representation.
pub fn encode_block(block_id: u32, content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(BLOCK_HEADER_SIZE + content.len());
    out.extend_from_slice(&block_id.to_le_bytes());
    out.extend_from_slice(&(content.len() as u64).to_le_bytes());
    out.extend_from_slice(content);
    out
}

/// Decode a single block from the front of `raw`.
///
/// Fails with [`MosaicError::MalformedBlock`] when the buffer is shorter
/// than the declared header-plus-payload length, or when the declared
/// length does not fit in addressable memory. Trailing bytes beyond the
/// payload are ignored.
pub fn decode_block(raw: &[u8]) -> Result<Block, MosaicError> {
    if raw.len() < BLOCK_HEADER_SIZE {
        return Err(MosaicError::MalformedBlock(format!(
            "buffer of {} bytes is shorter than the {} byte header",
            raw.len(),
            BLOCK_HEADER_SIZE
        )));
    }
    let block_id = u32::from_le_bytes(raw[0..4].try_into().unwrap());
    let content_len = u64::from_le_bytes(raw[4..12].try_into().unwrap());
    let content_len: usize = content_len
        .try_into()
        .map_err(|_| MosaicError::MalformedBlock(format!("declared length {content_len} overflows usize")))?;
    let end = BLOCK_HEADER_SIZE
        .checked_add(content_len)
        .ok_or_else(|| MosaicError::MalformedBlock(format!("declared length {content_len} overflows usize")))?;
    if raw.len() < end {
        return Err(MosaicError::MalformedBlock(format!(
            "declared {} payload bytes but only {} remain",
            content_len,
            raw.len() - BLOCK_HEADER_SIZE
        )));
    }
    Ok(Block {
        block_id,
        content: raw[BLOCK_HEADER_SIZE..end].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_is_little_endian() {
        let raw = encode_block(0x01020304, b"ab");
        assert_eq!(&raw[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&raw[4..12], &[2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&raw[12..], b"ab");
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let mut raw = encode_block(7, b"xyz");
        raw.extend_from_slice(&[0xAA, 0xBB]);
        let block = decode_block(&raw).unwrap();
        assert_eq!(block.block_id, 7);
        assert_eq!(block.content, b"xyz");
    }

    #[test]
    fn short_header_fails() {
        let raw = encode_block(0, b"");
        assert!(decode_block(&raw[..11]).is_err());
        assert!(decode_block(&[]).is_err());
    }

    #[test]
    fn short_payload_fails() {
        let raw = encode_block(0, &[0u8; 16]);
        assert!(decode_block(&raw[..raw.len() - 1]).is_err());
    }

    #[test]
    fn oversized_declared_length_fails() {
        let mut raw = encode_block(0, b"");
        raw[4..12].copy_from_slice(&u64::MAX.to_le_bytes());
        assert!(matches!(decode_block(&raw), Err(MosaicError::MalformedBlock(_))));
    }
}
