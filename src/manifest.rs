use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use crate::query::Query;
use crate::MosaicError;

/// Index of a packed tile database: grid shape plus the expected block
/// count for every query key the packer produced.
///
/// Written by `tile_pack`, consumed by `tile_unpack` and by engine-side
/// tooling that needs `nblocks` without scanning the streams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileManifest {
    pub factor: u32,
    pub tile_dimension: u32,
    blocks: BTreeMap<String, usize>,
}

impl TileManifest {
    pub fn new(factor: u32, tile_dimension: u32) -> Self {
        Self { factor, tile_dimension, blocks: BTreeMap::new() }
    }

    pub fn set_block_count(&mut self, query: Query, nblocks: usize) {
        self.blocks.insert(query.key(), nblocks);
    }

    pub fn block_count(&self, query: Query) -> Option<usize> {
        self.block_count_for_key(&query.key())
    }

    pub fn block_count_for_key(&self, key: &str) -> Option<usize> {
        self.blocks.get(key).copied()
    }

    pub fn queries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.blocks.iter().map(|(k, &n)| (k.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Load a manifest from disk using memory mapping.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MosaicError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        bincode::deserialize(&mmap)
            .map_err(|e| MosaicError::Manifest(format!("invalid manifest: {e}")))
    }

    /// Serialize this manifest to disk with bincode.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MosaicError> {
        let data = bincode::serialize(self)
            .map_err(|e| MosaicError::Manifest(format!("serialize manifest: {e}")))?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
