use serde::{Deserialize, Serialize};

use crate::MosaicError;

/// Grid coordinate of one requested tile.
///
/// Queries are de-duplicated on structural equality, which matches equality
/// of their serialized keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    pub x: u32,
    pub y: u32,
}

impl Query {
    /// Canonical serialized key used on the wire and in manifests.
    pub fn key(&self) -> String {
        serde_json::to_string(self).expect("query serialization cannot fail")
    }
}

/// Parse a serialized query key back into a [`Query`].
pub fn decode_key(key: &str) -> Result<Query, MosaicError> {
    serde_json::from_str(key).map_err(|e| MosaicError::Query(format!("bad key {key:?}: {e}")))
}

/// Maps pixel positions on the navigation surface to grid queries.
#[derive(Debug, Clone)]
pub struct Layout {
    pub dim: u32,
    pub factor: u32,
    pub tile_dim: f64,
}

impl Layout {
    pub fn new(dim: u32, factor: u32) -> Layout {
        let tile_dim = dim as f64 / factor as f64;
        Layout { dim, factor, tile_dim }
    }

    /// Map a pointer position to the tile cell under it.
    ///
    /// Positions exactly on a cell boundary floor into the lower-indexed
    /// cell. Returns `None` when either index falls outside `[0, factor)`,
    /// including any negative input.
    pub fn query_at(&self, x: f64, y: f64) -> Option<Query> {
        let qx = (x / self.tile_dim).floor();
        let qy = (y / self.tile_dim).floor();
        if qx < 0.0 || qy < 0.0 || qx >= self.factor as f64 || qy >= self.factor as f64 {
            return None;
        }
        Some(Query { x: qx as u32, y: qy as u32 })
    }
}
