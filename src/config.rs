use serde::{Deserialize, Serialize};

use crate::MosaicError;

/// Runtime configuration for the gallery viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the tile database served by the engine.
    pub dbname: String,
    /// Grid subdivisions per axis on the navigation surface.
    pub factor: u32,
    /// Side length of the square navigation surface in pixels.
    pub tile_dimension: u32,
    /// Side length of the large display viewport in pixels.
    pub image_holder_dimension: u32,
    /// Base path for static assets handed to the rendering layer.
    pub path: String,
    /// Engine-side cache size forwarded in the handshake state.
    pub cachesize: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dbname: "db_default_f10".to_string(),
            factor: 10,
            tile_dimension: 600,
            image_holder_dimension: 800,
            path: "static/data/".to_string(),
            cachesize: 10_000,
        }
    }
}

impl Config {
    /// Reject values the layout arithmetic cannot work with.
    pub fn validate(&self) -> Result<(), MosaicError> {
        if self.factor == 0 {
            return Err(MosaicError::Config("factor must be non-zero".into()));
        }
        if self.tile_dimension == 0 {
            return Err(MosaicError::Config("tile_dimension must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_factor_is_rejected() {
        let config = Config { factor: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(MosaicError::Config(_))));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let config = Config { tile_dimension: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }
}
