//! Generation configuration loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::grid::GridSize;
use crate::terrain::TerrainParams;

/// Everything needed for one generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed for the seed stream. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Heightfield resolution.
    pub heightmap_size: GridSize,
    /// Blend-weight (splat) resolution.
    pub alphamap_size: GridSize,
    /// Terrain and ground-cover parameters.
    pub terrain_params: TerrainParams,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            heightmap_size: GridSize { width: 513, height: 513 },
            alphamap_size: GridSize { width: 512, height: 512 },
            terrain_params: TerrainParams::default(),
        }
    }
}

impl GenerationConfig {
    /// Create from terrain params with default resolutions.
    pub fn from_terrain(seed: Option<u64>, terrain_params: TerrainParams) -> Self {
        Self {
            seed,
            terrain_params,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.heightmap_size.validate()?;
        self.alphamap_size.validate()?;
        self.terrain_params.validate()
    }

    /// Read and validate a JSON config. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded generation config from {}", path.display());
        Ok(config)
    }

    /// Write as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
