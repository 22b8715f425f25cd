//! Heightfield synthesis: noise, shoreline falloff, then smoothing.

use super::noise_field::NoiseField;
use super::params::TerrainParams;
use super::{shoreline, smoothing, HeightGrid};
use crate::core::Result;
use crate::grid::GridSize;

/// Builds heightfields from a fixed set of parameters.
pub struct HeightfieldBuilder {
    params: TerrainParams,
    noise: NoiseField,
}

impl HeightfieldBuilder {
    /// Create a builder, validating `params` up front.
    pub fn new(params: TerrainParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            noise: NoiseField::new(),
        })
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Build a `size` heightfield for `seed`.
    ///
    /// Stages run strictly in order: noise (floored at `min_terrain_height`,
    /// scaled by `max_terrain_height`), shore falloff, smoothing. The result
    /// always has the requested dimensions.
    pub fn build(&self, size: GridSize, seed: u32) -> Result<HeightGrid> {
        let mut heights = self.noise.sample(size, &self.params.height_noise(seed))?;
        shoreline::apply(&mut heights, &self.params.shoreline())?;
        let heights = smoothing::smooth(&heights, self.params.terrain_sharpness)?;

        if let Some((lo, hi)) = heights.min_max() {
            log::debug!("Heightfield {} seed {}: range [{:.3}, {:.3}]", size, seed, lo, hi);
        }
        Ok(heights)
    }
}

/// One-shot helper: validate `params` and build a single heightfield.
pub fn build(size: GridSize, params: &TerrainParams, seed: u32) -> Result<HeightGrid> {
    HeightfieldBuilder::new(params.clone())?.build(size, seed)
}
