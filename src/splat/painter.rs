//! Blend painter: derives ground-cover weights from height and noise.
//!
//! Per cell:
//! - grass, moss and dirt take the value of their own noise field
//!   (floor 0, intensity from the matching amount parameter),
//! - stone is always 1 and acts as the base under everything else,
//! - sand covers low ground: full below `sand_height / 2` (where it also
//!   clears the vegetation layers), fading linearly to nothing at
//!   `sand_height`.

use serde::{Deserialize, Serialize};

use super::alpha::{AlphaGrid, LayerWeights};
use super::layer::{GroundLayer, LAYER_COUNT};
use crate::core::Result;
use crate::grid::{resize_bilinear, Grid, GridSize};
use crate::math::Remap;
use crate::terrain::{HeightGrid, NoiseField, TerrainParams};

/// One independent seed per noise-driven layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendSeeds {
    pub grass: u32,
    pub moss: u32,
    pub dirt: u32,
}

/// Paints alpha grids for a fixed set of parameters.
pub struct BlendPainter {
    params: TerrainParams,
    noise: NoiseField,
    /// `None` when `sand_height` is 0 and the fade band is empty.
    sand_fade: Option<Remap>,
}

impl BlendPainter {
    pub fn new(params: TerrainParams) -> Result<Self> {
        params.validate()?;
        let sand_fade = if params.sand_height > 0.0 {
            Some(Remap::new(params.sand_height * 0.5, params.sand_height, 0.0, 1.0)?)
        } else {
            None
        };
        Ok(Self {
            params,
            noise: NoiseField::new(),
            sand_fade,
        })
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Sand weight for a height value.
    pub fn sand_weight(&self, h: f32) -> f32 {
        let sand = self.params.sand_height;
        if h < sand * 0.5 {
            1.0
        } else if h < sand {
            match &self.sand_fade {
                Some(fade) => 1.0 - fade.apply(h),
                None => 0.0,
            }
        } else {
            0.0
        }
    }

    /// Weights for one cell given its height and vegetation noise samples.
    pub fn cell_weights(&self, h: f32, grass: f32, moss: f32, dirt: f32) -> LayerWeights {
        let mut w = [0.0; LAYER_COUNT];
        w[GroundLayer::Grass.index()] = grass;
        w[GroundLayer::Moss.index()] = moss;
        w[GroundLayer::Dirt.index()] = dirt;
        w[GroundLayer::Stone.index()] = 1.0;

        if h < self.params.sand_height * 0.5 {
            w[GroundLayer::Sand.index()] = 1.0;
            w[GroundLayer::Grass.index()] = 0.0;
            w[GroundLayer::Moss.index()] = 0.0;
            w[GroundLayer::Dirt.index()] = 0.0;
        } else {
            w[GroundLayer::Sand.index()] = self.sand_weight(h);
        }
        w
    }

    /// Paint a `size` alpha grid over `heights`.
    ///
    /// `heights` is bilinearly resampled to `size` first when the
    /// resolutions differ.
    pub fn paint(&self, heights: &HeightGrid, size: GridSize, seeds: BlendSeeds) -> Result<AlphaGrid> {
        size.validate()?;
        heights.size().validate()?;

        let heights = if heights.size() != size {
            log::debug!("Resampling heightfield {} -> {} for painting", heights.size(), size);
            resize_bilinear(heights, size)?
        } else {
            heights.clone()
        };

        let p = &self.params;
        let grass = self.noise.sample(size, &p.blend_noise(seeds.grass, p.grass_amount))?;
        let moss = self.noise.sample(size, &p.blend_noise(seeds.moss, p.effective_moss_amount()))?;
        let dirt = self.noise.sample(size, &p.blend_noise(seeds.dirt, p.dirt_amount))?;

        let alpha = Grid::from_fn(size, |x, y| {
            self.cell_weights(heights.get(x, y), grass.get(x, y), moss.get(x, y), dirt.get(x, y))
        });
        Ok(alpha)
    }
}

/// One-shot helper: validate `params` and paint a single alpha grid.
pub fn paint(
    heights: &HeightGrid,
    size: GridSize,
    params: &TerrainParams,
    seeds: BlendSeeds,
) -> Result<AlphaGrid> {
    BlendPainter::new(params.clone())?.paint(heights, size, seeds)
}
