//! Generation pipeline: heightfield, then blend weights, then hand-off.
//!
//! The pipeline orchestrates:
//! 1. Seed draws (heightfield, grass, moss, dirt, in that order)
//! 2. Heightfield synthesis (noise → shoreline falloff → smoothing)
//! 3. Blend painting at the alphamap resolution
//!
//! Each stage finishes completely before the next starts. No state survives
//! between calls; every `generate` builds fresh grids.

pub mod config;
pub mod seed;

pub use config::GenerationConfig;
pub use seed::{FixedSeed, SeedGenerator, SeedSource, SEED_RANGE};

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::grid::GridSize;
use crate::sink::{HeightPreview, TerrainSink};
use crate::splat::{AlphaGrid, BlendPainter, BlendSeeds};
use crate::terrain::{HeightGrid, HeightfieldBuilder, TerrainParams};

/// Seeds consumed by one generation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnSeeds {
    pub terrain: u32,
    pub blend: BlendSeeds,
}

impl DrawnSeeds {
    /// Draw all seeds for one run from `source`.
    pub fn draw(source: &mut impl SeedSource) -> Self {
        let terrain = source.next_seed();
        let grass = source.next_seed();
        let moss = source.next_seed();
        let dirt = source.next_seed();
        Self {
            terrain,
            blend: BlendSeeds { grass, moss, dirt },
        }
    }
}

/// Result of one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedTerrain {
    pub heights: HeightGrid,
    pub alpha: AlphaGrid,
    pub seeds: DrawnSeeds,
}

impl GeneratedTerrain {
    /// Push heights then blend weights into `sink`.
    pub fn deliver<S: TerrainSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        sink.set_heights(&self.heights)?;
        sink.set_blend_weights(&self.alpha)
    }

    /// Send a copy of the heights to a preview target.
    pub fn preview<P: HeightPreview + ?Sized>(&self, preview: &mut P) -> Result<()> {
        preview.preview_heights(&self.heights)
    }
}

/// Heightfield + blend generation for one validated parameter set.
pub struct GenerationPipeline {
    builder: HeightfieldBuilder,
    painter: BlendPainter,
}

impl GenerationPipeline {
    /// Create a new pipeline, rejecting invalid parameters.
    pub fn new(params: TerrainParams) -> Result<Self> {
        Ok(Self {
            builder: HeightfieldBuilder::new(params.clone())?,
            painter: BlendPainter::new(params)?,
        })
    }

    /// Create from a full configuration (also validates resolutions).
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.terrain_params.clone())
    }

    pub fn params(&self) -> &TerrainParams {
        self.builder.params()
    }

    /// Build a heightfield, drawing one seed from `seeds`.
    pub fn generate_heights(&self, size: GridSize, seeds: &mut impl SeedSource) -> Result<(HeightGrid, u32)> {
        let seed = seeds.next_seed();
        Ok((self.builder.build(size, seed)?, seed))
    }

    /// Paint blend weights over existing heights, drawing three seeds.
    pub fn paint(
        &self,
        heights: &HeightGrid,
        size: GridSize,
        seeds: &mut impl SeedSource,
    ) -> Result<(AlphaGrid, BlendSeeds)> {
        let blend = BlendSeeds {
            grass: seeds.next_seed(),
            moss: seeds.next_seed(),
            dirt: seeds.next_seed(),
        };
        Ok((self.painter.paint(heights, size, blend)?, blend))
    }

    /// Full run: heightfield at `heightmap_size`, blend grid at `alphamap_size`.
    pub fn generate(
        &self,
        heightmap_size: GridSize,
        alphamap_size: GridSize,
        seeds: &mut impl SeedSource,
    ) -> Result<GeneratedTerrain> {
        self.generate_with_seeds(heightmap_size, alphamap_size, DrawnSeeds::draw(seeds))
    }

    /// Full run with explicit seeds (replays a previous run exactly).
    pub fn generate_with_seeds(
        &self,
        heightmap_size: GridSize,
        alphamap_size: GridSize,
        seeds: DrawnSeeds,
    ) -> Result<GeneratedTerrain> {
        heightmap_size.validate()?;
        alphamap_size.validate()?;

        log::info!(
            "Generating terrain: heightmap {}, alphamap {}, seeds {:?}",
            heightmap_size, alphamap_size, seeds
        );

        let start = std::time::Instant::now();
        let heights = self.builder.build(heightmap_size, seeds.terrain)?;
        let height_time = start.elapsed();

        let alpha = self.painter.paint(&heights, alphamap_size, seeds.blend)?;
        let total = start.elapsed();

        log::info!(
            "Generated terrain in {:.1}ms (heights {:.1}ms, blend {:.1}ms)",
            total.as_secs_f64() * 1000.0,
            height_time.as_secs_f64() * 1000.0,
            (total - height_time).as_secs_f64() * 1000.0
        );

        Ok(GeneratedTerrain { heights, alpha, seeds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::splat::GroundLayer;

    fn scenario_params() -> TerrainParams {
        TerrainParams {
            shore_depth: 25,
            min_terrain_height: 0.1,
            max_terrain_height: 0.3,
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_fixed_seed_reproducible() {
        let pipeline = GenerationPipeline::new(scenario_params()).unwrap();
        let size = GridSize::square(8).unwrap();
        let a = pipeline.generate(size, size, &mut FixedSeed(0)).unwrap();
        let b = pipeline.generate(size, size, &mut FixedSeed(0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seeds.terrain, 0);
        assert_eq!(a.seeds.blend, BlendSeeds { grass: 1, moss: 2, dirt: 3 });
    }

    #[test]
    fn test_scenario_grass_and_moss_differ() {
        // Moss shares the grass amount by default; only the seed separates them.
        let pipeline = GenerationPipeline::new(scenario_params()).unwrap();
        let size = GridSize::square(8).unwrap();
        let terrain = pipeline.generate(size, size, &mut FixedSeed(0)).unwrap();
        assert_ne!(terrain.alpha.layer(GroundLayer::Grass), terrain.alpha.layer(GroundLayer::Moss));
    }

    #[test]
    fn test_seed_generator_reproducible() {
        let pipeline = GenerationPipeline::new(scenario_params()).unwrap();
        let size = GridSize::square(16).unwrap();
        let a = pipeline.generate(size, size, &mut SeedGenerator::from_seed_u64(7)).unwrap();
        let b = pipeline.generate(size, size, &mut SeedGenerator::from_seed_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_order() {
        struct Counter(u32);
        impl SeedSource for Counter {
            fn next_seed(&mut self) -> u32 {
                self.0 += 1;
                self.0
            }
        }
        let seeds = DrawnSeeds::draw(&mut Counter(0));
        assert_eq!(seeds.terrain, 1);
        assert_eq!(seeds.blend, BlendSeeds { grass: 2, moss: 3, dirt: 4 });
    }

    #[test]
    fn test_replay_with_drawn_seeds() {
        let pipeline = GenerationPipeline::new(scenario_params()).unwrap();
        let hm = GridSize::square(17).unwrap();
        let am = GridSize::square(16).unwrap();
        let first = pipeline.generate(hm, am, &mut SeedGenerator::from_seed_u64(123)).unwrap();
        let replay = pipeline.generate_with_seeds(hm, am, first.seeds).unwrap();
        assert_eq!(first, replay);
    }

    #[test]
    fn test_generate_output_sizes() {
        let pipeline = GenerationPipeline::new(scenario_params()).unwrap();
        let hm = GridSize::new(33, 21).unwrap();
        let am = GridSize::new(16, 10).unwrap();
        let terrain = pipeline.generate(hm, am, &mut FixedSeed(3)).unwrap();
        assert_eq!(terrain.heights.size(), hm);
        assert_eq!(terrain.alpha.size(), am);
    }

    #[test]
    fn test_shore_cells_are_sand() {
        // Falloff drives the border to 0, which is always below the sand threshold.
        let pipeline = GenerationPipeline::new(scenario_params()).unwrap();
        let size = GridSize::square(8).unwrap();
        let terrain = pipeline.generate(size, size, &mut FixedSeed(0)).unwrap();
        assert_eq!(terrain.alpha.get(0, 0), [1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(terrain.alpha.weight(0, 5, GroundLayer::Sand), 1.0);
    }

    #[test]
    fn test_separate_entry_points_match_full_run() {
        let pipeline = GenerationPipeline::new(scenario_params()).unwrap();
        let size = GridSize::square(12).unwrap();
        let mut seeds = SeedGenerator::from_seed_u64(55);
        let (heights, terrain_seed) = pipeline.generate_heights(size, &mut seeds).unwrap();
        let (alpha, blend) = pipeline.paint(&heights, size, &mut seeds).unwrap();

        let full = pipeline.generate(size, size, &mut SeedGenerator::from_seed_u64(55)).unwrap();
        assert_eq!(full.seeds, DrawnSeeds { terrain: terrain_seed, blend });
        assert_eq!(full.heights, heights);
        assert_eq!(full.alpha, alpha);
    }

    #[test]
    fn test_deliver_to_memory_sink() {
        let pipeline = GenerationPipeline::new(scenario_params()).unwrap();
        let hm = GridSize::square(9).unwrap();
        let am = GridSize::square(8).unwrap();
        let terrain = pipeline.generate(hm, am, &mut FixedSeed(1)).unwrap();

        let mut sink = MemorySink::new(hm, am).unwrap();
        terrain.deliver(&mut sink).unwrap();
        assert_eq!(sink.heights(), Some(&terrain.heights));
        assert_eq!(sink.alpha(), Some(&terrain.alpha));
    }

    #[test]
    fn test_generate_rejects_zero_size() {
        let pipeline = GenerationPipeline::new(TerrainParams::default()).unwrap();
        let bad = GridSize { width: 0, height: 8 };
        let good = GridSize::square(8).unwrap();
        assert!(pipeline.generate(bad, good, &mut FixedSeed(0)).is_err());
        assert!(pipeline.generate(good, bad, &mut FixedSeed(0)).is_err());
    }
}
