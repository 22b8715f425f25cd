//! Procedural heightfield generation

pub mod noise_field;
pub mod shoreline;
pub mod smoothing;
pub mod params;
pub mod generator;

pub use noise_field::{NoiseConfig, NoiseField};
pub use shoreline::ShorelineConfig;
pub use params::{MossIntensity, TerrainParams};
pub use generator::HeightfieldBuilder;

/// Heights in [0, 1], before any world-space scaling by the consumer.
pub type HeightGrid = crate::grid::Grid<f32>;
