//! Coherent noise fields sampled over a grid.
//!
//! A field is Perlin noise evaluated at `(seed + x) / width * scale`,
//! `(seed + y) / height * scale`, remapped to [0, 1], multiplied by an
//! intensity and clamped below by a floor. The seed shifts the sampling
//! window rather than reseeding the permutation table, so two fields with
//! the same seed and scale are identical.

use noise::{NoiseFn, Perlin};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::grid::{Grid, GridSize};

/// Fixed permutation table; per-draw variation comes from `NoiseConfig::seed`.
const PERMUTATION_SEED: u32 = 0;

/// Parameters for a single noise field draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Noise frequency across the whole grid (larger = busier).
    pub scale: f32,
    /// Offset added to cell coordinates before scaling.
    pub seed: u32,
    /// Lower clamp applied after intensity scaling.
    pub floor: f32,
    /// Multiplier on the [0, 1] noise value.
    pub intensity: f32,
}

impl NoiseConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::invalid(format!(
                "noise scale must be a positive finite number (got {})",
                self.scale
            )));
        }
        if !self.floor.is_finite() || !self.intensity.is_finite() {
            return Err(Error::invalid(format!(
                "noise floor/intensity must be finite (got {} / {})",
                self.floor, self.intensity
            )));
        }
        Ok(())
    }

    /// Largest value this config can produce.
    pub fn upper_bound(&self) -> f32 {
        self.floor.max(self.intensity)
    }
}

/// 2D gradient noise sampler producing values in [0, 1].
#[derive(Clone, Copy, Debug)]
pub struct NoiseField {
    perlin: Perlin,
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseField {
    pub fn new() -> Self {
        Self {
            perlin: Perlin::new(PERMUTATION_SEED),
        }
    }

    /// Raw noise at a point, mapped from [-1, 1] to [0, 1].
    #[inline]
    pub fn value_at(&self, x: f64, y: f64) -> f32 {
        let v = self.perlin.get([x, y]);
        (((v + 1.0) * 0.5) as f32).clamp(0.0, 1.0)
    }

    /// Sample a full grid. Rows are filled in parallel; the result does not
    /// depend on scheduling.
    pub fn sample(&self, size: GridSize, config: &NoiseConfig) -> Result<Grid<f32>> {
        size.validate()?;
        config.validate()?;

        let width = size.width as f64;
        let height = size.height as f64;
        let seed = config.seed as f64;
        let scale = config.scale as f64;

        let mut grid = Grid::new(size, 0.0_f32);
        grid.as_mut_slice()
            .par_chunks_mut(size.width)
            .enumerate()
            .for_each(|(y, row)| {
                let ny = (seed + y as f64) / height * scale;
                for (x, cell) in row.iter_mut().enumerate() {
                    let nx = (seed + x as f64) / width * scale;
                    *cell = config.floor.max(self.value_at(nx, ny) * config.intensity);
                }
            });

        Ok(grid)
    }
}

/// Sample a noise field with the default sampler.
pub fn sample(size: GridSize, config: &NoiseConfig) -> Result<Grid<f32>> {
    NoiseField::new().sample(size, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u32) -> NoiseConfig {
        NoiseConfig {
            scale: 10.0,
            seed,
            floor: 0.1,
            intensity: 0.3,
        }
    }

    #[test]
    fn test_noise_value_range() {
        let field = NoiseField::new();
        for i in 0..200 {
            let v = field.value_at(i as f64 * 0.37, i as f64 * 0.91);
            assert!((0.0..=1.0).contains(&v), "noise {} out of range", v);
        }
    }

    #[test]
    fn test_sample_respects_floor_and_ceiling() {
        let size = GridSize::new(32, 24).unwrap();
        let cfg = config(1234);
        let grid = sample(size, &cfg).unwrap();
        for (x, y, v) in grid.cells() {
            assert!(v >= cfg.floor, "({x}, {y}) = {v} below floor");
            assert!(v <= cfg.upper_bound(), "({x}, {y}) = {v} above ceiling");
        }
    }

    #[test]
    fn test_sample_deterministic() {
        let size = GridSize::new(16, 16).unwrap();
        let a = sample(size, &config(42)).unwrap();
        let b = sample(size, &config(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_seed_shifts_field() {
        let size = GridSize::new(16, 16).unwrap();
        let cfg = NoiseConfig { floor: 0.0, intensity: 1.0, ..config(0) };
        let a = sample(size, &cfg).unwrap();
        let b = sample(size, &NoiseConfig { seed: 777, ..cfg }).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sample_seed_is_coordinate_offset() {
        // seed s at cell x samples the same point as seed 0 at cell x + s
        // when the grid width is unchanged.
        let size = GridSize::new(8, 8).unwrap();
        let cfg = NoiseConfig { scale: 3.0, seed: 0, floor: 0.0, intensity: 1.0 };
        let base = sample(size, &cfg).unwrap();
        let shifted = sample(size, &NoiseConfig { seed: 1, ..cfg }).unwrap();
        for y in 0..7 {
            for x in 0..7 {
                assert!((shifted.get(x, y) - base.get(x + 1, y + 1)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_sample_zero_intensity_is_floor() {
        let size = GridSize::new(4, 4).unwrap();
        let cfg = NoiseConfig { intensity: 0.0, ..config(5) };
        let grid = sample(size, &cfg).unwrap();
        assert!(grid.as_slice().iter().all(|v| *v == cfg.floor));
    }

    #[test]
    fn test_sample_rejects_bad_scale() {
        let size = GridSize::new(4, 4).unwrap();
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = sample(size, &NoiseConfig { scale, ..config(0) }).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_sample_rejects_zero_size() {
        let size = GridSize { width: 0, height: 4 };
        assert!(sample(size, &config(0)).is_err());
    }
}
