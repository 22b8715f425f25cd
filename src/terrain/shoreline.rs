//! Shoreline falloff: taper a heightfield toward zero along its borders.
//!
//! Each edge gets a band `dimension * depth_percent / 100` cells wide. Inside
//! the band heights are multiplied by a linear ramp that is 0 at the border
//! and reaches 1 at the inner edge of the band. Ramps from different edges
//! multiply, so corners sink fastest.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::grid::Grid;
use crate::math::remap;

/// Width of the shore band as a percentage of each grid dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShorelineConfig {
    pub depth_percent: u8,
}

impl ShorelineConfig {
    pub fn new(depth_percent: u8) -> Result<Self> {
        let config = Self { depth_percent };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth_percent > 100 {
            return Err(Error::invalid(format!(
                "shore depth must be within 0..=100 percent (got {})",
                self.depth_percent
            )));
        }
        Ok(())
    }

    /// Band width in (fractional) cells for an axis of `len` cells.
    pub fn band_width(&self, len: usize) -> f32 {
        len as f32 * self.depth_percent as f32 / 100.0
    }
}

/// Attenuation factor for position `i` on an axis of `len` cells with a
/// shore band `band` cells wide.
fn axis_factor(i: usize, len: usize, band: f32) -> f32 {
    let pos = i as f32;
    let len = len as f32;
    let mut factor = 1.0;
    if pos < band {
        factor *= remap(pos, 0.0, band, 0.0, 1.0);
    }
    if pos > len - band {
        factor *= remap(pos, len - band, len, 1.0, 0.0);
    }
    factor
}

/// Apply the shore ramp to `grid` in place.
pub fn apply(grid: &mut Grid<f32>, config: &ShorelineConfig) -> Result<()> {
    config.validate()?;
    grid.size().validate()?;
    if config.depth_percent == 0 {
        return Ok(());
    }

    let width = grid.width();
    let height = grid.height();
    let band_x = config.band_width(width);
    let band_y = config.band_width(height);

    // Separable: precompute one factor per column and per row.
    let col_factors: Vec<f32> = (0..width).map(|x| axis_factor(x, width, band_x)).collect();
    let row_factors: Vec<f32> = (0..height).map(|y| axis_factor(y, height, band_y)).collect();

    for (y, row) in grid.as_mut_slice().chunks_exact_mut(width).enumerate() {
        let fy = row_factors[y];
        for (cell, fx) in row.iter_mut().zip(&col_factors) {
            if *fx != 1.0 {
                *cell *= fx;
            }
            if fy != 1.0 {
                *cell *= fy;
            }
        }
    }
    Ok(())
}

/// Return a new grid with the shore ramp applied.
pub fn attenuate(grid: &Grid<f32>, config: &ShorelineConfig) -> Result<Grid<f32>> {
    let mut out = grid.clone();
    apply(&mut out, config)?;
    Ok(out)
}
