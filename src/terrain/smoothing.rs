//! Low-pass smoothing by shrinking a grid and scaling it back up.

use crate::core::{Error, Result};
use crate::grid::{resize_bilinear, Grid, GridSize};

/// Check that `sharpness` lies in (0, 1].
pub fn validate_sharpness(sharpness: f32) -> Result<()> {
    if !(sharpness > 0.0 && sharpness <= 1.0) {
        return Err(Error::invalid(format!(
            "terrain sharpness must be within (0, 1] (got {sharpness})"
        )));
    }
    Ok(())
}

/// Intermediate size used when smoothing a grid of `size` at `sharpness`.
///
/// Each axis is truncated to `len * sharpness` and kept at least one cell.
pub fn reduced_size(size: GridSize, sharpness: f32) -> GridSize {
    let shrink = |len: usize| ((len as f32 * sharpness) as usize).max(1);
    GridSize {
        width: shrink(size.width),
        height: shrink(size.height),
    }
}

/// Blur `grid` by resizing it down by `sharpness` and back up.
///
/// `sharpness == 1` returns the grid unchanged. Anything lower discards
/// detail that the upsample cannot recover, and smoothing an already
/// smoothed grid blurs it further.
pub fn smooth(grid: &Grid<f32>, sharpness: f32) -> Result<Grid<f32>> {
    validate_sharpness(sharpness)?;
    if sharpness >= 1.0 {
        return Ok(grid.clone());
    }

    let reduced = reduced_size(grid.size(), sharpness);
    log::debug!("Smoothing {} via {} (sharpness {})", grid.size(), reduced, sharpness);

    let small = resize_bilinear(grid, reduced)?;
    resize_bilinear(&small, grid.size())
}
