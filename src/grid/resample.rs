//! Bilinear grid resizing.
//!
//! Sample positions are corner-aligned: the first and last rows/columns of
//! the destination land exactly on the first and last rows/columns of the
//! source, so resizing to the same size reproduces the input bit-for-bit.

use super::{Grid, GridSize};
use crate::core::Result;

/// Resize `src` to `size` with bilinear interpolation.
///
/// Both the source and the target must have a non-zero area.
pub fn resize_bilinear(src: &Grid<f32>, size: GridSize) -> Result<Grid<f32>> {
    src.size().validate()?;
    size.validate()?;
    if src.size() == size {
        return Ok(src.clone());
    }

    let ratio_x = axis_ratio(src.width(), size.width);
    let ratio_y = axis_ratio(src.height(), size.height);
    let max_x = src.width() - 1;
    let max_y = src.height() - 1;

    Ok(Grid::from_fn(size, |x, y| {
        let sx = x as f32 * ratio_x;
        let sy = y as f32 * ratio_y;

        let x0 = (sx.floor() as usize).min(max_x);
        let y0 = (sy.floor() as usize).min(max_y);
        let x1 = (x0 + 1).min(max_x);
        let y1 = (y0 + 1).min(max_y);

        let fx = sx - x0 as f32;
        let fy = sy - y0 as f32;

        let v00 = src.get(x0, y0);
        let v10 = src.get(x1, y0);
        let v01 = src.get(x0, y1);
        let v11 = src.get(x1, y1);

        let v0 = v00 + (v10 - v00) * fx;
        let v1 = v01 + (v11 - v01) * fx;
        v0 + (v1 - v0) * fy
    }))
}

/// Source cells advanced per destination cell along one axis.
fn axis_ratio(src_len: usize, dst_len: usize) -> f32 {
    if dst_len <= 1 || src_len <= 1 {
        0.0
    } else {
        (src_len - 1) as f32 / (dst_len - 1) as f32
    }
}
