//! Blend-weight grid: one weight per ground layer per cell.
//!
//! Weights are raw. The painter never normalizes them, so a cell can sum to
//! anything in [0, 5]; consumers that need a partition of unity call
//! [`AlphaGrid::normalized`] or do their own weighting.

use super::layer::{GroundLayer, LAYER_COUNT};
use crate::grid::Grid;

/// Per-cell layer weights, indexed by [`GroundLayer::index`].
pub type LayerWeights = [f32; LAYER_COUNT];

/// Blend weights for every cell.
pub type AlphaGrid = Grid<LayerWeights>;

impl Grid<LayerWeights> {
    /// Weight of `layer` at `(x, y)`.
    #[inline]
    pub fn weight(&self, x: usize, y: usize, layer: GroundLayer) -> f32 {
        self.get(x, y)[layer.index()]
    }

    /// Extract a single layer as a scalar grid.
    pub fn layer(&self, layer: GroundLayer) -> Grid<f32> {
        let i = layer.index();
        self.map(|w| w[i])
    }

    /// Copy with each cell scaled so its weights sum to 1.
    ///
    /// Cells whose weights sum to zero are left at zero.
    pub fn normalized(&self) -> AlphaGrid {
        self.map(|w| {
            let total: f32 = w.iter().sum();
            if total > 0.0 {
                w.map(|v| v / total)
            } else {
                w
            }
        })
    }
}
