//! Hand-off of generated grids to a terrain data store.
//!
//! The generator never talks to a renderer or scene graph. It pushes the
//! finished height grid and blend grid through [`TerrainSink`]; a sink may
//! be an engine terrain object, an in-memory store, or files on disk.

pub mod png;

pub use png::PngSink;

use crate::core::{Error, Result};
use crate::grid::{resize_bilinear, GridSize};
use crate::splat::AlphaGrid;
use crate::terrain::HeightGrid;

/// Receives generated terrain data.
pub trait TerrainSink {
    /// Store a height grid (values in [0, 1]).
    fn set_heights(&mut self, heights: &HeightGrid) -> Result<()>;

    /// Store raw, unnormalized blend weights.
    fn set_blend_weights(&mut self, alpha: &AlphaGrid) -> Result<()>;
}

/// Optional visualization target for a height grid.
pub trait HeightPreview {
    /// Receive a pixel-for-pixel copy of `heights`.
    fn preview_heights(&mut self, heights: &HeightGrid) -> Result<()>;
}

/// Resize `heights` to a sink's native resolution if it differs.
pub fn fit_heights(heights: &HeightGrid, size: GridSize) -> Result<HeightGrid> {
    if heights.size() == size {
        Ok(heights.clone())
    } else {
        log::debug!("Fitting heightfield {} to sink resolution {}", heights.size(), size);
        resize_bilinear(heights, size)
    }
}

/// In-memory terrain store with fixed resolutions, like an engine terrain.
///
/// Heights are resized to the store's heightmap resolution on arrival;
/// blend weights must already match the alphamap resolution.
#[derive(Clone, Debug)]
pub struct MemorySink {
    heightmap_size: GridSize,
    alphamap_size: GridSize,
    heights: Option<HeightGrid>,
    alpha: Option<AlphaGrid>,
}

impl MemorySink {
    pub fn new(heightmap_size: GridSize, alphamap_size: GridSize) -> Result<Self> {
        heightmap_size.validate()?;
        alphamap_size.validate()?;
        Ok(Self {
            heightmap_size,
            alphamap_size,
            heights: None,
            alpha: None,
        })
    }

    pub fn heightmap_size(&self) -> GridSize {
        self.heightmap_size
    }

    pub fn alphamap_size(&self) -> GridSize {
        self.alphamap_size
    }

    pub fn heights(&self) -> Option<&HeightGrid> {
        self.heights.as_ref()
    }

    pub fn alpha(&self) -> Option<&AlphaGrid> {
        self.alpha.as_ref()
    }
}

impl TerrainSink for MemorySink {
    fn set_heights(&mut self, heights: &HeightGrid) -> Result<()> {
        self.heights = Some(fit_heights(heights, self.heightmap_size)?);
        Ok(())
    }

    fn set_blend_weights(&mut self, alpha: &AlphaGrid) -> Result<()> {
        if alpha.size() != self.alphamap_size {
            return Err(Error::Sink(format!(
                "blend grid is {}, terrain alphamap is {}",
                alpha.size(),
                self.alphamap_size
            )));
        }
        self.alpha = Some(alpha.clone());
        Ok(())
    }
}
