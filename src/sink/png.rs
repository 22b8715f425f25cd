//! PNG export of generated terrain.
//!
//! Output structure:
//!   <dir>/
//!     heightmap.png          # 16-bit grayscale heights
//!     heightmap_preview.png  # 8-bit preview (only when requested)
//!     splat_sand.png         # one 8-bit grayscale image per ground layer
//!     splat_grass.png
//!     ...
//!     manifest.json          # seeds, resolutions, parameters, file list

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageBuffer, Luma};
use serde::Serialize;

use super::{HeightPreview, TerrainSink};
use crate::core::{Error, Result};
use crate::generation::{DrawnSeeds, GeneratedTerrain};
use crate::grid::{Grid, GridSize};
use crate::splat::{AlphaGrid, GroundLayer};
use crate::terrain::{HeightGrid, TerrainParams};

pub const HEIGHTMAP_FILE: &str = "heightmap.png";
pub const PREVIEW_FILE: &str = "heightmap_preview.png";
pub const MANIFEST_FILE: &str = "manifest.json";
const MANIFEST_VERSION: u32 = 1;

/// File name for a splat layer image.
pub fn layer_file(layer: GroundLayer) -> String {
    format!("splat_{}.png", layer.name())
}

fn image_dims(size: GridSize) -> Result<(u32, u32)> {
    let w = u32::try_from(size.width).map_err(|_| Error::Sink(format!("grid {size} too wide for PNG")))?;
    let h = u32::try_from(size.height).map_err(|_| Error::Sink(format!("grid {size} too tall for PNG")))?;
    Ok((w, h))
}

/// 8-bit grayscale copy of a [0, 1] grid, one pixel per cell.
pub fn grid_to_gray8(grid: &Grid<f32>) -> Result<GrayImage> {
    let (w, h) = image_dims(grid.size())?;
    Ok(ImageBuffer::from_fn(w, h, |x, y| {
        let v = grid.get(x as usize, y as usize).clamp(0.0, 1.0);
        Luma([(v * 255.0).round() as u8])
    }))
}

/// 16-bit grayscale copy of a [0, 1] grid, one pixel per cell.
pub fn grid_to_gray16(grid: &Grid<f32>) -> Result<ImageBuffer<Luma<u16>, Vec<u16>>> {
    let (w, h) = image_dims(grid.size())?;
    Ok(ImageBuffer::from_fn(w, h, |x, y| {
        let v = grid.get(x as usize, y as usize).clamp(0.0, 1.0);
        Luma([(v * 65535.0).round() as u16])
    }))
}

#[derive(Serialize)]
struct LayerEntry {
    name: &'static str,
    index: usize,
    file: String,
}

#[derive(Serialize)]
struct Manifest<'a> {
    version: u32,
    seeds: &'a DrawnSeeds,
    heightmap_size: GridSize,
    alphamap_size: GridSize,
    heightmap: &'static str,
    layers: Vec<LayerEntry>,
    normalized: bool,
    terrain_params: &'a TerrainParams,
}

/// Writes terrain grids as PNG files into a directory.
pub struct PngSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngSink {
    /// Create the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, written: Vec::new() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn record(&mut self, path: PathBuf) {
        log::debug!("Wrote {}", path.display());
        self.written.push(path);
    }

    /// Write `manifest.json` describing a finished generation.
    pub fn write_manifest(&mut self, terrain: &GeneratedTerrain, params: &TerrainParams) -> Result<PathBuf> {
        let manifest = Manifest {
            version: MANIFEST_VERSION,
            seeds: &terrain.seeds,
            heightmap_size: terrain.heights.size(),
            alphamap_size: terrain.alpha.size(),
            heightmap: HEIGHTMAP_FILE,
            layers: GroundLayer::ALL
                .iter()
                .map(|layer| LayerEntry {
                    name: layer.name(),
                    index: layer.index(),
                    file: layer_file(*layer),
                })
                .collect(),
            normalized: false,
            terrain_params: params,
        };

        let path = self.dir.join(MANIFEST_FILE);
        std::fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
        self.record(path.clone());
        Ok(path)
    }
}

impl TerrainSink for PngSink {
    fn set_heights(&mut self, heights: &HeightGrid) -> Result<()> {
        let path = self.dir.join(HEIGHTMAP_FILE);
        grid_to_gray16(heights)?.save(&path)?;
        self.record(path);
        Ok(())
    }

    fn set_blend_weights(&mut self, alpha: &AlphaGrid) -> Result<()> {
        for layer in GroundLayer::ALL {
            let path = self.dir.join(layer_file(layer));
            grid_to_gray8(&alpha.layer(layer))?.save(&path)?;
            self.record(path);
        }
        Ok(())
    }
}

impl HeightPreview for PngSink {
    fn preview_heights(&mut self, heights: &HeightGrid) -> Result<()> {
        let path = self.dir.join(PREVIEW_FILE);
        grid_to_gray8(heights)?.save(&path)?;
        self.record(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splat::LAYER_COUNT;

    #[test]
    fn test_gray8_pixel_for_pixel() {
        let grid = Grid::from_fn(GridSize::new(3, 2).unwrap(), |x, y| if x == 2 && y == 1 { 1.0 } else { 0.0 });
        let img = grid_to_gray8(&grid).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [255]);
        assert_eq!(img.get_pixel(0, 0).0, [0]);
    }

    #[test]
    fn test_gray16_clamps() {
        let grid = Grid::from_vec(GridSize::new(2, 1).unwrap(), vec![-0.5, 2.0]).unwrap();
        let img = grid_to_gray16(&grid).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(img.get_pixel(1, 0).0, [65535]);
    }

    #[test]
    fn test_png_sink_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = PngSink::new(dir.path().join("out")).unwrap();

        let heights = Grid::new(GridSize::new(4, 3).unwrap(), 0.5_f32);
        let alpha = Grid::new(GridSize::new(2, 2).unwrap(), [1.0, 0.0, 0.0, 0.0, 1.0]);
        sink.set_heights(&heights).unwrap();
        sink.set_blend_weights(&alpha).unwrap();
        sink.preview_heights(&heights).unwrap();

        assert_eq!(sink.written().len(), 2 + LAYER_COUNT);
        let height_img = image::open(sink.dir().join(HEIGHTMAP_FILE)).unwrap().to_luma16();
        assert_eq!(height_img.dimensions(), (4, 3));
        assert_eq!(height_img.get_pixel(0, 0).0, [32768]);

        let sand = image::open(sink.dir().join(layer_file(GroundLayer::Sand))).unwrap().to_luma8();
        assert_eq!(sand.get_pixel(1, 1).0, [255]);
        let grass = image::open(sink.dir().join(layer_file(GroundLayer::Grass))).unwrap().to_luma8();
        assert_eq!(grass.get_pixel(1, 1).0, [0]);
        assert!(sink.dir().join(PREVIEW_FILE).exists());
    }
}
