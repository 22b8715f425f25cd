//! Dense 2D grids stored row-major in a flat `Vec`.
//!
//! Every raster the generator produces (heights, noise fields, blend weights)
//! is a `Grid<T>`. Cell `(x, y)` lives at index `y * width + x`.

pub mod resample;

pub use resample::resize_bilinear;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Width/height of a grid in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    /// Create a size, rejecting zero-area dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Square grid of `side` x `side` cells.
    pub fn square(side: usize) -> Result<Self> {
        Self::new(side, side)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid(format!(
                "grid dimensions must be positive (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major 2D grid of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    size: GridSize,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(size: GridSize, fill: T) -> Self {
        Self {
            size,
            data: vec![fill; size.cell_count()],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(size: GridSize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size.cell_count());
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(f(x, y));
            }
        }
        Self { size, data }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(size: GridSize, data: Vec<T>) -> Result<Self> {
        size.validate()?;
        if data.len() != size.cell_count() {
            return Err(Error::invalid(format!(
                "grid buffer holds {} cells, expected {} for {}",
                data.len(),
                size.cell_count(),
                size
            )));
        }
        Ok(Self { size, data })
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.size.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size.width && y < self.size.height, "cell ({x}, {y}) outside {}", self.size);
        y * self.size.width + x
    }

    /// Value at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let i = self.index(x, y);
        &mut self.data[i]
    }

    /// Flat row-major cell slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.size.width)
    }

    /// Iterate `(x, y, value)` for every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let width = self.size.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (i % width, i / width, *v))
    }

    /// New grid of the same size with `f` applied to every cell.
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            data: self.data.iter().map(|v| f(*v)).collect(),
        }
    }
}

impl Grid<f32> {
    /// Smallest and largest cell values, or `None` for NaN-only data.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
