//! The boundary towards an external renderer.
//!
//! The core knows nothing about windows or textures. What it provides is the
//! mapping from a generation of cells to a flat frame of colors, with the
//! cell-to-color function injected by the caller, and the inverse mapping
//! from a pointer position to a cell for manual editing.

use crate::grid::{Coord, Grid};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// Maps grid cells to colors, one frame at a time.
///
/// The cell-to-color mapping is chosen at construction and can be any
/// function value. The renderer reuses its frame buffer across calls, so
/// rendering allocates only when the grid is larger than everything rendered
/// before.
#[derive(Educe)]
#[educe(Debug(bound = "C: std::fmt::Debug"))]
pub struct Renderer<T, C> {
    /// The injected cell-to-color mapping.
    #[educe(Debug(ignore))]
    map: Box<dyn Fn(T) -> C>,

    /// The most recently produced frame, in row-major order.
    frame: Vec<C>,
}

impl<T: Copy + Default, C> Renderer<T, C> {
    /// Creates a renderer with the given cell-to-color mapping.
    pub fn new<F>(map: F) -> Self
    where
        F: Fn(T) -> C + 'static,
    {
        Self {
            map: Box::new(map),
            frame: Vec::new(),
        }
    }

    /// Renders the current generation of the grid.
    ///
    /// The returned frame holds `grid.len()` colors in row-major order,
    /// one per cell, `grid.width()` colors per row.
    pub fn frame(&mut self, grid: &Grid<T>) -> &[C] {
        self.frame.clear();
        self.frame.reserve(grid.len());
        self.frame
            .extend(grid.front_buf().iter().map(|&cell| (self.map)(cell)));
        &self.frame
    }
}

impl Renderer<bool, Rgb> {
    /// The reference mapping for boolean cells: live cells are white,
    /// dead cells are black.
    pub fn monochrome() -> Self {
        Self::new(|alive| if alive { Rgb::WHITE } else { Rgb::BLACK })
    }
}

/// Maps a pixel position to the cell under it, for pointer editing.
///
/// `cell_size` is the number of pixels a cell is scaled to on screen.
/// Returns `None` if `cell_size` is zero. The result is not clamped to any
/// grid; pass it to [`Grid::set`], which does the bounds check.
pub fn cell_at(pixel_x: usize, pixel_y: usize, cell_size: usize) -> Option<Coord> {
    if cell_size == 0 {
        None
    } else {
        Some((pixel_x / cell_size, pixel_y / cell_size))
    }
}
