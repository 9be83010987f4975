//! The boundary towards input sources.
//!
//! Everything that fills a grid with an initial state before stepping lives
//! here: random seeding, loading from a decoded image, and stamping the
//! classic patterns. The actual sources (windowing, image decoders) are
//! external; they reach the grid only through these functions and
//! [`Grid::set`].

use crate::{
    error::Error,
    grid::{Coord, Grid},
};
use rand::Rng;

/// A decoded image the initial state can be loaded from.
///
/// Image decoding is a collaborator concern; any decoder can feed a grid by
/// exposing its dimensions and pixels through this trait.
pub trait PixelSource {
    /// The width and height of the image in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// The `(r, g, b)` channels of the pixel at `(x, y)`.
    ///
    /// Only called with `x` and `y` inside [`dimensions`](Self::dimensions).
    fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8);
}

/// Loads an initial state from a decoded image.
///
/// Iterates the overlap of the image and the grid, i.e.
/// `min(image_width, grid_width)` by `min(image_height, grid_height)`
/// pixels, and marks a cell alive when the pixel over it is dark:
/// `(r + g + b) / 3 < 128`. Cells outside the overlap are left untouched.
pub fn load_pixels<S: PixelSource>(grid: &mut Grid<bool>, source: &S) -> Result<(), Error> {
    let (image_width, image_height) = source.dimensions();
    let width = grid.width().min(image_width as usize);
    let height = grid.height().min(image_height as usize);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = source.pixel(x as u32, y as u32);
            let dark = (r as u32 + g as u32 + b as u32) / 3 < 128;
            grid.set(x, y, dark)?;
        }
    }
    Ok(())
}

/// Seeds every cell with a uniform random bit from the given generator.
pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid<bool>, rng: &mut R) -> Result<(), Error> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            grid.set(x, y, rng.gen())?;
        }
    }
    Ok(())
}

/// Seeds every cell with a uniform random bit from the thread-local
/// generator.
pub fn random(grid: &mut Grid<bool>) -> Result<(), Error> {
    randomize(grid, &mut rand::thread_rng())
}

/// A named still life, oscillator or spaceship.
///
/// The cells are the live cells' coordinates relative to the pattern's own
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord],
}

/// The glider, travelling one cell down and right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// The blinker, a period-2 oscillator.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// The toad, a period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

/// The beacon, a period-2 oscillator.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (2, 2),
        (3, 2),
        (2, 3),
        (3, 3),
    ],
};

/// The R-pentomino, a methuselah.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

/// Stamps a pattern onto the grid with its top-left corner at `offset`.
///
/// The placement wraps toroidally, so a pattern stamped near an edge
/// continues on the opposite edge.
pub fn put(grid: &mut Grid<bool>, pattern: &Pattern, offset: Coord) -> Result<(), Error> {
    let (ox, oy) = offset;
    for &(x, y) in pattern.cells {
        grid.set((ox + x) % grid.width(), (oy + y) % grid.height(), true)?;
    }
    Ok(())
}
