//! Double-buffered storage for the cells.

use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`. Both coordinates are 0-indexed.
pub type Coord = (usize, usize);

/// A fixed-size toroidal grid of cells.
///
/// The grid keeps two equally-sized buffers. Reads and writes through
/// [`get`](Grid::get) and [`set`](Grid::set) go to the front buffer, which
/// holds the current generation. A rule engine writes the next generation
/// into the back buffer with [`set_back`](Grid::set_back) and then publishes
/// it all at once with [`swap`](Grid::swap).
///
/// The cell type only needs a default value, which is what every cell starts
/// as. For Life-like rules it is `bool`, with `false` meaning dead.
///
/// Cells are stored in row-major order: `(x, y)` lives at index
/// `x + y * width`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "GridSer<T>")
)]
pub struct Grid<T> {
    /// Number of columns. Positive and immutable.
    width: usize,

    /// Number of rows. Positive and immutable.
    height: usize,

    /// The two cell buffers, each of length `width * height`.
    bufs: [Vec<T>; 2],

    /// Which of the two buffers is currently the front buffer.
    ///
    /// [`swap`](Grid::swap) only toggles this index; the buffers themselves
    /// never move. The other buffer is the back buffer, and after a swap it
    /// still holds the cells from two generations ago.
    front: usize,
}

impl<T: Copy + Default> Grid<T> {
    /// Creates a grid with every cell in both buffers set to `T::default()`.
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension(width, height));
        }
        let buf = vec![T::default(); width * height];
        Ok(Self {
            width,
            height,
            bufs: [buf.clone(), buf],
            front: 0,
        })
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, i.e. `width * height`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid has no cells. Always `false` for a constructed grid.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts cell coordinates into a linear index,
    /// or [`Error::OutOfBounds`] if the coordinates are outside the grid.
    #[inline]
    fn index_of(&self, x: usize, y: usize) -> Result<usize, Error> {
        if x < self.width && y < self.height {
            Ok(x + y * self.width)
        } else {
            Err(Error::OutOfBounds((x, y)))
        }
    }

    /// Reads a cell of the current generation.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<T, Error> {
        let i = self.index_of(x, y)?;
        Ok(self.bufs[self.front][i])
    }

    /// Writes a cell of the current generation.
    ///
    /// This is the entry point for everything that edits the grid between
    /// steps: pointer painting, random seeding, and initial-state loading.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), Error> {
        let i = self.index_of(x, y)?;
        self.bufs[self.front][i] = value;
        Ok(())
    }

    /// Reads a cell of the current generation by its linear index.
    #[inline]
    pub fn get_index(&self, i: usize) -> Result<T, Error> {
        self.bufs[self.front]
            .get(i)
            .copied()
            .ok_or(Error::IndexOutOfBounds(i))
    }

    /// Writes a cell of the current generation by its linear index.
    #[inline]
    pub fn set_index(&mut self, i: usize, value: T) -> Result<(), Error> {
        if i < self.len() {
            self.bufs[self.front][i] = value;
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds(i))
        }
    }

    /// Writes a cell of the next generation.
    ///
    /// Only rule engines should call this. The written value becomes visible
    /// after the next [`swap`](Grid::swap).
    #[inline]
    pub fn set_back(&mut self, x: usize, y: usize, value: T) -> Result<(), Error> {
        let i = self.index_of(x, y)?;
        self.bufs[1 - self.front][i] = value;
        Ok(())
    }

    /// Exchanges the roles of the front and back buffers in O(1).
    ///
    /// The back buffer is not cleared by the swap. It holds the cells from
    /// two generations ago, so a rule engine must overwrite every one of its
    /// cells before the next swap.
    #[inline]
    pub fn swap(&mut self) {
        self.front ^= 1;
    }

    /// Resets every cell of the current generation to `T::default()`.
    pub fn clear(&mut self) {
        self.bufs[self.front].fill(T::default());
    }

    /// Iterates over the cells of the current generation in row-major order,
    /// together with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        let width = self.width;
        self.bufs[self.front]
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i % width, i / width), cell))
    }

    /// The current generation as a flat row-major slice.
    #[inline]
    pub(crate) fn front_buf(&self) -> &[T] {
        &self.bufs[self.front]
    }

    /// Both generations at once: the current one read-only, the in-progress
    /// next one writable. Lets a rule engine read the front buffer while
    /// filling the back buffer without copying either.
    #[inline]
    pub(crate) fn split_bufs(&mut self) -> (&[T], &mut [T]) {
        let [first, second] = &mut self.bufs;
        if self.front == 0 {
            (first.as_slice(), second.as_mut_slice())
        } else {
            (second.as_slice(), first.as_mut_slice())
        }
    }
}

/// A representation of [`Grid`] which can be deserialized without trusting
/// the input.
///
/// [`Grid`] itself deserializes through this struct, so that the invariants
/// a hand-built [`Grid::new`] guarantees are re-checked before the grid is
/// handed out.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GridSer<T> {
    width: usize,
    height: usize,
    bufs: [Vec<T>; 2],
    front: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<GridSer<T>> for Grid<T> {
    type Error = Error;

    fn try_from(ser: GridSer<T>) -> Result<Self, Error> {
        if ser.width == 0 || ser.height == 0 {
            return Err(Error::InvalidDimension(ser.width, ser.height));
        }
        let len = ser
            .width
            .checked_mul(ser.height)
            .ok_or(Error::InvalidGridData)?;
        if ser.front > 1 || ser.bufs.iter().any(|buf| buf.len() != len) {
            return Err(Error::InvalidGridData);
        }
        Ok(Self {
            width: ser.width,
            height: ser.height,
            bufs: ser.bufs,
            front: ser.front,
        })
    }
}
