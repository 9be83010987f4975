//! Advancing the grid one generation at a time.

use crate::{grid::Grid, rules::Rule};

/// The offsets of the 8 cells in the neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies a [`Rule`] to a whole [`Grid`], one synchronous generation
/// per [`step`](Engine::step).
///
/// The engine holds no state besides the rule itself, and no data tied to a
/// particular grid; the same engine can drive any number of grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Engine<R: Rule> {
    rule: R,
}

impl<R: Rule> Engine<R> {
    /// Creates an engine that applies the given rule.
    pub const fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The rule this engine applies.
    pub const fn rule(&self) -> &R {
        &self.rule
    }

    /// Advances the grid by one generation.
    ///
    /// Every cell transitions according to its 8 toroidally wrapped
    /// neighbors in the *current* generation; the new values only become
    /// visible through the single buffer swap at the end, so no cell ever
    /// sees a neighbor's new value from within the same step.
    ///
    /// Callers must not edit the grid while a step is in progress; the
    /// engine reads only the front buffer and writes only the back buffer.
    pub fn step(&self, grid: &mut Grid<R::Cell>) {
        let (width, height) = (grid.width(), grid.height());
        let (front, back) = grid.split_bufs();
        for y in 0..height {
            for x in 0..width {
                let mut nbhd = [R::Cell::default(); 8];
                for (cell, &(dx, dy)) in nbhd.iter_mut().zip(NBHD.iter()) {
                    let nx = (x as isize + dx).rem_euclid(width as isize) as usize;
                    let ny = (y as isize + dy).rem_euclid(height as isize) as usize;
                    *cell = front[nx + ny * width];
                }
                back[x + y * width] = self.rule.transition(front[x + y * width], &nbhd);
            }
        }
        grid.swap();
    }

    /// Advances the grid by `generations` generations.
    pub fn advance(&self, grid: &mut Grid<R::Cell>, generations: usize) {
        for _ in 0..generations {
            self.step(grid);
        }
    }
}
