//! Cellular automata rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod life;

pub use life::Life;

/// A cellular automaton rule.
///
/// The rule is a strategy that is independent of the grid it is applied to:
/// given the current value of a cell and the values of its 8 surrounding
/// cells, it decides the value of that cell in the next generation. The
/// [`Engine`](crate::Engine) takes care of gathering the neighborhood with
/// toroidal wrapping and of the double-buffered update.
///
/// A rule must be a pure function of its inputs, since every cell of a
/// generation transitions from the *same* input generation.
pub trait Rule {
    /// The type of the cells this rule operates on.
    type Cell: Copy + Default;

    /// Computes the next value of a cell.
    ///
    /// `nbhd` holds the values of the 8 neighbors, self excluded. The order
    /// of the neighbors within `nbhd` is unspecified; totalistic rules must
    /// not depend on it.
    fn transition(&self, cell: Self::Cell, nbhd: &[Self::Cell; 8]) -> Self::Cell;
}
