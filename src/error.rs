//! All kinds of errors in this crate.

use crate::grid::Coord;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Grid dimensions should be positive, but {0}x{1} was requested.
    InvalidDimension(usize, usize),
    /// Cell coordinates {0:?} are outside the grid.
    OutOfBounds(Coord),
    /// Linear cell index {0} is outside the grid.
    IndexOutOfBounds(usize),
    /// Deserialized grid data does not match its dimensions.
    InvalidGridData,
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
}
