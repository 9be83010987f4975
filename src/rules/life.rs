//! Totalistic Life-like rules.

use crate::{error::Error, rules::Rule};
use ca_rules::ParseLife;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Totalistic Life-like rules over boolean cells.
///
/// A cell is born when it is dead and its live neighbor count is in the
/// birth set; it survives when it is alive and the count is in the survival
/// set; otherwise it is dead in the next generation.
///
/// The default rule is [Conway's Game of Life](Life::conway), `B3/S23`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Life {
    /// Neighbor counts that make a dead cell come alive,
    /// as a bitmask over counts `0..=8`.
    birth: u16,

    /// Neighbor counts that keep a living cell alive,
    /// as a bitmask over counts `0..=8`.
    survival: u16,
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mask = |counts: Vec<u8>| {
            counts
                .into_iter()
                .filter(|&n| n <= 8)
                .fold(0_u16, |mask, n| mask | 1 << n)
        };
        Self {
            birth: mask(b),
            survival: mask(s),
        }
    }

    /// Conway's Game of Life, `B3/S23`.
    ///
    /// Birth on exactly 3 live neighbors; survival on 2 or 3; death on
    /// anything else.
    pub fn conway() -> Self {
        Self::new(vec![3], vec![2, 3])
    }

    /// Whether a live neighbor count `n` is in the birth set.
    #[inline]
    pub fn births(&self, n: u8) -> bool {
        n <= 8 && self.birth >> n & 1 == 1
    }

    /// Whether a live neighbor count `n` is in the survival set.
    #[inline]
    pub fn survives(&self, n: u8) -> bool {
        n <= 8 && self.survival >> n & 1 == 1
    }
}

impl Default for Life {
    fn default() -> Self {
        Self::conway()
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ParseLife::parse_rule(input).map_err(Error::ParseRuleError)
    }
}

impl Rule for Life {
    type Cell = bool;

    fn transition(&self, cell: bool, nbhd: &[bool; 8]) -> bool {
        let n = nbhd.iter().filter(|&&alive| alive).count() as u8;
        if cell {
            self.survives(n)
        } else {
            self.births(n)
        }
    }
}
