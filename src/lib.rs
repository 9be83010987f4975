mod engine;
mod error;
mod grid;
pub mod render;
pub mod rules;
pub mod seed;

pub use engine::Engine;
pub use error::Error;
pub use grid::{Coord, Grid};
pub use rules::{Life, Rule};
