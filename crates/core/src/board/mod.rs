//! Board representation, free of chess rules

mod grid;
mod matrix;
mod position;

pub use grid::{Board, Placeable};
pub use matrix::MoveMatrix;
pub use position::Position;
