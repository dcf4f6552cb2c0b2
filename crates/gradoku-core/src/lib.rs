//! Core data structures for the Gradoku puzzle engine.
//!
//! This crate provides the grid primitives shared by puzzle generation,
//! human-style solving, and difficulty grading.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`position`]: Cell addresses (row, column) with block arithmetic
//! - [`digit_set`]: A 9-bit set of digits, used for candidate ("pencil mark")
//!   computation and unit occupancy checks
//! - [`grid`]: The 9×9 grid itself, including the placement-validity
//!   predicate, on-demand candidate computation, solution-preserving symmetry
//!   primitives, and the canonical 81-character string encoding
//!
//! # Examples
//!
//! ```
//! use gradoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Digit::D5);
//!
//! // 5 is no longer placeable elsewhere in row 0
//! assert!(!grid.is_placeable(Position::new(0, 8), Digit::D5));
//!
//! // The candidate set at a peer cell excludes 5
//! assert!(!grid.candidates_at(Position::new(0, 4)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    position::Position,
};
