//! Sudoku puzzle generation for the Gradoku engine.
//!
//! Generation flows one direction: [`backtrack`] fills an empty grid with a
//! random complete solution, [`transform`] decorrelates it from the search
//! order with random symmetries, [`carve`] erases clues while re-verifying
//! that exactly one solution remains, and [`generator`] wraps the pipeline
//! in a difficulty-targeted loop that adds or restores clues until the
//! puzzle's technique-based score lands in the requested grade band.
//!
//! All randomness flows through an explicit RNG seeded by a [`PuzzleSeed`],
//! so every generated puzzle can be reproduced from its reported seed.
//!
//! # Examples
//!
//! ```no_run
//! use gradoku_generator::PuzzleGenerator;
//! use gradoku_solver::{Grade, TechniqueSolver};
//!
//! let solver = TechniqueSolver::with_standard_techniques();
//! let generated = PuzzleGenerator::new(&solver)
//!     .with_target(Grade::Beginner)
//!     .generate()?;
//!
//! // The canonical 81-character encodings, row-major, 0 for blank.
//! println!("{}", generated.puzzle);
//! println!("{}", generated.solution);
//! # Ok::<(), gradoku_generator::GenerateError>(())
//! ```

pub mod backtrack;
pub mod carve;
pub mod generator;
pub mod seed;
pub mod transform;

pub use self::{
    carve::Carving,
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
