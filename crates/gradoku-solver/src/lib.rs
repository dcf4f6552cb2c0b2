//! Human-style Sudoku solving and difficulty grading.
//!
//! This crate solves puzzles the way a person would: at each step it tries a
//! ranked list of logical techniques and applies the first one that fires,
//! placing exactly one digit and recording why. The resulting audit trail is
//! then priced by a [`Scorer`], yielding a numeric difficulty and a named
//! [`Grade`].
//!
//! # Overview
//!
//! - [`technique`]: The [`Technique`](technique::Technique) trait and the
//!   implemented deduction rules (Only Choice, Single Candidate,
//!   Two Out of Three)
//! - [`step`]: The solving trace — [`Step`], [`Deduction`], [`Trace`], and
//!   the closed [`TechniqueCode`] enumeration
//! - [`solver`]: [`TechniqueSolver`], the one-deduction-per-step loop
//! - [`grade`]: [`CostTable`], [`Scorer`], and the [`Grade`] bands
//!
//! # Examples
//!
//! ```
//! use gradoku_core::Grid;
//! use gradoku_solver::{Scorer, TechniqueSolver};
//!
//! let puzzle: Grid = "
//!     534678912
//!     672195348
//!     198342567
//!     859761423
//!     426853791
//!     713924856
//!     961537284
//!     287419635
//!     34528617_
//! "
//! .parse()
//! .unwrap();
//!
//! let solver = TechniqueSolver::with_standard_techniques();
//! let mut trace = solver.solve(&puzzle)?;
//! assert!(trace.is_solved());
//!
//! let score = Scorer::default().score(&mut trace).unwrap();
//! assert!(score > 0);
//! # Ok::<(), gradoku_solver::SolverError>(())
//! ```

use derive_more::{Display, Error};
use gradoku_core::{Digit, Position};

pub mod grade;
pub mod solver;
pub mod step;
pub mod technique;
pub mod testing;

pub use self::{
    grade::{CostTable, Grade, Scorer, TechniqueCost},
    solver::TechniqueSolver,
    step::{Deduction, Step, TechniqueCode, Trace},
};

/// Error produced when solving goes wrong.
///
/// A puzzle the techniques cannot finish is *not* an error (it yields a
/// [`Step::Stuck`] sentinel); errors are reserved for findings that
/// contradict the grid, which indicates an invalid puzzle.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A technique produced a placement that conflicts with the grid.
    #[display("{code} placed {digit} at {cell}, conflicting with the grid")]
    Inconsistent {
        /// Code of the technique that fired.
        code: TechniqueCode,
        /// The cell the technique targeted.
        cell: Position,
        /// The digit the technique tried to place.
        digit: Digit,
    },
}
