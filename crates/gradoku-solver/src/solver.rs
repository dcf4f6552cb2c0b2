//! The technique-driven solving loop.

use gradoku_core::Grid;

use crate::{
    SolverError,
    step::{Deduction, Step, Trace},
    technique::{self, BoxedTechnique, Finding},
};

/// A solver that applies human-style techniques one placement at a time.
///
/// At each step the solver tries its techniques in priority order and applies
/// the first one that fires. Every placement is recorded as a
/// [`Step::Deduce`] in the returned [`Trace`]; the run terminates with
/// [`Step::Solved`] when the grid fills up, or [`Step::Stuck`] when no
/// technique applies.
///
/// The puzzle handed to [`solve`](Self::solve) is never mutated: the solver
/// works on a private copy, so the same puzzle can be evaluated repeatedly
/// (the difficulty-targeted generator depends on this).
///
/// # Examples
///
/// ```
/// use gradoku_core::Grid;
/// use gradoku_solver::TechniqueSolver;
///
/// let puzzle: Grid = "
///     123 456 780
///     000 000 000
///     000 000 000
///     000 000 000
///     000 000 000
///     000 000 000
///     000 000 000
///     000 000 000
///     000 000 000
/// "
/// .parse()
/// .unwrap();
///
/// let solver = TechniqueSolver::with_standard_techniques();
/// let trace = solver.solve(&puzzle)?;
///
/// // One deduction fires (the 9 at R1C9), then the solver is stuck.
/// assert!(!trace.is_solved());
/// assert_eq!(trace.deductions().count(), 1);
/// # Ok::<(), gradoku_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl TechniqueSolver {
    /// Creates a solver with the given techniques, tried in order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with the standard technique list
    /// ([`technique::standard_techniques`]).
    #[must_use]
    pub fn with_standard_techniques() -> Self {
        Self::new(technique::standard_techniques())
    }

    /// Returns the configured techniques in priority order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Returns the first finding any technique can justify on the grid,
    /// paired with the technique that produced it.
    #[must_use]
    pub fn find_next(&self, grid: &Grid) -> Option<(&BoxedTechnique, Finding)> {
        self.techniques
            .iter()
            .find_map(|technique| technique.find(grid).map(|finding| (technique, finding)))
    }

    /// Solves as far as the techniques allow, recording every deduction.
    ///
    /// Returns the complete trace, terminated by [`Step::Solved`] or
    /// [`Step::Stuck`]. Being stuck is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if a technique fires on a cell
    /// or digit that conflicts with the grid — possible only if the input
    /// puzzle itself is contradictory.
    pub fn solve(&self, puzzle: &Grid) -> Result<Trace, SolverError> {
        let mut working = puzzle.clone();
        let mut trace = Trace::default();
        loop {
            if working.is_full() {
                trace.push(Step::Solved { score: None });
                return Ok(trace);
            }
            let Some((technique, finding)) = self.find_next(&working) else {
                trace.push(Step::Stuck);
                return Ok(trace);
            };
            let Finding {
                cell,
                digit,
                rationale,
            } = finding;
            if working.get(cell).is_some() || !working.is_placeable(cell, digit) {
                return Err(SolverError::Inconsistent {
                    code: technique.code(),
                    cell,
                    digit,
                });
            }
            working.set(cell, digit);
            trace.push(Step::Deduce(Deduction {
                code: technique.code(),
                cell,
                digit,
                rationale,
                snapshot: working.clone(),
                cost: None,
            }));
        }
    }
}

impl Default for TechniqueSolver {
    fn default() -> Self {
        Self::with_standard_techniques()
    }
}
