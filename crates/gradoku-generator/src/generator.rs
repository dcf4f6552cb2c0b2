//! Difficulty-targeted puzzle generation.

use derive_more::{Display, Error, From};
use gradoku_core::Grid;
use gradoku_solver::{Grade, Scorer, SolverError, TechniqueSolver, Trace};
use log::{debug, trace};
use rand::RngExt;

use crate::{
    backtrack::fill_completely,
    carve::Carving,
    seed::PuzzleSeed,
    transform::apply_random_transformations,
};

/// Ceiling on full generation restarts before giving up.
///
/// Restarting on a dead-end carving is routine; this bound turns "keep
/// trying forever" into a definite, reportable failure instead of unbounded
/// work when the target grade is out of the technique roster's reach.
pub const MAX_GENERATION_ATTEMPTS: usize = 100;

/// Error produced when generation cannot deliver a puzzle.
#[derive(Debug, Display, Error, From, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No attempt produced a puzzle scoring inside the target band.
    #[display("no {target} puzzle found within {attempts} generation attempts")]
    AttemptsExhausted {
        /// The grade that was asked for.
        target: Grade,
        /// How many full attempts were made.
        attempts: usize,
    },
    /// The solver rejected a candidate puzzle as contradictory.
    ///
    /// This cannot happen for puzzles carved from a valid solution and
    /// indicates a bug if it surfaces.
    #[display("solver failed while evaluating a candidate: {_0}")]
    #[from]
    Solver(SolverError),
}

/// A generated puzzle together with everything needed to present it.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The puzzle grid (0 = blank in its string form).
    pub puzzle: Grid,
    /// The unique solution the puzzle was carved from.
    pub solution: Grid,
    /// The seed that reproduces this exact puzzle.
    pub seed: PuzzleSeed,
    /// The scored solving trace justifying the difficulty rating.
    pub trace: Trace,
    /// Total difficulty score of the trace.
    pub score: u32,
    /// Named band containing `score`.
    pub grade: Option<Grade>,
}

/// Generates puzzles whose difficulty score lands in a target [`Grade`].
///
/// Each attempt flows one direction: backtracking fills an empty grid with a
/// random solution, the transformation engine shuffles it, the carver erases
/// clues down to a uniquely solvable seed puzzle, and the technique solver
/// plus scorer evaluate the result. While the score is below the target
/// band the generator erases another clue (reverting any erasure that breaks
/// uniqueness); while it is above, it restores the most recent erasure. A
/// puzzle the techniques cannot solve at all abandons the attempt and starts
/// over from a new solution.
///
/// # Examples
///
/// ```no_run
/// use gradoku_generator::PuzzleGenerator;
/// use gradoku_solver::{Grade, TechniqueSolver};
///
/// let solver = TechniqueSolver::with_standard_techniques();
/// let generated = PuzzleGenerator::new(&solver)
///     .with_target(Grade::Easy)
///     .generate()?;
///
/// println!("puzzle:   {}", generated.puzzle);
/// println!("solution: {}", generated.solution);
/// println!("score:    {} ({:?})", generated.score, generated.grade);
/// # Ok::<(), gradoku_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a> {
    solver: &'a TechniqueSolver,
    scorer: Scorer,
    target: Grade,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator targeting [`Grade::Easy`].
    #[must_use]
    pub fn new(solver: &'a TechniqueSolver) -> Self {
        Self {
            solver,
            scorer: Scorer::default(),
            target: Grade::Easy,
        }
    }

    /// Sets the target difficulty band.
    #[must_use]
    pub fn with_target(mut self, target: Grade) -> Self {
        self.target = target;
        self
    }

    /// Sets a custom scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] when no attempt within
    /// [`MAX_GENERATION_ATTEMPTS`] lands in the target band — expected when
    /// the band is unreachable with the configured techniques (the harder
    /// bands need techniques beyond the implemented roster).
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        let range = self.target.range();

        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let solution = random_solution(&mut rng);
            let Some(mut carving) = Carving::carve(&solution, &mut rng) else {
                debug!("attempt {attempt}: no uniquely solvable seed puzzle, restarting");
                continue;
            };

            loop {
                let mut evaluation = self.solver.solve(carving.puzzle())?;
                let Some(score) = self.scorer.score(&mut evaluation) else {
                    // Unsolvable by the technique roster — distinct from
                    // "too hard": no amount of clue restoration is
                    // guaranteed to fix it cheaply, so start over.
                    debug!("attempt {attempt}: puzzle not human-solvable, restarting");
                    break;
                };
                trace!(
                    "attempt {attempt}: score {score} with {} givens",
                    carving.puzzle().filled_count()
                );

                if range.contains(&score) {
                    debug_assert!(carving.puzzle().is_subgrid_of(&solution));
                    return Ok(GeneratedPuzzle {
                        puzzle: carving.puzzle().clone(),
                        solution,
                        seed,
                        trace: evaluation,
                        score,
                        grade: Grade::classify(score),
                    });
                }
                if score < range.start {
                    // Too easy: take one more clue away.
                    if !carving.erase_one(&mut rng) {
                        debug!("attempt {attempt}: erase budget exhausted, restarting");
                        break;
                    }
                } else {
                    // Too hard: give the most recent clue back.
                    if !carving.restore_last() {
                        debug!("attempt {attempt}: nothing left to restore, restarting");
                        break;
                    }
                }
            }
        }

        Err(GenerateError::AttemptsExhausted {
            target: self.target,
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

fn random_solution<R>(rng: &mut R) -> Grid
where
    R: RngExt + ?Sized,
{
    let mut solution = Grid::new();
    let filled = fill_completely(&mut solution, rng);
    debug_assert!(filled, "an empty grid always admits a solution");
    apply_random_transformations(&mut solution, rng);
    solution
}
