//! Clue carving: turning a full solution into a puzzle with one solution.

use gradoku_core::{Grid, Position};
use log::{debug, trace};
use rand::RngExt;

use crate::backtrack::count_solutions;

/// Number of cells erased before the first uniqueness check.
pub const INITIAL_ERASURES: usize = 40;

/// Ceiling on attempted erasures per carving, initial batch included.
///
/// Exceeding it means this solution is not yielding a harder puzzle, and the
/// caller should start over from a new solution.
pub const MAX_ERASE_ATTEMPTS: usize = 80;

const MAX_SEED_ATTEMPTS: usize = 20;

/// A puzzle under construction: a partially erased copy of a solution.
///
/// The erased cells form an ordered undo stack — the difficulty-targeted
/// generation loop removes clues one at a time while a puzzle is too easy
/// and restores the most recent removal while it is too hard. Every state a
/// `Carving` exposes has exactly one completion; an erasure that would break
/// uniqueness is reverted internally and only counted against the attempt
/// budget.
#[derive(Debug, Clone)]
pub struct Carving {
    solution: Grid,
    puzzle: Grid,
    erased: Vec<Position>,
    attempts: usize,
}

impl Carving {
    /// Carves a seed puzzle from a full solution.
    ///
    /// Erases [`INITIAL_ERASURES`] random cells (re-rolling when an already
    /// empty cell comes up), then verifies the result still has exactly one
    /// solution. A batch that breaks uniqueness is discarded and re-carved
    /// from a fresh copy; after a bounded number of failed batches the
    /// function gives up and returns `None`, signalling the caller to start
    /// over with a new solution.
    ///
    /// # Panics
    ///
    /// Panics if `solution` is not a completely solved grid.
    pub fn carve<R>(solution: &Grid, rng: &mut R) -> Option<Self>
    where
        R: RngExt + ?Sized,
    {
        assert!(solution.check_solved(), "carving requires a full solution");
        for attempt in 0..MAX_SEED_ATTEMPTS {
            let mut puzzle = solution.clone();
            let mut erased = Vec::with_capacity(INITIAL_ERASURES);
            while erased.len() < INITIAL_ERASURES {
                let pos = random_cell(rng);
                if puzzle.clear(pos).is_some() {
                    erased.push(pos);
                }
            }
            if count_solutions(&mut puzzle, 2) == 1 {
                trace!("seed puzzle carved after {} batch(es)", attempt + 1);
                return Some(Self {
                    solution: solution.clone(),
                    puzzle,
                    erased,
                    attempts: INITIAL_ERASURES,
                });
            }
            debug!("seed batch {attempt} broke uniqueness, re-carving");
        }
        None
    }

    /// Returns the current puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// Returns the solution the puzzle was carved from.
    #[must_use]
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the erased cells, oldest first.
    #[must_use]
    pub fn erased(&self) -> &[Position] {
        &self.erased
    }

    /// Returns the number of erasures attempted so far.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Erases one more cell while keeping the puzzle uniquely solvable.
    ///
    /// Random filled cells are tried until one can go without breaking
    /// uniqueness; an erasure that breaks it is reverted on the spot and not
    /// retried. Returns `false` once [`MAX_ERASE_ATTEMPTS`] is exhausted —
    /// the signal to abandon this carving entirely.
    pub fn erase_one<R>(&mut self, rng: &mut R) -> bool
    where
        R: RngExt + ?Sized,
    {
        loop {
            if self.attempts >= MAX_ERASE_ATTEMPTS {
                debug!("erase budget exhausted after {} attempts", self.attempts);
                return false;
            }
            let pos = random_cell(rng);
            let Some(digit) = self.puzzle.clear(pos) else {
                continue;
            };
            self.attempts += 1;
            if count_solutions(&mut self.puzzle, 2) == 1 {
                self.erased.push(pos);
                return true;
            }
            // Not unique any more: put the clue back and try elsewhere.
            self.puzzle.set(pos, digit);
            trace!("erasing {pos} broke uniqueness, reverted");
        }
    }

    /// Restores the most recently erased cell from the solution.
    ///
    /// Returns `false` if no erasure is left to undo.
    pub fn restore_last(&mut self) -> bool {
        let Some(pos) = self.erased.pop() else {
            return false;
        };
        let digit = self
            .solution
            .get(pos)
            .expect("solution is complete by construction");
        self.puzzle.set(pos, digit);
        true
    }
}

fn random_cell<R>(rng: &mut R) -> Position
where
    R: RngExt + ?Sized,
{
    Position::new(rng.random_range(0..9), rng.random_range(0..9))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::backtrack::fill_completely;

    fn solution(seed: u64) -> Grid {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut grid = Grid::new();
        assert!(fill_completely(&mut grid, &mut rng));
        grid
    }

    #[test]
    fn test_carve_produces_unique_subgrid() {
        let mut rng = Pcg64::seed_from_u64(7);
        let solution = solution(7);
        let carving = Carving::carve(&solution, &mut rng).unwrap();

        assert!(carving.puzzle().is_subgrid_of(&solution));
        assert_eq!(carving.puzzle().filled_count(), 81 - INITIAL_ERASURES);
        assert_eq!(carving.erased().len(), INITIAL_ERASURES);

        let mut check = carving.puzzle().clone();
        assert_eq!(count_solutions(&mut check, 2), 1);
    }

    #[test]
    fn test_erase_one_keeps_uniqueness() {
        let mut rng = Pcg64::seed_from_u64(11);
        let solution = solution(11);
        let mut carving = Carving::carve(&solution, &mut rng).unwrap();

        while carving.erase_one(&mut rng) {
            let mut check = carving.puzzle().clone();
            assert_eq!(count_solutions(&mut check, 2), 1);
            assert!(carving.puzzle().is_subgrid_of(&solution));
        }
        assert!(carving.attempts() >= MAX_ERASE_ATTEMPTS);
    }

    #[test]
    fn test_restore_last_reverts_in_order() {
        let mut rng = Pcg64::seed_from_u64(13);
        let solution = solution(13);
        let mut carving = Carving::carve(&solution, &mut rng).unwrap();

        let filled = carving.puzzle().filled_count();
        assert!(carving.erase_one(&mut rng));
        let last = *carving.erased().last().unwrap();
        assert_eq!(carving.puzzle().get(last), None);

        assert!(carving.restore_last());
        assert_eq!(carving.puzzle().filled_count(), filled);
        assert_eq!(carving.puzzle().get(last), solution.get(last));
    }

    #[test]
    fn test_restore_exhausts_to_full_solution() {
        let mut rng = Pcg64::seed_from_u64(17);
        let solution = solution(17);
        let mut carving = Carving::carve(&solution, &mut rng).unwrap();

        while carving.restore_last() {}
        assert_eq!(carving.puzzle(), &solution);
        assert!(carving.erased().is_empty());
    }

    #[test]
    #[should_panic(expected = "carving requires a full solution")]
    fn test_carve_rejects_partial_grid() {
        let mut rng = Pcg64::seed_from_u64(19);
        let _ = Carving::carve(&Grid::new(), &mut rng);
    }
}
