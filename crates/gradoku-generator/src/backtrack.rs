//! Exhaustive backtracking search: solution filling and uniqueness counting.
//!
//! Both entry points share one recursive strategy: take the next empty cell
//! from an explicit list, try digits, recurse, and undo the placement on the
//! way back out. The undo discipline is load-bearing — skipping it would
//! corrupt sibling branches — so both functions guarantee the grid is
//! restored cell by cell as the search unwinds.

use gradoku_core::{Digit, Grid, Position};
use rand::{Rng, seq::SliceRandom as _};

/// Fills every empty cell of the grid with a valid assignment, in place.
///
/// Digits are tried in a freshly shuffled order at every cell; this is the
/// randomness that makes repeated runs produce different solutions from the
/// same starting grid. Returns `true` on success. On failure (`false`) the
/// grid is exactly as it was before the call.
///
/// # Examples
///
/// ```
/// use gradoku_core::Grid;
/// use gradoku_generator::backtrack::fill_completely;
///
/// let mut grid = Grid::new();
/// assert!(fill_completely(&mut grid, &mut rand::rng()));
/// assert!(grid.check_solved());
/// ```
pub fn fill_completely<R>(grid: &mut Grid, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    let empty_cells = grid.empty_positions();
    fill_at(grid, &empty_cells, 0, rng)
}

fn fill_at<R>(grid: &mut Grid, empty_cells: &[Position], depth: usize, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    let Some(&pos) = empty_cells.get(depth) else {
        return true;
    };
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.is_placeable(pos, digit) {
            grid.set(pos, digit);
            if fill_at(grid, empty_cells, depth + 1, rng) {
                return true;
            }
            grid.clear(pos);
        }
    }
    false
}

/// Counts completions of the grid, stopping early at `cap`.
///
/// The recursion keeps searching after each full assignment instead of
/// returning, so it distinguishes "no solutions", "exactly one", and "`cap`
/// or more" — callers verifying uniqueness pass `cap = 2`. The exhaustive
/// walk makes digit order irrelevant, so none is shuffled.
///
/// The grid is always restored to its input state before returning.
///
/// # Examples
///
/// ```
/// use gradoku_core::{Grid, Position};
/// use gradoku_generator::backtrack::count_solutions;
///
/// let mut grid: Grid =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()
///         .unwrap();
/// // A complete valid grid has exactly one "completion": itself.
/// assert_eq!(count_solutions(&mut grid, 2), 1);
///
/// grid.clear(Position::new(0, 0));
/// assert_eq!(count_solutions(&mut grid, 2), 1);
/// ```
pub fn count_solutions(grid: &mut Grid, cap: usize) -> usize {
    let empty_cells = grid.empty_positions();
    count_at(grid, &empty_cells, 0, cap)
}

fn count_at(grid: &mut Grid, empty_cells: &[Position], depth: usize, cap: usize) -> usize {
    let Some(&pos) = empty_cells.get(depth) else {
        return 1;
    };
    let mut count = 0;
    for digit in Digit::ALL {
        if grid.is_placeable(pos, digit) {
            grid.set(pos, digit);
            count += count_at(grid, empty_cells, depth + 1, cap - count);
            grid.clear(pos);
            if count >= cap {
                break;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use gradoku_core::DigitSet;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(0x5eed)
    }

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_fill_from_empty_produces_valid_solution() {
        let mut grid = Grid::new();
        assert!(fill_completely(&mut grid, &mut rng()));
        assert!(grid.check_solved());
        for i in 0..9 {
            assert_eq!(grid.row_digits(i), DigitSet::FULL);
            assert_eq!(grid.col_digits(i), DigitSet::FULL);
            assert_eq!(grid.block_digits(i), DigitSet::FULL);
        }
    }

    #[test]
    fn test_fill_preserves_existing_givens() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), gradoku_core::Digit::D7);
        grid.set(Position::new(4, 4), gradoku_core::Digit::D3);
        assert!(fill_completely(&mut grid, &mut rng()));
        assert!(grid.check_solved());
        assert_eq!(grid.get(Position::new(0, 0)), Some(gradoku_core::Digit::D7));
        assert_eq!(grid.get(Position::new(4, 4)), Some(gradoku_core::Digit::D3));
    }

    #[test]
    fn test_fill_failure_restores_grid() {
        // Cell (0, 2) has no candidates: 1-6 in its row, 7-9 in its column.
        let mut grid: Grid = "
            120 345 600
            000 000 000
            007 000 000
            008 000 000
            009 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
        "
        .parse()
        .unwrap();
        assert_eq!(grid.candidates_at(Position::new(0, 2)), DigitSet::EMPTY);
        let before = grid.clone();
        assert!(!fill_completely(&mut grid, &mut rng()));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_count_on_complete_grid_is_one() {
        let mut grid: Grid = SOLVED.parse().unwrap();
        assert_eq!(count_solutions(&mut grid, 2), 1);
    }

    #[test]
    fn test_count_restores_grid() {
        let mut grid: Grid = SOLVED.parse().unwrap();
        grid.clear(Position::new(0, 0));
        grid.clear(Position::new(5, 5));
        let before = grid.clone();
        assert_eq!(count_solutions(&mut grid, 2), 1);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_count_caps_at_two_on_interchangeable_rectangle() {
        // (3,5) and (4,8) hold 1 while (3,8) and (4,5) hold 3, with both
        // rows in one band: erasing all four leaves a rectangle whose pair
        // of digits can be assigned two ways, and the count caps at 2.
        let mut grid: Grid = SOLVED.parse().unwrap();
        for (row, col) in [(3, 5), (3, 8), (4, 5), (4, 8)] {
            grid.clear(Position::new(row, col));
        }
        let before = grid.clone();
        assert_eq!(count_solutions(&mut grid, 2), 2);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_count_is_capped_on_wide_open_grid() {
        let mut grid = Grid::new();
        assert_eq!(count_solutions(&mut grid, 2), 2);
    }

    #[test]
    fn test_single_blank_keeps_unique_count() {
        let mut grid: Grid = SOLVED.parse().unwrap();
        grid.clear(Position::new(8, 8));
        assert_eq!(count_solutions(&mut grid, 2), 1);
    }

    #[test]
    fn test_count_zero_for_contradictory_grid() {
        // Same contradiction as in the fill test: (0, 2) has no candidate.
        let mut grid: Grid = "
            120 345 600
            000 000 000
            007 000 000
            008 000 000
            009 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
        "
        .parse()
        .unwrap();
        assert_eq!(count_solutions(&mut grid, 2), 0);
    }
}
