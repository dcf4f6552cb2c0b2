//! Solution-preserving symmetry transformations.
//!
//! A freshly backtracked solution carries the structural bias of the search
//! order (earlier cells are filled from earlier shuffles of the same digit
//! list, so run-to-run grids look related). Applying a random burst of
//! validity-preserving symmetries decorrelates the published solution from
//! that bias.

use gradoku_core::{Digit, Grid};
use rand::RngExt;

/// Upper bound on the number of operations applied by
/// [`apply_random_transformations`].
pub const MAX_TRANSFORMATIONS: usize = 100;

/// A single solution-preserving symmetry operation.
///
/// Every variant maps valid solutions to valid solutions, and all four
/// mutate the grid in place — including [`Transpose`](Self::Transpose),
/// which swaps cell contents across the main diagonal rather than producing
/// a new grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    /// Swap two rows within the same band.
    SwapBandRows {
        /// Band index (0-2).
        band: u8,
        /// First row offset within the band (0-2).
        a: u8,
        /// Second row offset within the band (0-2).
        b: u8,
    },
    /// Swap two columns within the same stack.
    SwapStackColumns {
        /// Stack index (0-2).
        stack: u8,
        /// First column offset within the stack (0-2).
        a: u8,
        /// Second column offset within the stack (0-2).
        b: u8,
    },
    /// Exchange all occurrences of two digits.
    RelabelDigits {
        /// One digit of the pair.
        a: Digit,
        /// The other digit.
        b: Digit,
    },
    /// Mirror the grid across its main diagonal.
    Transpose,
}

impl Transformation {
    /// Draws a uniformly random transformation.
    ///
    /// Offset and digit pairs are drawn independently, so an operation may
    /// turn out to be the identity (both offsets equal); that matches the
    /// uniform-choice contract and merely wastes one of the random
    /// applications.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: RngExt + ?Sized,
    {
        match rng.random_range(0..4) {
            0 => Self::SwapBandRows {
                band: rng.random_range(0..3),
                a: rng.random_range(0..3),
                b: rng.random_range(0..3),
            },
            1 => Self::SwapStackColumns {
                stack: rng.random_range(0..3),
                a: rng.random_range(0..3),
                b: rng.random_range(0..3),
            },
            2 => Self::RelabelDigits {
                a: Digit::from_value(rng.random_range(1..=9)),
                b: Digit::from_value(rng.random_range(1..=9)),
            },
            _ => Self::Transpose,
        }
    }

    /// Applies the transformation to the grid in place.
    pub fn apply(self, grid: &mut Grid) {
        match self {
            Self::SwapBandRows { band, a, b } => grid.swap_rows(band * 3 + a, band * 3 + b),
            Self::SwapStackColumns { stack, a, b } => grid.swap_cols(stack * 3 + a, stack * 3 + b),
            Self::RelabelDigits { a, b } => grid.swap_digits(a, b),
            Self::Transpose => grid.transpose(),
        }
    }
}

/// Applies a random number (uniform `0..=`[`MAX_TRANSFORMATIONS`]) of random
/// transformations to the grid.
///
/// # Examples
///
/// ```
/// use gradoku_core::Grid;
/// use gradoku_generator::{backtrack::fill_completely, transform};
///
/// let mut rng = rand::rng();
/// let mut solution = Grid::new();
/// fill_completely(&mut solution, &mut rng);
///
/// transform::apply_random_transformations(&mut solution, &mut rng);
/// assert!(solution.check_solved());
/// ```
pub fn apply_random_transformations<R>(grid: &mut Grid, rng: &mut R)
where
    R: RngExt + ?Sized,
{
    let count = rng.random_range(0..=MAX_TRANSFORMATIONS);
    for _ in 0..count {
        Transformation::random(rng).apply(grid);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn solved() -> Grid {
        SOLVED.parse().unwrap()
    }

    #[test]
    fn test_each_operation_preserves_validity() {
        let operations = [
            Transformation::SwapBandRows { band: 1, a: 0, b: 2 },
            Transformation::SwapStackColumns { stack: 2, a: 1, b: 0 },
            Transformation::RelabelDigits {
                a: Digit::D4,
                b: Digit::D8,
            },
            Transformation::Transpose,
        ];
        for operation in operations {
            let mut grid = solved();
            operation.apply(&mut grid);
            assert!(grid.check_solved(), "{operation:?} broke the solution");
        }
    }

    #[test]
    fn test_transpose_has_observable_effect() {
        let mut grid = solved();
        Transformation::Transpose.apply(&mut grid);
        assert_ne!(grid, solved());
        Transformation::Transpose.apply(&mut grid);
        assert_eq!(grid, solved());
    }

    #[test]
    fn test_random_burst_preserves_validity() {
        let mut rng = Pcg64::seed_from_u64(42);
        for _ in 0..20 {
            let mut grid = solved();
            apply_random_transformations(&mut grid, &mut rng);
            assert!(grid.check_solved());
        }
    }

    proptest! {
        /// Any sequence of transformations maps the solved grid to a solved
        /// grid.
        #[test]
        fn prop_sequences_preserve_validity(seed in any::<u64>(), len in 0usize..50) {
            let mut rng = Pcg64::seed_from_u64(seed);
            let mut grid = solved();
            for _ in 0..len {
                Transformation::random(&mut rng).apply(&mut grid);
            }
            prop_assert!(grid.check_solved());
        }
    }
}
