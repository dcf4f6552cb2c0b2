use gradoku_core::{DigitSet, Grid, Position};
use tinyvec::ArrayVec;

use crate::{
    TechniqueCode,
    technique::{BoxedTechnique, Finding, Technique},
};

/// Finds units with a single empty cell.
///
/// If a row, column, or block has exactly one empty cell, that cell must
/// take the one digit 1-9 absent from the unit. Units are checked row-wise,
/// then column-wise, then block-wise; the first hit wins.
///
/// This is the easiest deduction a human makes — no pencil marks required,
/// just "what's missing here?".
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice;

impl OnlyChoice {
    /// Creates a new `OnlyChoice` technique.
    #[must_use]
    pub const fn new() -> Self {
        OnlyChoice
    }

    fn check_unit<I>(grid: &Grid, cells: I, describe: &str) -> Option<Finding>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut empty: ArrayVec<[Position; 9]> = ArrayVec::new();
        let mut present = DigitSet::EMPTY;
        for pos in cells {
            match grid.get(pos) {
                Some(digit) => {
                    present.insert(digit);
                }
                None => empty.push(pos),
            }
        }
        let &[cell] = &empty[..] else {
            return None;
        };
        // On a grid with a duplicated digit the unit is missing more than one
        // symbol; stay silent rather than guess.
        let digit = DigitSet::FULL.difference(present).single()?;
        Some(Finding {
            cell,
            digit,
            rationale: format!("{digit} is the only value missing from {describe}"),
        })
    }
}

impl Technique for OnlyChoice {
    fn code(&self) -> TechniqueCode {
        TechniqueCode::OnlyChoice
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Finding> {
        for row in 0..9 {
            let cells = (0..9).map(|col| Position::new(row, col));
            if let Some(finding) = Self::check_unit(grid, cells, &format!("row {}", row + 1)) {
                return Some(finding);
            }
        }
        for col in 0..9 {
            let cells = (0..9).map(|row| Position::new(row, col));
            if let Some(finding) = Self::check_unit(grid, cells, &format!("column {}", col + 1)) {
                return Some(finding);
            }
        }
        for block in 0..9 {
            let cells = (0..9).map(|i| Position::from_block(block, i));
            if let Some(finding) = Self::check_unit(grid, cells, &format!("block {}", block + 1)) {
                return Some(finding);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use gradoku_core::Digit;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_fires_on_almost_full_row() {
        // Row 0 = 1..8 with the last cell empty: 9 is forced at (0, 8).
        TechniqueTester::from_str(
            "
            123 456 780
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
        ",
        )
        .assert_fires(&OnlyChoice::new(), Position::new(0, 8), Digit::D9)
        .assert_rationale_contains(&OnlyChoice::new(), "row 1");
    }

    #[test]
    fn test_fires_on_almost_full_column() {
        TechniqueTester::from_str(
            "
            100 000 000
            200 000 000
            300 000 000
            400 000 000
            000 000 000
            500 000 000
            600 000 000
            700 000 000
            800 000 000
        ",
        )
        .assert_fires(&OnlyChoice::new(), Position::new(4, 0), Digit::D9)
        .assert_rationale_contains(&OnlyChoice::new(), "column 1");
    }

    #[test]
    fn test_fires_on_almost_full_block() {
        TechniqueTester::from_str(
            "
            000 123 000
            000 456 000
            000 708 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
        ",
        )
        .assert_fires(&OnlyChoice::new(), Position::new(2, 4), Digit::D9)
        .assert_rationale_contains(&OnlyChoice::new(), "block 2");
    }

    #[test]
    fn test_rows_win_over_columns_and_blocks() {
        // Both row 0 and column 0 are one short; the row-wise scan hits first.
        TechniqueTester::from_str(
            "
            123 456 780
            400 000 000
            700 000 000
            200 000 000
            500 000 000
            800 000 000
            300 000 000
            600 000 000
            000 000 000
        ",
        )
        .assert_fires(&OnlyChoice::new(), Position::new(0, 8), Digit::D9);
    }

    #[test]
    fn test_silent_when_two_cells_empty() {
        TechniqueTester::from_str(
            "
            123 456 700
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
        ",
        )
        .assert_silent(&OnlyChoice::new());
    }

    #[test]
    fn test_silent_on_empty_grid() {
        TechniqueTester::new(Grid::new()).assert_silent(&OnlyChoice::new());
    }
}
