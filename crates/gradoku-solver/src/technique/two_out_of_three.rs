use gradoku_core::{Digit, Grid, Position};
use tinyvec::ArrayVec;

use crate::{
    TechniqueCode,
    technique::{BoxedTechnique, Finding, Technique},
};

/// Pins a digit inside a band or stack where it already occupies two of the
/// three parallel lines.
///
/// Take a band (three row-aligned blocks) and a digit. If the digit already
/// sits in two of the band's three rows, its occurrence in the remaining
/// block is confined to the remaining row. When, of that row's three cells
/// inside the block, exactly one is empty and not ruled out by its own
/// column already containing the digit, the placement is forced. The same
/// argument applies to stacks with rows and columns exchanged.
///
/// Bands are scanned before stacks, top-to-bottom / left-to-right, digits in
/// ascending order within each.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoOutOfThree;

impl TwoOutOfThree {
    /// Creates a new `TwoOutOfThree` technique.
    #[must_use]
    pub const fn new() -> Self {
        TwoOutOfThree
    }

    fn check_band(grid: &Grid, band: u8, digit: Digit) -> Option<Finding> {
        let rows = [band * 3, band * 3 + 1, band * 3 + 2];
        let occupied: ArrayVec<[u8; 3]> = rows
            .into_iter()
            .filter(|&row| grid.row_digits(row).contains(digit))
            .collect();
        let &[a, b] = &occupied[..] else {
            return None;
        };
        let free_row = rows.into_iter().find(|&row| row != a && row != b)?;

        // The two occurrences occupy two distinct blocks of the band, so
        // exactly one block remains open for this digit.
        let blocks = [band * 3, band * 3 + 1, band * 3 + 2];
        let open: ArrayVec<[u8; 3]> = blocks
            .into_iter()
            .filter(|&block| !grid.block_digits(block).contains(digit))
            .collect();
        let &[block] = &open[..] else {
            return None;
        };

        let first_col = block % 3 * 3;
        let mut cells: ArrayVec<[Position; 3]> = ArrayVec::new();
        for col in first_col..first_col + 3 {
            let pos = Position::new(free_row, col);
            if grid.get(pos).is_none() && !grid.col_digits(col).contains(digit) {
                cells.push(pos);
            }
        }
        let &[cell] = &cells[..] else {
            return None;
        };
        Some(Finding {
            cell,
            digit,
            rationale: format!(
                "{digit} already sits in two of the three rows through block {}; \
                 in row {} it can only go at {cell}",
                block + 1,
                free_row + 1,
            ),
        })
    }

    fn check_stack(grid: &Grid, stack: u8, digit: Digit) -> Option<Finding> {
        let cols = [stack * 3, stack * 3 + 1, stack * 3 + 2];
        let occupied: ArrayVec<[u8; 3]> = cols
            .into_iter()
            .filter(|&col| grid.col_digits(col).contains(digit))
            .collect();
        let &[a, b] = &occupied[..] else {
            return None;
        };
        let free_col = cols.into_iter().find(|&col| col != a && col != b)?;

        let blocks = [stack, stack + 3, stack + 6];
        let open: ArrayVec<[u8; 3]> = blocks
            .into_iter()
            .filter(|&block| !grid.block_digits(block).contains(digit))
            .collect();
        let &[block] = &open[..] else {
            return None;
        };

        let first_row = block / 3 * 3;
        let mut cells: ArrayVec<[Position; 3]> = ArrayVec::new();
        for row in first_row..first_row + 3 {
            let pos = Position::new(row, free_col);
            if grid.get(pos).is_none() && !grid.row_digits(row).contains(digit) {
                cells.push(pos);
            }
        }
        let &[cell] = &cells[..] else {
            return None;
        };
        Some(Finding {
            cell,
            digit,
            rationale: format!(
                "{digit} already sits in two of the three columns through block {}; \
                 in column {} it can only go at {cell}",
                block + 1,
                free_col + 1,
            ),
        })
    }
}

impl Technique for TwoOutOfThree {
    fn code(&self) -> TechniqueCode {
        TechniqueCode::TwoOutOfThree
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Finding> {
        for band in 0..3 {
            for digit in Digit::ALL {
                if let Some(finding) = Self::check_band(grid, band, digit) {
                    return Some(finding);
                }
            }
        }
        for stack in 0..3 {
            for digit in Digit::ALL {
                if let Some(finding) = Self::check_stack(grid, stack, digit) {
                    return Some(finding);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_pins_digit_in_band() {
        // 5 occupies rows 0 and 1 of the top band, so block 0's 5 must land
        // in row 2. Columns 0 and 1 already hold a 5, leaving only (2, 2).
        TechniqueTester::from_str(
            "
            000 500 000
            000 000 500
            000 000 000
            000 000 000
            000 000 000
            500 000 000
            000 000 000
            050 000 000
            000 000 000
        ",
        )
        .assert_fires(&TwoOutOfThree::new(), Position::new(2, 2), Digit::D5)
        .assert_rationale_contains(&TwoOutOfThree::new(), "two of the three rows");
    }

    #[test]
    fn test_pins_digit_in_stack() {
        // 5 occupies columns 0 and 1 of the left stack, confining block 6's
        // 5 to column 2. Two of that column's block cells are filled, so
        // (7, 2) is forced. No band holds 5 in two rows, so only the
        // column-wise scan can fire.
        TechniqueTester::from_str(
            "
            500 000 000
            000 000 000
            000 000 000
            000 000 000
            050 000 000
            000 000 000
            001 000 000
            000 000 000
            002 000 000
        ",
        )
        .assert_fires(&TwoOutOfThree::new(), Position::new(7, 2), Digit::D5)
        .assert_rationale_contains(&TwoOutOfThree::new(), "two of the three columns");
    }

    #[test]
    fn test_silent_when_two_cells_remain() {
        // As in the band case above, but without the 5 in column 1: both
        // (2, 1) and (2, 2) could host it, so nothing is conclusive.
        TechniqueTester::from_str(
            "
            000 500 000
            000 000 500
            000 000 000
            000 000 000
            000 000 000
            500 000 000
            000 000 000
            000 000 000
            000 000 000
        ",
        )
        .assert_silent(&TwoOutOfThree::new());
    }

    #[test]
    fn test_silent_when_digit_occupies_all_three_rows() {
        TechniqueTester::from_str(
            "
            500 000 000
            000 500 000
            000 000 500
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
            000 000 000
        ",
        )
        .assert_silent(&TwoOutOfThree::new());
    }
}
