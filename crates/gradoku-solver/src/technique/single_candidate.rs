use gradoku_core::{Grid, Position};

use crate::{
    TechniqueCode,
    technique::{BoxedTechnique, Finding, Technique},
};

/// Finds cells whose candidate set has shrunk to a single digit.
///
/// For each empty cell (scanned row-major), the candidate set is recomputed
/// from the current grid; if exactly one digit survives the cell's row,
/// column, and block, that digit is placed. This is the pencil-mark
/// counterpart of [`OnlyChoice`](super::OnlyChoice): the unit may still have
/// many empty cells, but this particular cell has only one way to go.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleCandidate;

impl SingleCandidate {
    /// Creates a new `SingleCandidate` technique.
    #[must_use]
    pub const fn new() -> Self {
        SingleCandidate
    }
}

impl Technique for SingleCandidate {
    fn code(&self) -> TechniqueCode {
        TechniqueCode::SingleCandidate
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Finding> {
        for cell in Position::all() {
            if grid.get(cell).is_some() {
                continue;
            }
            if let Some(digit) = grid.candidates_at(cell).single() {
                return Some(Finding {
                    cell,
                    digit,
                    rationale: format!(
                        "{digit} is the only candidate left at {cell}: \
                         every other value already occurs in its row, column, or block"
                    ),
                });
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
    fn test_fires_when_units_leave_one_candidate() {
        // (4, 4) sees 1, 2, 8, 3, 4 in its row, 5, 6, 7 in its column, and
        // 7, 8 in its block; only 9 survives.
        TechniqueTester::from_str(
            "
            000 000 000
            000 050 000
            000 060 000
            000 070 000
            120 008 340
            000 000 000
            000 000 000
            000 000 000
            000 000 000
        ",
        )
        .assert_fires(&SingleCandidate::new(), Position::new(4, 4), Digit::D9)
        .assert_rationale_contains(&SingleCandidate::new(), "only candidate");
    }

    #[test]
    fn test_reports_first_hit_row_major() {
        // Both (0, 4) and (8, 8) are single-candidate cells (each sees all
        // of 1-8); the row-major scan must report (0, 4) first.
        TechniqueTester::from_str(
            "
            123 400 000
            000 506 000
            000 000 000
            000 070 000
            000 080 007
            000 000 008
            000 000 000
            000 000 560
            432 100 000
        ",
        )
        .assert_fires(&SingleCandidate::new(), Position::new(0, 4), Digit::D9);
    }

    #[test]
    fn test_silent_when_every_cell_has_choices() {
        TechniqueTester::new(Grid::new()).assert_silent(&SingleCandidate::new());
    }
}
