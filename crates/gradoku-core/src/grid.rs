//! The 9×9 grid and its core operations.

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, Position};

/// A 9×9 Sudoku grid.
///
/// Cells hold `Option<Digit>`: `None` is an empty cell (rendered as `0` in
/// the canonical string encoding). The same type serves as a full solution,
/// a puzzle with givens, or a solver's working grid; which one a value is
/// depends on who owns it, not on its representation.
///
/// # Canonical encoding
///
/// A grid converts to and from an 81-character string, row-major, `0` for
/// blank. [`FromStr`] additionally accepts `.` and `_` for blanks and skips
/// whitespace, so readable block-formatted literals parse too:
///
/// ```
/// use gradoku_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.filled_count(), 30);
/// assert_eq!(grid.to_string().len(), 81);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places a digit at a position, overwriting any previous value.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties a cell, returning the digit it held.
    pub const fn clear(&mut self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()].take()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the addresses of all empty cells, in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos).is_none()).collect()
    }

    /// Returns the set of digits present in a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn row_digits(&self, row: u8) -> DigitSet {
        (0..9)
            .filter_map(|col| self.get(Position::new(row, col)))
            .collect()
    }

    /// Returns the set of digits present in a column.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    #[must_use]
    pub fn col_digits(&self, col: u8) -> DigitSet {
        (0..9)
            .filter_map(|row| self.get(Position::new(row, col)))
            .collect()
    }

    /// Returns the set of digits present in a 3×3 block (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `block` is not in the range 0-8.
    #[must_use]
    pub fn block_digits(&self, block: u8) -> DigitSet {
        (0..9)
            .filter_map(|i| self.get(Position::from_block(block, i)))
            .collect()
    }

    /// Placement-validity predicate: `true` iff `digit` appears nowhere else
    /// in the position's row, column, or containing block.
    ///
    /// Pure and allocation-free (27 cell reads). The cell at `pos` itself is
    /// not inspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradoku_core::{Digit, Grid, Position};
    ///
    /// let grid = Grid::new();
    /// // On an empty grid, every digit is placeable everywhere.
    /// for pos in Position::all() {
    ///     for digit in Digit::ALL {
    ///         assert!(grid.is_placeable(pos, digit));
    ///     }
    /// }
    /// ```
    #[must_use]
    pub fn is_placeable(&self, pos: Position, digit: Digit) -> bool {
        for i in 0..9 {
            let in_row = Position::new(pos.row(), i);
            if in_row != pos && self.get(in_row) == Some(digit) {
                return false;
            }
            let in_col = Position::new(i, pos.col());
            if in_col != pos && self.get(in_col) == Some(digit) {
                return false;
            }
            let in_block = Position::from_block(pos.block_index(), i);
            if in_block != pos && self.get(in_block) == Some(digit) {
                return false;
            }
        }
        true
    }

    /// Returns the candidate set of an empty cell: every digit not present
    /// in the cell's row, column, or block.
    ///
    /// Candidates are recomputed from the grid on every call; nothing is
    /// cached, so the result is always consistent with the current contents.
    /// For a filled cell this returns [`DigitSet::EMPTY`].
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        if self.get(pos).is_some() {
            return DigitSet::EMPTY;
        }
        let used = self.row_digits(pos.row())
            | self.col_digits(pos.col())
            | self.block_digits(pos.block_index());
        DigitSet::FULL.difference(used)
    }

    /// Swaps two rows in place.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    pub fn swap_rows(&mut self, a: u8, b: u8) {
        if a == b {
            return;
        }
        for col in 0..9 {
            self.cells
                .swap(Position::new(a, col).index(), Position::new(b, col).index());
        }
    }

    /// Swaps two columns in place.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    pub fn swap_cols(&mut self, a: u8, b: u8) {
        if a == b {
            return;
        }
        for row in 0..9 {
            self.cells
                .swap(Position::new(row, a).index(), Position::new(row, b).index());
        }
    }

    /// Relabels two digits: every occurrence of `a` becomes `b` and vice
    /// versa.
    pub fn swap_digits(&mut self, a: Digit, b: Digit) {
        if a == b {
            return;
        }
        for cell in &mut self.cells {
            if *cell == Some(a) {
                *cell = Some(b);
            } else if *cell == Some(b) {
                *cell = Some(a);
            }
        }
    }

    /// Transposes the grid in place: cell `(r, c)` swaps with cell `(c, r)`.
    pub fn transpose(&mut self) {
        for row in 0..9u8 {
            for col in (row + 1)..9 {
                self.cells
                    .swap(Position::new(row, col).index(), Position::new(col, row).index());
            }
        }
    }

    /// Returns `true` if the grid is completely and validly solved: every
    /// row, column, and block is a permutation of 1-9.
    #[must_use]
    pub fn check_solved(&self) -> bool {
        (0..9).all(|i| {
            self.row_digits(i) == DigitSet::FULL
                && self.col_digits(i) == DigitSet::FULL
                && self.block_digits(i) == DigitSet::FULL
        })
    }

    /// Returns `true` if every filled cell of `self` holds the same digit in
    /// `other` (pointwise subset).
    ///
    /// A carved puzzle always satisfies `puzzle.is_subgrid_of(&solution)`.
    #[must_use]
    pub fn is_subgrid_of(&self, other: &Self) -> bool {
        Position::all().all(|pos| match self.get(pos) {
            Some(digit) => other.get(pos) == Some(digit),
            None => true,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_char('0')?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\"{self}\")")
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut index = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            if index >= 81 {
                return Err(ParseGridError::WrongLength { found: index + 1 });
            }
            match character {
                '0' | '.' | '_' => {}
                '1'..='9' => {
                    let value = character.to_digit(10).expect("digit character");
                    #[expect(clippy::cast_possible_truncation)]
                    let digit = Digit::from_value(value as u8);
                    grid.cells[index] = Some(digit);
                }
                _ => return Err(ParseGridError::InvalidCharacter { character, index }),
            }
            index += 1;
        }
        if index != 81 {
            return Err(ParseGridError::WrongLength { found: index });
        }
        Ok(grid)
    }
}

/// Error returned when parsing a grid from a string fails.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {found}")]
    WrongLength {
        /// Number of cell characters found.
        found: usize,
    },
    /// The input contained a character that is not a digit, blank marker, or
    /// whitespace.
    #[display("invalid character {character:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Row-major cell index at which it appeared.
        index: usize,
    },
}
