//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] is a small fluent harness for asserting what a
//! technique does (or refuses to do) on a fixed grid.
//!
//! # Example
//!
//! ```
//! use gradoku_core::{Digit, Position};
//! use gradoku_solver::{technique::OnlyChoice, testing::TechniqueTester};
//!
//! TechniqueTester::from_str(
//!     "
//!     123 456 780
//!     000 000 000
//!     000 000 000
//!     000 000 000
//!     000 000 000
//!     000 000 000
//!     000 000 000
//!     000 000 000
//!     000 000 000
//! ",
//! )
//! .assert_fires(&OnlyChoice::new(), Position::new(0, 8), Digit::D9);
//! ```

use std::str::FromStr as _;

use gradoku_core::{Digit, Grid, Position};

use crate::technique::Technique;

/// A test harness for verifying technique implementations.
///
/// All assertion methods return `self` for chaining and panic with a
/// descriptive message on failure, using `#[track_caller]` so the failure
/// points at the test, not at this module.
#[derive(Debug)]
pub struct TechniqueTester {
    grid: Grid,
}

impl TechniqueTester {
    /// Creates a tester over the given grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Creates a tester from a grid string (see [`Grid`]'s `FromStr`).
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid grid.
    #[must_use]
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(Grid::from_str(s).expect("invalid grid literal"))
    }

    /// Asserts that the technique fires with exactly this cell and digit.
    #[track_caller]
    pub fn assert_fires<T>(self, technique: &T, cell: Position, digit: Digit) -> Self
    where
        T: Technique,
    {
        let code = technique.code();
        let finding = technique
            .find(&self.grid)
            .unwrap_or_else(|| panic!("expected {code} to fire, but it found nothing"));
        assert_eq!(
            finding.cell, cell,
            "expected {code} to target {cell}, but it targeted {}",
            finding.cell
        );
        assert_eq!(
            finding.digit, digit,
            "expected {code} to place {digit} at {cell}, but it placed {}",
            finding.digit
        );
        self
    }

    /// Asserts that the technique does not fire.
    #[track_caller]
    pub fn assert_silent<T>(self, technique: &T) -> Self
    where
        T: Technique,
    {
        if let Some(finding) = technique.find(&self.grid) {
            panic!(
                "expected {} to stay silent, but it placed {} at {}",
                technique.code(),
                finding.digit,
                finding.cell
            );
        }
        self
    }

    /// Asserts that the technique fires and its rationale mentions `needle`.
    #[track_caller]
    pub fn assert_rationale_contains<T>(self, technique: &T, needle: &str) -> Self
    where
        T: Technique,
    {
        let code = technique.code();
        let finding = technique
            .find(&self.grid)
            .unwrap_or_else(|| panic!("expected {code} to fire, but it found nothing"));
        assert!(
            finding.rationale.contains(needle),
            "expected rationale of {code} to mention {needle:?}, got: {}",
            finding.rationale
        );
        self
    }

    /// Applies the technique's finding to the grid and returns the tester,
    /// for multi-step scenarios.
    ///
    /// # Panics
    ///
    /// Panics if the technique does not fire or its placement conflicts with
    /// the grid.
    #[must_use]
    #[track_caller]
    pub fn apply<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        let code = technique.code();
        let finding = technique
            .find(&self.grid)
            .unwrap_or_else(|| panic!("expected {code} to fire, but it found nothing"));
        assert!(
            self.grid.get(finding.cell).is_none() && self.grid.is_placeable(finding.cell, finding.digit),
            "{code} produced a conflicting placement: {} at {}",
            finding.digit,
            finding.cell
        );
        self.grid.set(finding.cell, finding.digit);
        self
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
