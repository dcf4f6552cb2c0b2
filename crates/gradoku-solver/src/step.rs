//! The solving trace: steps, deductions, and technique codes.
//!
//! A solving run produces an ordered [`Trace`] of [`Step`]s. Every deduction
//! step carries the same structured payload — technique code, target cell,
//! placed digit, rationale text, and a grid snapshot — and the run is closed
//! by exactly one sentinel: [`Step::Solved`] or [`Step::Stuck`].

use std::fmt::{self, Display};

use gradoku_core::{Digit, Grid, Position};

/// Closed enumeration of technique identifiers.
///
/// The first three are implemented; the rest are reserved slots that exist so
/// the cost table and trace format stay stable as techniques are added.
///
/// Each code has a short mnemonic (used in logs and serialized traces) and a
/// human-readable name (used in rationale text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechniqueCode {
    /// Only Choice: a unit with a single empty cell takes the missing digit.
    OnlyChoice,
    /// Single Candidate: a cell with exactly one remaining candidate.
    SingleCandidate,
    /// Two Out of Three: a digit present in two of a band's three rows (or a
    /// stack's three columns) is pinned in the remaining one.
    TwoOutOfThree,
    /// Naked Pair (reserved, not yet implemented).
    NakedPair,
    /// Hidden Pair (reserved, not yet implemented).
    HiddenPair,
    /// X-Wing (reserved, not yet implemented).
    XWing,
    /// Swordfish (reserved, not yet implemented).
    Swordfish,
}

impl TechniqueCode {
    /// All codes, implemented first, in ascending difficulty order.
    pub const ALL: [Self; 7] = [
        Self::OnlyChoice,
        Self::SingleCandidate,
        Self::TwoOutOfThree,
        Self::NakedPair,
        Self::HiddenPair,
        Self::XWing,
        Self::Swordfish,
    ];

    /// Returns the short mnemonic for this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnlyChoice => "ocr",
            Self::SingleCandidate => "scr",
            Self::TwoOutOfThree => "totr",
            Self::NakedPair => "npr",
            Self::HiddenPair => "hpr",
            Self::XWing => "xwg",
            Self::Swordfish => "swf",
        }
    }

    /// Returns the human-readable technique name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OnlyChoice => "Only Choice",
            Self::SingleCandidate => "Single Candidate",
            Self::TwoOutOfThree => "Two Out of Three",
            Self::NakedPair => "Naked Pair",
            Self::HiddenPair => "Hidden Pair",
            Self::XWing => "X-Wing",
            Self::Swordfish => "Swordfish",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::OnlyChoice => 0,
            Self::SingleCandidate => 1,
            Self::TwoOutOfThree => 2,
            Self::NakedPair => 3,
            Self::HiddenPair => 4,
            Self::XWing => 5,
            Self::Swordfish => 6,
        }
    }
}

impl Display for TechniqueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One deduction: a single placement, justified.
///
/// The snapshot records the working grid immediately after the placement, so
/// a trace can be replayed for display or animation. `cost` is `None` until
/// a [`Scorer`](crate::Scorer) prices the trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduction {
    /// Which technique fired.
    pub code: TechniqueCode,
    /// The cell that was filled.
    pub cell: Position,
    /// The digit that was placed.
    pub digit: Digit,
    /// Human-readable justification, naming the rule and 1-indexed
    /// coordinates.
    pub rationale: String,
    /// The working grid immediately after this placement.
    pub snapshot: Grid,
    /// Cost assigned by the scorer; `None` until scored.
    pub cost: Option<u32>,
}

/// One entry in a solving trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A technique fired and placed one digit.
    Deduce(Deduction),
    /// All cells are filled. Carries the total difficulty score once the
    /// trace has been priced.
    Solved {
        /// Total difficulty score; `None` until scored.
        score: Option<u32>,
    },
    /// No technique applies but empty cells remain. A valid terminal state,
    /// not an error: not every puzzle yields to the implemented rule set.
    Stuck,
}

impl Step {
    /// Returns `true` for the [`Solved`](Self::Solved) and
    /// [`Stuck`](Self::Stuck) sentinels.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved { .. } | Self::Stuck)
    }
}

/// An ordered solving trace: zero or more deductions closed by one sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub(crate) steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn push(&mut self, step: Step) {
        debug_assert!(
            self.steps.last().is_none_or(|last| !last.is_terminal()),
            "trace already terminated"
        );
        self.steps.push(step);
    }

    /// Returns all steps in order, the terminal sentinel last.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterates over the deduction steps, skipping sentinels.
    pub fn deductions(&self) -> impl Iterator<Item = &Deduction> {
        self.steps.iter().filter_map(|step| match step {
            Step::Deduce(deduction) => Some(deduction),
            _ => None,
        })
    }

    /// Returns `true` if the trace ends in [`Step::Solved`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.steps.last(), Some(Step::Solved { .. }))
    }

    /// Returns the total difficulty score, if the trace is solved and has
    /// been priced by a [`Scorer`](crate::Scorer).
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        match self.steps.last() {
            Some(Step::Solved { score }) => *score,
            _ => None,
        }
    }

    /// Returns the grid after the last deduction, or `None` for a trace with
    /// no deductions.
    #[must_use]
    pub fn final_snapshot(&self) -> Option<&Grid> {
        self.deductions().last().map(|deduction| &deduction.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        for (i, a) in TechniqueCode::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
            for b in &TechniqueCode::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_trace_accessors() {
        let mut trace = Trace::default();
        assert!(!trace.is_solved());
        assert_eq!(trace.score(), None);
        assert_eq!(trace.final_snapshot(), None);

        let grid = Grid::new();
        trace.push(Step::Deduce(Deduction {
            code: TechniqueCode::OnlyChoice,
            cell: Position::new(0, 0),
            digit: Digit::D1,
            rationale: String::from("test"),
            snapshot: grid.clone(),
            cost: None,
        }));
        trace.push(Step::Solved { score: None });

        assert!(trace.is_solved());
        assert_eq!(trace.score(), None);
        assert_eq!(trace.deductions().count(), 1);
        assert_eq!(trace.final_snapshot(), Some(&grid));
    }

    #[test]
    fn test_stuck_trace_is_not_solved() {
        let mut trace = Trace::default();
        trace.push(Step::Stuck);
        assert!(!trace.is_solved());
        assert_eq!(trace.score(), None);
    }
}
