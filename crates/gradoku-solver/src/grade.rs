//! Difficulty scoring: per-technique costs, the scorer, and named grades.
//!
//! A solved [`Trace`] is priced step by step: the first time a technique
//! fires it charges its *first use* cost (the solver had to spot a new kind
//! of pattern), and every later firing charges the cheaper *repeat* cost.
//! The summed total maps onto a named [`Grade`] band.

use std::{fmt, ops::Range};

use crate::step::{Step, TechniqueCode, Trace};

/// The pair of costs a technique can charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueCost {
    /// Cost the first time the technique appears in a trace.
    pub first_use: u32,
    /// Cost for every subsequent appearance.
    pub repeat: u32,
}

/// Per-technique cost table, indexed by [`TechniqueCode`].
///
/// The table carries entries for every code in the closed enumeration,
/// including the reserved not-yet-implemented techniques, so traces remain
/// priceable as the roster grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    costs: [TechniqueCost; 7],
}

impl CostTable {
    /// The standard cost table.
    ///
    /// Easy scanning techniques are cheap and flat; pattern techniques carry
    /// a large first-use premium over their repeat cost.
    pub const STANDARD: Self = Self {
        costs: [
            // Only Choice
            TechniqueCost {
                first_use: 100,
                repeat: 100,
            },
            // Single Candidate
            TechniqueCost {
                first_use: 150,
                repeat: 100,
            },
            // Two Out of Three
            TechniqueCost {
                first_use: 200,
                repeat: 120,
            },
            // Naked Pair (reserved)
            TechniqueCost {
                first_use: 750,
                repeat: 500,
            },
            // Hidden Pair (reserved)
            TechniqueCost {
                first_use: 1500,
                repeat: 1200,
            },
            // X-Wing (reserved)
            TechniqueCost {
                first_use: 2800,
                repeat: 1600,
            },
            // Swordfish (reserved)
            TechniqueCost {
                first_use: 8000,
                repeat: 6000,
            },
        ],
    };

    /// Creates a table from explicit cost pairs, one per code in
    /// [`TechniqueCode::ALL`] order.
    #[must_use]
    pub const fn new(costs: [TechniqueCost; 7]) -> Self {
        Self { costs }
    }

    /// Returns the cost pair for a technique.
    #[must_use]
    pub const fn cost_of(&self, code: TechniqueCode) -> TechniqueCost {
        self.costs[code.index()]
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Prices solving traces against a [`CostTable`].
///
/// # Examples
///
/// ```
/// use gradoku_core::Grid;
/// use gradoku_solver::{Grade, Scorer, TechniqueSolver};
///
/// let puzzle: Grid = "
///     534678912
///     672195348
///     198342567
///     859761423
///     426853791
///     713924856
///     961537284
///     287419635
///     3452861_9
/// "
/// .parse()
/// .unwrap();
///
/// let mut trace = TechniqueSolver::with_standard_techniques().solve(&puzzle)?;
/// let score = Scorer::default().score(&mut trace).unwrap();
/// assert_eq!(score, 100); // a single Only Choice
/// assert_eq!(Grade::classify(score), Some(Grade::Beginner));
/// # Ok::<(), gradoku_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    table: CostTable,
}

impl Scorer {
    /// Creates a scorer over a custom cost table.
    #[must_use]
    pub const fn new(table: CostTable) -> Self {
        Self { table }
    }

    /// Prices a trace in place.
    ///
    /// Returns `None` — and assigns nothing — if the trace ends in
    /// [`Step::Stuck`]: no difficulty is defined for a puzzle the techniques
    /// cannot finish. Otherwise every deduction's `cost` is filled in (first
    /// use vs. repeat, tracked independently per technique), the total is
    /// written into the [`Step::Solved`] sentinel, and returned.
    pub fn score(&self, trace: &mut Trace) -> Option<u32> {
        if !trace.is_solved() {
            return None;
        }
        let mut seen = [false; 7];
        let mut total = 0u32;
        for step in &mut trace.steps {
            match step {
                Step::Deduce(deduction) => {
                    let index = deduction.code.index();
                    let pair = self.table.cost_of(deduction.code);
                    let cost = if seen[index] { pair.repeat } else { pair.first_use };
                    seen[index] = true;
                    deduction.cost = Some(cost);
                    total += cost;
                }
                Step::Solved { score } => *score = Some(total),
                Step::Stuck => unreachable!("stuck trace already rejected"),
            }
        }
        Some(total)
    }
}

/// A named difficulty band.
///
/// Bands map score ranges to names. Adjacent ranges deliberately overlap —
/// a score in an overlap is legitimately either band. [`Grade::classify`]
/// resolves the ambiguity by returning the easiest matching band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// Scores in `0..4500`.
    Beginner,
    /// Scores in `4300..5600`.
    Easy,
    /// Scores in `5300..7200`.
    Medium,
    /// Scores in `6500..9300`.
    Tricky,
    /// Scores in `8300..14000`.
    Fiendish,
    /// Scores of `11000` and up.
    Diabolical,
}

impl Grade {
    /// All grades, easiest first.
    pub const ALL: [Self; 6] = [
        Self::Beginner,
        Self::Easy,
        Self::Medium,
        Self::Tricky,
        Self::Fiendish,
        Self::Diabolical,
    ];

    /// Returns the `[min, max)` score range of this band.
    #[must_use]
    pub const fn range(self) -> Range<u32> {
        match self {
            Self::Beginner => 0..4500,
            Self::Easy => 4300..5600,
            Self::Medium => 5300..7200,
            Self::Tricky => 6500..9300,
            Self::Fiendish => 8300..14_000,
            Self::Diabolical => 11_000..u32::MAX,
        }
    }

    /// Returns the easiest band whose range contains the score.
    ///
    /// Returns `None` only for `u32::MAX`, which no half-open band covers.
    #[must_use]
    pub fn classify(score: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.range().contains(&score))
    }

    /// Returns the band name in display form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Tricky => "Tricky",
            Self::Fiendish => "Fiendish",
            Self::Diabolical => "Diabolical",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
