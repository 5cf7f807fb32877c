#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Grid arithmetic for the exact-cover formulation of a Sudoku-like puzzle.
//!
//! A puzzle with box dimension `d` has grid dimension `n = d²`, `n³`
//! candidate placements (one per row/column/digit triple) and four
//! constraint families of `n²` columns each. The types here map a
//! candidate to the matrix column it covers within each family.

/// The `graph` module serializes the constraint matrix as a DOT document.
pub mod graph;

/// Dimensions derived from the box dimension of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridParameters {
    d: usize,
    n: usize,
}

impl GridParameters {
    /// Creates parameters for a puzzle with box dimension `d` and grid
    /// dimension `d²`. `d = 0` is outside the supported domain and yields
    /// degenerate (empty) enumerations.
    #[must_use]
    pub const fn new(d: usize) -> Self {
        Self { d, n: d * d }
    }

    /// Box dimension.
    #[must_use]
    pub const fn box_dim(self) -> usize {
        self.d
    }

    /// Grid dimension `n = d²`.
    #[must_use]
    pub const fn grid_dim(self) -> usize {
        self.n
    }

    /// Total candidate placements, `n³`.
    #[must_use]
    pub const fn candidate_count(self) -> usize {
        self.n * self.n * self.n
    }

    /// Columns per constraint family, `n²`.
    #[must_use]
    pub const fn family_width(self) -> usize {
        self.n * self.n
    }

    /// Total matrix columns across all four families.
    #[must_use]
    pub const fn column_count(self) -> usize {
        ConstraintType::COUNT * self.family_width()
    }
}

/// A `(row, column, digit)` placement hypothesis, each coordinate in `[0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Grid row of the placement.
    pub row: usize,
    /// Grid column of the placement.
    pub col: usize,
    /// Digit placed at the cell.
    pub digit: usize,
}

impl Candidate {
    /// Creates a candidate placement.
    #[must_use]
    pub const fn new(row: usize, col: usize, digit: usize) -> Self {
        Self { row, col, digit }
    }

    /// The candidate's position in row-major, digit-innermost enumeration
    /// order: `row·n² + col·n + digit`.
    #[must_use]
    pub const fn linear_index(self, params: GridParameters) -> usize {
        let n = params.grid_dim();
        self.row * n * n + self.col * n + self.digit
    }
}

/// The four uniqueness rules every candidate covers exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintType {
    /// Each cell holds exactly one digit.
    Cell,
    /// Each digit appears exactly once per row.
    Row,
    /// Each digit appears exactly once per column.
    Column,
    /// Each digit appears exactly once per box.
    Box,
}

impl ConstraintType {
    /// Number of constraint families.
    pub const COUNT: usize = 4;

    /// All families, in matrix block order.
    pub const ALL: [Self; Self::COUNT] = [Self::Cell, Self::Row, Self::Column, Self::Box];

    /// Index of this family within [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Cell => 0,
            Self::Row => 1,
            Self::Column => 2,
            Self::Box => 3,
        }
    }

    /// Global column offset of this family's `n²`-wide block.
    #[must_use]
    pub const fn offset(self, params: GridParameters) -> usize {
        self.index() * params.family_width()
    }

    /// The column within this family's block covered by `candidate`,
    /// always in `[0, n²)`.
    ///
    /// The box formula packs the box index as `c/d + (r/d)·d`; the
    /// quotients must be floored before the multiplications.
    #[must_use]
    pub const fn column(self, params: GridParameters, candidate: Candidate) -> usize {
        let n = params.grid_dim();
        let d = params.box_dim();
        let (r, c, z) = (candidate.row, candidate.col, candidate.digit);
        match self {
            Self::Cell => c + r * n,
            Self::Row => z + r * n,
            Self::Column => z + c * n,
            Self::Box => z + (c / d) * n + (r / d) * d * n,
        }
    }
}
