//! Scratch grid for technique-based solving.

use sudogen_core::{CandidateSet, ConsistencyError, Dimension, Grid, House, Position};
use tinyvec::ArrayVec;

/// Solver state for technique-based solving.
///
/// Wraps a [`Grid`] and exposes the solver-oriented operations techniques
/// need: placing a symbol with eager peer propagation, removing single
/// candidates, and house-level candidate queries. Techniques never touch
/// the underlying grid directly.
///
/// # Examples
///
/// ```
/// use sudogen_core::{Dimension, Position};
/// use sudogen_solver::TechniqueGrid;
///
/// let mut grid = TechniqueGrid::new(Dimension::Three);
/// assert!(grid.place(Position::new(0, 0), 5));
/// assert!(!grid.candidates_at(Position::new(0, 1)).contains(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueGrid {
    grid: Grid,
}

impl From<Grid> for TechniqueGrid {
    fn from(grid: Grid) -> Self {
        Self { grid }
    }
}

impl TechniqueGrid {
    /// Creates an empty technique grid with all candidates available.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self::from(Grid::new(dimension))
    }

    /// Builds a scratch copy from a grid, recomputing every candidate mask
    /// from the current values.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut scratch = grid.clone();
        scratch.recompute_candidates();
        Self::from(scratch)
    }

    /// Returns the board dimension.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.grid.dimension()
    }

    /// Returns the line length and symbol count.
    #[must_use]
    pub fn unit(&self) -> u8 {
        self.grid.unit()
    }

    /// Returns the value at a position (`0` = empty).
    #[must_use]
    pub fn value(&self, pos: Position) -> u8 {
        self.grid.value(pos)
    }

    /// Returns the candidate set at a position.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> CandidateSet {
        self.grid.candidates(pos)
    }

    /// Places a value and propagates the elimination to all peers.
    ///
    /// Returns `false` if the cell is filled or the value is not a
    /// candidate.
    pub fn place(&mut self, pos: Position, value: u8) -> bool {
        self.grid.place(pos, value)
    }

    /// Removes a candidate from an empty cell. Returns `true` if it was
    /// present.
    pub fn remove_candidate(&mut self, pos: Position, value: u8) -> bool {
        self.grid.remove_candidate(pos, value)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid.empty_count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_complete()
    }

    /// Verifies the Sudoku invariant and candidate viability.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if a placed value is duplicated in a
    /// peer or an empty cell has no candidates left.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        self.grid.check_consistency()
    }

    /// Returns a copy of the underlying grid.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        self.grid.clone()
    }

    /// Returns `true` if `value` is already placed somewhere in `house`.
    #[must_use]
    pub fn value_placed_in_house(&self, house: House, value: u8) -> bool {
        house
            .positions(self.dimension())
            .any(|pos| self.value(pos) == value)
    }

    /// Returns the in-house cell offsets of empty cells where `value` is
    /// still a candidate.
    #[must_use]
    pub fn candidate_offsets_in_house(&self, house: House, value: u8) -> ArrayVec<[u8; 16]> {
        let dim = self.dimension();
        let mut offsets = ArrayVec::new();
        for i in 0..dim.unit() {
            let pos = house.position_at(dim, i);
            if self.value(pos) == 0 && self.candidates_at(pos).contains(value) {
                offsets.push(i);
            }
        }
        offsets
    }

    /// Returns the in-house cell offsets of empty cells.
    #[must_use]
    pub fn empty_offsets_in_house(&self, house: House) -> ArrayVec<[u8; 16]> {
        let dim = self.dimension();
        let mut offsets = ArrayVec::new();
        for i in 0..dim.unit() {
            if self.value(house.position_at(dim, i)) == 0 {
                offsets.push(i);
            }
        }
        offsets
    }
}
