//! Immutable puzzle snapshots.

use crate::{Dimension, Grading, Grid, Position, SymbolType, Symmetry};

/// A single puzzle clue: a fixed value at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Given {
    /// Row of the clue.
    pub row: u8,
    /// Column of the clue.
    pub col: u8,
    /// The clue value (`1..=unit`).
    pub value: u8,
}

/// An immutable snapshot of a generated puzzle.
///
/// A puzzle consists of its given cells plus the dimension, symbol type,
/// symmetry, and grading it was generated with. Puzzles are created by the
/// generator once removal and grading converge and are never mutated
/// afterwards; consumers copy the snapshot into their own working state.
///
/// # Examples
///
/// ```
/// use sudogen_core::{Dimension, Grading, Grid, Puzzle, SymbolType, Symmetry};
///
/// let grid: Grid = "12__ ____ ____ ____".parse()?;
/// let puzzle = Puzzle::from_grid(&grid, SymbolType::Digits, Symmetry::None, Grading::Easy);
/// assert_eq!(puzzle.given_count(), 2);
/// assert_eq!(puzzle.givens()[1].value, 2);
/// # Ok::<(), sudogen_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    dimension: Dimension,
    symbol_type: SymbolType,
    symmetry: Symmetry,
    grading: Grading,
    givens: Vec<Given>,
}

impl Puzzle {
    /// Builds a puzzle from the filled cells of a grid.
    ///
    /// Every non-empty cell becomes a given, collected in row-major order.
    #[must_use]
    pub fn from_grid(
        grid: &Grid,
        symbol_type: SymbolType,
        symmetry: Symmetry,
        grading: Grading,
    ) -> Self {
        let givens = grid
            .dimension()
            .positions()
            .filter_map(|pos| {
                let value = grid.value(pos);
                (value != 0).then_some(Given {
                    row: pos.row(),
                    col: pos.col(),
                    value,
                })
            })
            .collect();
        Self {
            dimension: grid.dimension(),
            symbol_type,
            symmetry,
            grading,
            givens,
        }
    }

    /// Builds a puzzle with no givens.
    ///
    /// An empty board demands no deductions, so it is graded
    /// [`Grading::Easy`].
    #[must_use]
    pub fn empty(dimension: Dimension, symbol_type: SymbolType, symmetry: Symmetry) -> Self {
        Self {
            dimension,
            symbol_type,
            symmetry,
            grading: Grading::Easy,
            givens: Vec::new(),
        }
    }

    /// Returns the board dimension.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the symbol type the puzzle is presented with.
    #[must_use]
    pub fn symbol_type(&self) -> SymbolType {
        self.symbol_type
    }

    /// Returns the symmetry the givens were removed under.
    #[must_use]
    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Returns the difficulty grading.
    #[must_use]
    pub fn grading(&self) -> Grading {
        self.grading
    }

    /// Returns the given cells in row-major order.
    #[must_use]
    pub fn givens(&self) -> &[Given] {
        &self.givens
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.givens.len()
    }

    /// Reconstitutes a playable grid with every given placed and flagged.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new(self.dimension);
        for given in &self.givens {
            let placed = grid.place_given(Position::new(given.row, given.col), given.value);
            debug_assert!(placed, "puzzle givens must be mutually consistent");
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_collects_givens_row_major() {
        let grid: Grid = "\
            _2__ \
            ___4 \
            1___ \
            ____"
            .parse()
            .unwrap();
        let puzzle = Puzzle::from_grid(&grid, SymbolType::Digits, Symmetry::None, Grading::Easy);

        let givens = puzzle.givens();
        assert_eq!(givens.len(), 3);
        assert_eq!(
            givens[0],
            Given {
                row: 0,
                col: 1,
                value: 2
            }
        );
        assert_eq!(
            givens[1],
            Given {
                row: 1,
                col: 3,
                value: 4
            }
        );
        assert_eq!(
            givens[2],
            Given {
                row: 2,
                col: 0,
                value: 1
            }
        );
    }

    #[test]
    fn test_to_grid_round_trip() {
        let grid: Grid = "\
            53_ _7_ ___\n\
            6__ 195 ___\n\
            _98 ___ _6_\n\
            8__ _6_ __3\n\
            4__ 8_3 __1\n\
            7__ _2_ __6\n\
            _6_ ___ 28_\n\
            ___ 419 __5\n\
            ___ _8_ _79"
            .parse()
            .unwrap();
        let puzzle =
            Puzzle::from_grid(&grid, SymbolType::Digits, Symmetry::None, Grading::Moderate);

        let rebuilt = puzzle.to_grid();
        assert_eq!(rebuilt.values(), grid.values());
        for given in puzzle.givens() {
            assert!(rebuilt.is_given(Position::new(given.row, given.col)));
        }
        assert_eq!(puzzle.grading(), Grading::Moderate);
    }

    #[test]
    fn test_empty_puzzle() {
        let puzzle = Puzzle::empty(Dimension::Two, SymbolType::Digits, Symmetry::Rotational180);
        assert_eq!(puzzle.given_count(), 0);
        assert_eq!(puzzle.grading(), Grading::Easy);
        assert_eq!(puzzle.to_grid().empty_count(), 16);
    }
}
