//! Test harness for technique implementations.

use sudogen_core::{Grid, Position};

use crate::{TechniqueGrid, technique::Technique};

/// A test harness for verifying technique implementations.
///
/// Tracks the initial and current state of a grid, applies techniques, and
/// asserts the expected placements and eliminations. All methods return
/// `self` for fluent chaining, and assertions panic with `#[track_caller]`
/// so failures point at the test line.
#[derive(Debug)]
pub(crate) struct TechniqueTester {
    initial: TechniqueGrid,
    current: TechniqueGrid,
}

impl TechniqueTester {
    /// Creates a tester from an initial grid state.
    pub(crate) fn new(initial: TechniqueGrid) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from a grid string (see `Grid::from_str`).
    #[track_caller]
    pub(crate) fn from_str(s: &str) -> Self {
        let grid: Grid = s.parse().unwrap();
        Self::new(TechniqueGrid::from_grid(&grid))
    }

    /// Applies the technique once.
    #[track_caller]
    pub(crate) fn apply_once<T: Technique>(mut self, technique: &T) -> Self {
        technique.apply(&mut self.current).unwrap();
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    #[track_caller]
    pub(crate) fn apply_until_stuck<T: Technique>(mut self, technique: &T) -> Self {
        while technique.apply(&mut self.current).unwrap() {}
        self
    }

    /// Asserts that a cell is now decided with the given value.
    #[track_caller]
    pub(crate) fn assert_placed(self, pos: Position, value: u8) -> Self {
        let placed = self.current.value(pos);
        assert_eq!(
            placed, value,
            "expected {value} to be placed at {pos:?}, found {placed}"
        );
        self
    }

    /// Asserts that all specified candidates were removed from a cell.
    ///
    /// The candidates must have been present initially; other candidates
    /// may have been removed as well.
    #[track_caller]
    pub(crate) fn assert_removed_includes<C>(self, pos: Position, values: C) -> Self
    where
        C: IntoIterator<Item = u8>,
    {
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        for value in values {
            assert!(
                initial.contains(value),
                "expected {value} to be an initial candidate at {pos:?}, candidates were {initial:?}"
            );
            assert!(
                !current.contains(value),
                "expected {value} to be removed from {pos:?}, candidates are {current:?}"
            );
        }
        self
    }

    /// Asserts that a cell's value and candidates are unchanged.
    #[track_caller]
    pub(crate) fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.initial.value(pos),
            self.current.value(pos),
            "expected the value at {pos:?} to be unchanged"
        );
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial, current,
            "expected no change at {pos:?}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }
}
