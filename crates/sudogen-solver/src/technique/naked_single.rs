use super::{BoxedTechnique, Technique, Tier};
use crate::{SolverError, TechniqueGrid};

const NAME: &str = "Naked Single";

/// A technique that fills cells with exactly one remaining candidate.
///
/// When a cell has a single possible symbol, that symbol is placed and the
/// elimination is propagated to every peer. This is the weakest deduction a
/// human solver applies and the workhorse of easy puzzles.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle {}

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::Singles
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut TechniqueGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for pos in grid.dimension().positions() {
            if grid.value(pos) != 0 {
                continue;
            }
            if let Some(value) = grid.candidates_at(pos).as_single() {
                changed |= grid.place(pos, value);
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use sudogen_core::{Dimension, Position};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_places_naked_single() {
        let mut grid = TechniqueGrid::new(Dimension::Three);
        // Leave only 5 at (4, 4).
        for value in 1..=9 {
            if value != 5 {
                grid.remove_candidate(Position::new(4, 4), value);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&NakedSingle::new())
            .assert_placed(Position::new(4, 4), 5)
            // The placement propagates to row, column, and box peers.
            .assert_removed_includes(Position::new(4, 0), [5])
            .assert_removed_includes(Position::new(0, 4), [5])
            .assert_removed_includes(Position::new(3, 3), [5]);
    }

    #[test]
    fn test_places_multiple_naked_singles() {
        let mut grid = TechniqueGrid::new(Dimension::Three);
        for value in 1..=9 {
            if value != 3 {
                grid.remove_candidate(Position::new(0, 0), value);
            }
            if value != 7 {
                grid.remove_candidate(Position::new(5, 5), value);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&NakedSingle::new())
            .assert_placed(Position::new(0, 0), 3)
            .assert_placed(Position::new(5, 5), 7);
    }

    #[test]
    fn test_real_puzzle() {
        // (4, 4) starts with 5 as its only candidate; cascading naked
        // singles follow from there.
        TechniqueTester::from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        )
        .apply_until_stuck(&NakedSingle::new())
        .assert_placed(Position::new(4, 4), 5);
    }

    #[test]
    fn test_no_change_when_no_naked_singles() {
        TechniqueTester::new(TechniqueGrid::new(Dimension::Three))
            .apply_once(&NakedSingle::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }
}
