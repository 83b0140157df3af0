use sudogen_core::{CandidateSet, House};
use tinyvec::ArrayVec;

use super::{BoxedTechnique, Technique, Tier};
use crate::{SolverError, TechniqueGrid};

/// A technique that restricts cells using hidden pairs and triples.
///
/// A "hidden subset" occurs when `k` symbols are confined to the same `k`
/// cells of a house. Those cells can then hold nothing but the `k` symbols,
/// so every other candidate is removed from them.
#[derive(Debug, Clone, Copy)]
pub struct HiddenSubset {
    size: usize,
}

impl HiddenSubset {
    /// Creates the hidden pair technique (`k = 2`).
    #[must_use]
    pub const fn pair() -> Self {
        Self { size: 2 }
    }

    /// Creates the hidden triple technique (`k = 3`).
    #[must_use]
    pub const fn triple() -> Self {
        Self { size: 3 }
    }

    /// Restricts the cells at `offsets` (a bitmask of in-house offsets) to
    /// the chosen symbols.
    fn restrict_cells(
        grid: &mut TechniqueGrid,
        house: House,
        offsets: u16,
        chosen: CandidateSet,
    ) -> bool {
        let dim = grid.dimension();
        let mut changed = false;
        let mut bits = offsets;
        while bits != 0 {
            #[expect(clippy::cast_possible_truncation)]
            let offset = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            let pos = house.position_at(dim, offset);
            for value in 1..=dim.unit() {
                if !chosen.contains(value) {
                    changed |= grid.remove_candidate(pos, value);
                }
            }
        }
        changed
    }

    fn try_values(grid: &mut TechniqueGrid, house: House, members: &[(u8, u16)]) -> bool {
        let union = members.iter().fold(0u16, |acc, &(_, mask)| acc | mask);
        if union.count_ones() as usize != members.len() {
            return false;
        }
        let chosen = members.iter().map(|&(value, _)| value).collect();
        Self::restrict_cells(grid, house, union, chosen)
    }
}

impl Technique for HiddenSubset {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "Hidden Pair",
            _ => "Hidden Triple",
        }
    }

    fn tier(&self) -> Tier {
        Tier::Subsets
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut TechniqueGrid) -> Result<bool, SolverError> {
        let dim = grid.dimension();
        let mut changed = false;
        for house in House::all(dim) {
            // Candidate cell masks per unplaced symbol, confined enough to
            // participate in a subset of this size.
            let mut values: ArrayVec<[(u8, u16); 16]> = ArrayVec::new();
            for value in 1..=dim.unit() {
                if grid.value_placed_in_house(house, value) {
                    continue;
                }
                let offsets = grid.candidate_offsets_in_house(house, value);
                if !offsets.is_empty() && offsets.len() <= self.size {
                    let mask = offsets.iter().fold(0u16, |acc, &o| acc | (1 << o));
                    values.push((value, mask));
                }
            }
            if values.len() < self.size {
                continue;
            }
            match self.size {
                2 => {
                    for i in 0..values.len() {
                        for j in i + 1..values.len() {
                            changed |= Self::try_values(grid, house, &[values[i], values[j]]);
                        }
                    }
                }
                _ => {
                    for i in 0..values.len() {
                        for j in i + 1..values.len() {
                            for k in j + 1..values.len() {
                                changed |= Self::try_values(
                                    grid,
                                    house,
                                    &[values[i], values[j], values[k]],
                                );
                            }
                        }
                    }
                }
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
    fn test_hidden_pair_restricts_cells() {
        let mut grid = TechniqueGrid::new(Dimension::Three);
        // Confine 1 and 2 to columns 0 and 1 of row 0.
        for col in 2..9 {
            grid.remove_candidate(Position::new(0, col), 1);
            grid.remove_candidate(Position::new(0, col), 2);
        }

        TechniqueTester::new(grid)
            .apply_once(&HiddenSubset::pair())
            .assert_removed_includes(Position::new(0, 0), [3, 4, 5, 6, 7, 8, 9])
            .assert_removed_includes(Position::new(0, 1), [3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_hidden_triple_restricts_cells() {
        let mut grid = TechniqueGrid::new(Dimension::Three);
        // Confine 1, 2, and 3 to columns 0-2 of row 4.
        for col in 3..9 {
            for value in 1..=3 {
                grid.remove_candidate(Position::new(4, col), value);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&HiddenSubset::triple())
            .assert_removed_includes(Position::new(4, 0), [4, 5, 6, 7, 8, 9])
            .assert_removed_includes(Position::new(4, 2), [4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_no_change_without_hidden_subsets() {
        TechniqueTester::new(TechniqueGrid::new(Dimension::Three))
            .apply_once(&HiddenSubset::pair())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }
}
