use sudogen_core::{CandidateSet, House};
use tinyvec::ArrayVec;

use super::{BoxedTechnique, Technique, Tier};
use crate::{SolverError, TechniqueGrid};

/// A technique that removes candidates using naked pairs and triples.
///
/// A "naked subset" occurs when `k` cells in a house together hold only `k`
/// distinct candidates. Those candidates can then be eliminated from every
/// other cell of the house.
#[derive(Debug, Clone, Copy)]
pub struct NakedSubset {
    size: usize,
}

impl NakedSubset {
    /// Creates the naked pair technique (`k = 2`).
    #[must_use]
    pub const fn pair() -> Self {
        Self { size: 2 }
    }

    /// Creates the naked triple technique (`k = 3`).
    #[must_use]
    pub const fn triple() -> Self {
        Self { size: 3 }
    }

    fn eliminate_from_rest(
        grid: &mut TechniqueGrid,
        house: House,
        members: &[u8],
        union: CandidateSet,
    ) -> bool {
        let dim = grid.dimension();
        let mut changed = false;
        for i in 0..dim.unit() {
            if members.contains(&i) {
                continue;
            }
            let pos = house.position_at(dim, i);
            if grid.value(pos) != 0 {
                continue;
            }
            for value in union {
                changed |= grid.remove_candidate(pos, value);
            }
        }
        changed
    }

    fn try_members(grid: &mut TechniqueGrid, house: House, members: &[u8]) -> bool {
        let dim = grid.dimension();
        let union = members
            .iter()
            .map(|&i| grid.candidates_at(house.position_at(dim, i)))
            .fold(CandidateSet::EMPTY, |acc, set| acc | set);
        if union.len() != members.len() {
            return false;
        }
        Self::eliminate_from_rest(grid, house, members, union)
    }
}

impl Technique for NakedSubset {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "Naked Pair",
            _ => "Naked Triple",
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
            let mut cells: ArrayVec<[u8; 16]> = ArrayVec::new();
            for i in 0..dim.unit() {
                let pos = house.position_at(dim, i);
                if grid.value(pos) == 0
                    && (2..=self.size).contains(&grid.candidates_at(pos).len())
                {
                    cells.push(i);
                }
            }
            if cells.len() < self.size {
                continue;
            }
            match self.size {
                2 => {
                    for i in 0..cells.len() {
                        for j in i + 1..cells.len() {
                            changed |= Self::try_members(grid, house, &[cells[i], cells[j]]);
                        }
                    }
                }
                _ => {
                    for i in 0..cells.len() {
                        for j in i + 1..cells.len() {
                            for k in j + 1..cells.len() {
                                changed |= Self::try_members(
                                    grid,
                                    house,
                                    &[cells[i], cells[j], cells[k]],
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
