use sudogen_core::{House, Position};

use super::{BoxedTechnique, Technique, Tier};
use crate::{SolverError, TechniqueGrid};

const NAME: &str = "Locked Candidates";

/// A technique that removes candidates using locked candidates
/// (pointing/claiming).
///
/// - **Pointing**: within a box, all candidates of a symbol lie in a single
///   row or column, so the symbol can be removed from the rest of that line
///   outside the box.
/// - **Claiming**: within a row or column, all candidates of a symbol lie
///   in a single box, so the symbol can be removed from the rest of that
///   box outside the line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates {}

impl LockedCandidates {
    /// Creates a new `LockedCandidates` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    fn on_line(line: House, pos: Position) -> bool {
        match line {
            House::Row { index } => pos.row() == index,
            House::Column { index } => pos.col() == index,
            House::Box { .. } => unreachable!("lines are rows or columns"),
        }
    }

    fn apply_pointing(grid: &mut TechniqueGrid) -> bool {
        let dim = grid.dimension();
        let mut changed = false;
        for box_index in 0..dim.unit() {
            let box_house = House::Box { index: box_index };
            for value in 1..=dim.unit() {
                let offsets = grid.candidate_offsets_in_house(box_house, value);
                let Some((&first, rest)) = offsets.as_slice().split_first() else {
                    continue;
                };
                let anchor = box_house.position_at(dim, first);

                let mut lines = Vec::with_capacity(2);
                if rest
                    .iter()
                    .all(|&i| box_house.position_at(dim, i).row() == anchor.row())
                {
                    lines.push(House::Row {
                        index: anchor.row(),
                    });
                }
                if rest
                    .iter()
                    .all(|&i| box_house.position_at(dim, i).col() == anchor.col())
                {
                    lines.push(House::Column {
                        index: anchor.col(),
                    });
                }
                for line in lines {
                    for pos in line.positions(dim) {
                        if pos.box_index(dim) != box_index {
                            changed |= grid.remove_candidate(pos, value);
                        }
                    }
                }
            }
        }
        changed
    }

    fn apply_claiming(grid: &mut TechniqueGrid) -> bool {
        let dim = grid.dimension();
        let mut changed = false;
        let lines = (0..dim.unit())
            .map(|index| House::Row { index })
            .chain((0..dim.unit()).map(|index| House::Column { index }));
        for line in lines {
            for value in 1..=dim.unit() {
                let offsets = grid.candidate_offsets_in_house(line, value);
                let Some((&first, rest)) = offsets.as_slice().split_first() else {
                    continue;
                };
                let box_index = line.position_at(dim, first).box_index(dim);
                if !rest
                    .iter()
                    .all(|&i| line.position_at(dim, i).box_index(dim) == box_index)
                {
                    continue;
                }
                for pos in (House::Box { index: box_index }).positions(dim) {
                    if !Self::on_line(line, pos) {
                        changed |= grid.remove_candidate(pos, value);
                    }
                }
            }
        }
        changed
    }
}

impl Technique for LockedCandidates {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::Intersections
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut TechniqueGrid) -> Result<bool, SolverError> {
        let mut changed = Self::apply_pointing(grid);
        changed |= Self::apply_claiming(grid);
        Ok(changed)
    }
}
