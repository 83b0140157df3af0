use sudogen_core::House;

use super::{BoxedTechnique, Technique, Tier};
use crate::{SolverError, TechniqueGrid};

const NAME: &str = "Hidden Single";

/// A technique that finds symbols with only one possible position in a
/// house.
///
/// A "hidden single" occurs when a symbol has a single candidate cell left
/// in a row, column, or box, even though that cell may still hold several
/// candidates itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenSingle {
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
        let dim = grid.dimension();
        let mut changed = false;
        for house in House::all(dim) {
            for value in 1..=dim.unit() {
                if grid.value_placed_in_house(house, value) {
                    continue;
                }
                let offsets = grid.candidate_offsets_in_house(house, value);
                if let [offset] = offsets.as_slice() {
                    changed |= grid.place(house.position_at(dim, *offset), value);
                }
            }
        }
        Ok(changed)
    }
}
