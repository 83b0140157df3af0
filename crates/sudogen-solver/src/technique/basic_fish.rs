use sudogen_core::{House, Position};
use tinyvec::ArrayVec;

use super::{BoxedTechnique, Technique, Tier};
use crate::{SolverError, TechniqueGrid};

/// A technique that removes candidates using basic fish patterns.
///
/// A fish of size `k` occurs when a symbol's candidates are confined to the
/// same `k` cover lines across `k` base lines: `k = 2` is the X-Wing,
/// `k = 3` the Swordfish. The symbol can then be eliminated from the cover
/// lines outside the base lines. Bases are scanned over rows and over
/// columns.
#[derive(Debug, Clone, Copy)]
pub struct BasicFish {
    size: usize,
}

impl BasicFish {
    /// Creates the X-Wing technique (`k = 2`).
    #[must_use]
    pub const fn x_wing() -> Self {
        Self { size: 2 }
    }

    /// Creates the Swordfish technique (`k = 3`).
    #[must_use]
    pub const fn swordfish() -> Self {
        Self { size: 3 }
    }

    /// Eliminates `value` from the cover lines outside the chosen base
    /// lines. `covers` is a bitmask of cover-line indices.
    fn eliminate(
        grid: &mut TechniqueGrid,
        value: u8,
        rows_as_base: bool,
        bases: &[u8],
        covers: u16,
    ) -> bool {
        let unit = grid.unit();
        let mut changed = false;
        let mut bits = covers;
        while bits != 0 {
            #[expect(clippy::cast_possible_truncation)]
            let cover = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            for line in 0..unit {
                if bases.contains(&line) {
                    continue;
                }
                let pos = if rows_as_base {
                    Position::new(line, cover)
                } else {
                    Position::new(cover, line)
                };
                changed |= grid.remove_candidate(pos, value);
            }
        }
        changed
    }

    fn try_bases(
        grid: &mut TechniqueGrid,
        value: u8,
        rows_as_base: bool,
        members: &[(u8, u16)],
    ) -> bool {
        let union = members.iter().fold(0u16, |acc, &(_, mask)| acc | mask);
        if union.count_ones() as usize != members.len() {
            return false;
        }
        let bases: ArrayVec<[u8; 3]> = members.iter().map(|&(line, _)| line).collect();
        Self::eliminate(grid, value, rows_as_base, bases.as_slice(), union)
    }

    fn scan(&self, grid: &mut TechniqueGrid, value: u8, rows_as_base: bool) -> bool {
        let unit = grid.unit();
        let mut bases: ArrayVec<[(u8, u16); 16]> = ArrayVec::new();
        for line in 0..unit {
            let house = if rows_as_base {
                House::Row { index: line }
            } else {
                House::Column { index: line }
            };
            let offsets = grid.candidate_offsets_in_house(house, value);
            if offsets.len() >= 2 && offsets.len() <= self.size {
                let mask = offsets.iter().fold(0u16, |acc, &o| acc | (1 << o));
                bases.push((line, mask));
            }
        }
        if bases.len() < self.size {
            return false;
        }

        let mut changed = false;
        match self.size {
            2 => {
                for i in 0..bases.len() {
                    for j in i + 1..bases.len() {
                        changed |=
                            Self::try_bases(grid, value, rows_as_base, &[bases[i], bases[j]]);
                    }
                }
            }
            _ => {
                for i in 0..bases.len() {
                    for j in i + 1..bases.len() {
                        for k in j + 1..bases.len() {
                            changed |= Self::try_bases(
                                grid,
                                value,
                                rows_as_base,
                                &[bases[i], bases[j], bases[k]],
                            );
                        }
                    }
                }
            }
        }
        changed
    }
}

impl Technique for BasicFish {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "X-Wing",
            _ => "Swordfish",
        }
    }

    fn tier(&self) -> Tier {
        Tier::Fish
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut TechniqueGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for value in 1..=grid.unit() {
            changed |= self.scan(grid, value, true);
            changed |= self.scan(grid, value, false);
        }
        Ok(changed)
    }
}
