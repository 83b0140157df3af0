//! Exhaustive backtracking search over a grid.

use rand::{Rng, seq::SliceRandom as _};
use sudogen_core::{CandidateSet, Dimension, Grid};
use tinyvec::ArrayVec;

/// Backtracking constraint solver.
///
/// The search picks an empty cell with the fewest remaining candidates
/// (ties broken by first-found, row-major) and tries each candidate symbol
/// in turn, propagating eliminations to peers and recording every mask
/// change on an undo trail. Dead ends rewind the trail instead of copying
/// the grid per recursion step.
///
/// The same search sits behind every entry point. [`solve`](Self::solve)
/// returns the first solution found. [`count_solutions`](Self::count_solutions)
/// stops counting at a cap, which the generator's uniqueness check relies
/// on. [`random_solution`](Self::random_solution) shuffles the candidate
/// try order to build full grids.
///
/// # Examples
///
/// ```
/// use sudogen_core::{Dimension, Grid};
/// use sudogen_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
///
/// // An empty 4x4 board has many completions; the cap bounds the search.
/// let empty = Grid::new(Dimension::Two);
/// assert_eq!(solver.count_solutions(&empty, 2), 2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the first solution of `grid`, or `None` if the search space
    /// is exhausted without one.
    ///
    /// Contradictory givens are a normal "no solution" outcome, not an
    /// error.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut state = SearchState::seed(grid)?;
        let mut found = 0;
        let mut first = None;
        state.search(1, &mut None, &mut found, &mut first);
        first.map(|values| Grid::from_values(grid.dimension(), values))
    }

    /// Counts the solutions of `grid`, stopping as soon as `cap` distinct
    /// full solutions have been found.
    ///
    /// Returns the true count when it is below `cap`. With `cap = 2` this
    /// is the uniqueness test: a result of exactly 1 proves the puzzle has
    /// a single completion without paying for an exhaustive count.
    #[must_use]
    pub fn count_solutions(&self, grid: &Grid, cap: usize) -> usize {
        let Some(mut state) = SearchState::seed(grid) else {
            return 0;
        };
        let mut found = 0;
        let mut first = None;
        state.search(cap, &mut None, &mut found, &mut first);
        found
    }

    /// Builds a random fully solved grid.
    ///
    /// The search shuffles the candidate try order of every cell with
    /// `rng`, so repeated calls yield different solved grids while equal
    /// RNG states reproduce the same one.
    ///
    /// # Panics
    ///
    /// Panics if the search fails to fill an empty board, which would be a
    /// solver defect.
    #[must_use]
    pub fn random_solution<R: Rng>(&self, dimension: Dimension, rng: &mut R) -> Grid {
        let Some(mut state) = SearchState::seed(&Grid::new(dimension)) else {
            unreachable!("an empty board seeds without contradiction");
        };
        let mut found = 0;
        let mut first = None;
        state.search(1, &mut Some(rng as &mut dyn Rng), &mut found, &mut first);
        let Some(values) = first else {
            unreachable!("an empty board always has a solution");
        };
        Grid::from_values(dimension, values)
    }
}

/// Mutable search arena: values, raw candidate masks, and the undo trail.
///
/// The trail records `(cell, removed-bits)` deltas applied while placing a
/// symbol; backtracking pops the trail to a mark instead of restoring a
/// grid copy.
struct SearchState {
    values: Vec<u8>,
    masks: Vec<u16>,
    peers: Vec<Vec<u16>>,
    trail: Vec<(u16, u16)>,
}

impl SearchState {
    /// Builds the arena from a grid, replaying its givens with full
    /// propagation. Returns `None` if the givens contradict each other.
    fn seed(grid: &Grid) -> Option<Self> {
        let dimension = grid.dimension();
        let cells = dimension.cell_count();
        let full = CandidateSet::full(dimension.unit()).bits();
        #[expect(clippy::cast_possible_truncation)]
        let peers = (0..cells)
            .map(|index| {
                dimension
                    .peer_indices(index)
                    .map(|peer| peer as u16)
                    .collect()
            })
            .collect();
        let mut state = Self {
            values: vec![0; cells],
            masks: vec![full; cells],
            peers,
            trail: Vec::new(),
        };
        for (index, &value) in grid.values().iter().enumerate() {
            if value != 0 && !state.place(index, value) {
                return None;
            }
        }
        Some(state)
    }

    /// Places `value` at `index` and removes it from every empty peer's
    /// mask, recording each removal on the trail.
    ///
    /// Returns `false` when the value is no longer a candidate or a peer's
    /// mask is wiped out; the caller rewinds the trail either way.
    fn place(&mut self, index: usize, value: u8) -> bool {
        let bit = 1 << (value - 1);
        if self.masks[index] & bit == 0 {
            return false;
        }
        self.values[index] = value;
        for k in 0..self.peers[index].len() {
            let peer = usize::from(self.peers[index][k]);
            if self.values[peer] != 0 {
                continue;
            }
            let removed = self.masks[peer] & bit;
            if removed == 0 {
                continue;
            }
            #[expect(clippy::cast_possible_truncation)]
            self.trail.push((peer as u16, removed));
            self.masks[peer] &= !bit;
            if self.masks[peer] == 0 {
                return false;
            }
        }
        true
    }

    /// Rewinds the trail to `mark` and clears the trial value at `index`.
    fn undo_to(&mut self, mark: usize, index: usize) {
        while self.trail.len() > mark {
            if let Some((cell, bits)) = self.trail.pop() {
                self.masks[usize::from(cell)] |= bits;
            }
        }
        self.values[index] = 0;
    }

    /// Picks the empty cell with the fewest remaining candidates, breaking
    /// ties by first-found in row-major order. Returns `None` when the
    /// board is full.
    fn most_constrained_cell(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for index in 0..self.values.len() {
            if self.values[index] != 0 {
                continue;
            }
            let count = self.masks[index].count_ones();
            if count <= 1 {
                // Cannot do better; a zero-candidate cell is an immediate
                // dead end the caller discovers by having nothing to try.
                return Some(index);
            }
            if best.is_none_or(|(_, n)| count < n) {
                best = Some((index, count));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Recursive search counting up to `cap` solutions; the first complete
    /// assignment is captured in `first`.
    #[expect(clippy::cast_possible_truncation)]
    fn search(
        &mut self,
        cap: usize,
        shuffle: &mut Option<&mut dyn Rng>,
        found: &mut usize,
        first: &mut Option<Vec<u8>>,
    ) {
        let Some(index) = self.most_constrained_cell() else {
            *found += 1;
            if first.is_none() {
                *first = Some(self.values.clone());
            }
            return;
        };

        let mut symbols: ArrayVec<[u8; 16]> = ArrayVec::new();
        let mut bits = self.masks[index];
        while bits != 0 {
            symbols.push(bits.trailing_zeros() as u8 + 1);
            bits &= bits - 1;
        }
        if let Some(rng) = shuffle.as_deref_mut() {
            symbols.shuffle(rng);
        }

        for value in symbols {
            let mark = self.trail.len();
            if self.place(index, value) {
                self.search(cap, shuffle, found, first);
            }
            self.undo_to(mark, index);
            if *found >= cap {
                return;
            }
        }
    }
}
