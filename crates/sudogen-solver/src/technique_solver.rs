//! Driver for the technique ladder.

use crate::{
    SolverError, TechniqueGrid,
    technique::{self, BoxedTechnique, Tier},
};

/// Statistics collected while driving the technique ladder.
///
/// Tracks how many times each technique was applied, the total number of
/// solving steps, and the hardest tier that was needed. These are the
/// inputs of the difficulty grading.
#[derive(Debug, Clone)]
pub struct TechniqueSolverStats {
    applications: Vec<usize>,
    tiers: Vec<Tier>,
    total_steps: usize,
}

impl TechniqueSolverStats {
    /// Returns technique application counts in solver order.
    ///
    /// Techniques that were never applied have a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of solving steps taken.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns `true` if any technique was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }

    /// Returns the hardest tier that was applied, or `None` if no technique
    /// made progress.
    #[must_use]
    pub fn hardest_tier(&self) -> Option<Tier> {
        self.applications
            .iter()
            .zip(&self.tiers)
            .filter(|&(&count, _)| count > 0)
            .map(|(_, &tier)| tier)
            .max()
    }

    /// Returns the number of steps taken by techniques of the given tier.
    #[must_use]
    pub fn tier_steps(&self, tier: Tier) -> usize {
        self.applications
            .iter()
            .zip(&self.tiers)
            .filter(|&(_, &t)| t == tier)
            .map(|(&count, _)| count)
            .sum()
    }
}

#[cfg(test)]
impl TechniqueSolverStats {
    /// Overwrites one application counter; test-only.
    pub(crate) fn set_application(&mut self, index: usize, count: usize) {
        let previous = self.applications[index];
        self.applications[index] = count;
        self.total_steps = self.total_steps - previous + count;
    }
}

/// A solver that applies human-like techniques to a grid.
///
/// `TechniqueSolver` iterates through its techniques in order and applies
/// the first one that makes progress, then restarts from the weakest
/// technique. A puzzle that frequently falls back to the strong end of the
/// ladder is a hard puzzle; the recorded statistics capture exactly that.
///
/// # Examples
///
/// ```
/// use sudogen_core::Dimension;
/// use sudogen_solver::{TechniqueGrid, TechniqueSolver};
///
/// let solver = TechniqueSolver::with_full_ladder();
/// let mut grid = TechniqueGrid::new(Dimension::Three);
///
/// let (solved, stats) = solver.solve(&mut grid)?;
/// assert!(!solved); // an empty grid offers no deductions
/// assert_eq!(stats.total_steps(), 0);
/// # Ok::<(), sudogen_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl TechniqueSolver {
    /// Creates a new solver with the specified techniques.
    ///
    /// Techniques are tried in the order they appear in the vector; keep
    /// them sorted from weakest to strongest.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a new solver with the full technique ladder.
    #[must_use]
    pub fn with_full_ladder() -> Self {
        Self::new(technique::ladder())
    }

    /// Creates a statistics object aligned with this solver's technique
    /// order.
    #[must_use]
    pub fn new_stats(&self) -> TechniqueSolverStats {
        TechniqueSolverStats {
            applications: vec![0; self.techniques.len()],
            tiers: self.techniques.iter().map(|t| t.tier()).collect(),
            total_steps: 0,
        }
    }

    /// Returns the configured techniques in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`TechniqueSolverStats::applications`].
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Applies one step by trying each technique in order.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A technique was applied and made progress
    /// * `Ok(false)` - No technique could make progress (solver is stuck)
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid is contradictory
    /// before or after a technique application.
    pub fn step(
        &self,
        grid: &mut TechniqueGrid,
        stats: &mut TechniqueSolverStats,
    ) -> Result<bool, SolverError> {
        debug_assert_eq!(self.techniques.len(), stats.applications.len());
        grid.check_consistency()?;

        for (i, technique) in self.techniques.iter().enumerate() {
            if technique.apply(grid)? {
                stats.applications[i] += 1;
                stats.total_steps += 1;
                grid.check_consistency()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Applies techniques repeatedly until the grid is solved or no
    /// progress can be made.
    ///
    /// # Returns
    ///
    /// A tuple `(solved, stats)`: `solved` is `true` if every cell was
    /// decided, and `stats` records which techniques were needed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid becomes
    /// contradictory during solving.
    pub fn solve(
        &self,
        grid: &mut TechniqueGrid,
    ) -> Result<(bool, TechniqueSolverStats), SolverError> {
        let mut stats = self.new_stats();
        let solved = self.solve_with_stats(grid, &mut stats)?;
        Ok((solved, stats))
    }

    /// Like [`solve`](Self::solve), but accumulates into an existing
    /// statistics object.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid becomes
    /// contradictory during solving.
    pub fn solve_with_stats(
        &self,
        grid: &mut TechniqueGrid,
        stats: &mut TechniqueSolverStats,
    ) -> Result<bool, SolverError> {
        while self.step(grid, stats)? {
            if grid.is_solved() {
                return Ok(true);
            }
        }
        Ok(grid.is_solved())
    }
}

#[cfg(test)]
mod tests {
    use sudogen_core::{Dimension, Grid, Position};

    use super::*;
    use crate::technique::{HiddenSingle, NakedSingle};

    fn singles_solver() -> TechniqueSolver {
        TechniqueSolver::new(vec![
            Box::new(NakedSingle::new()),
            Box::new(HiddenSingle::new()),
        ])
    }

    #[test]
    fn test_step_returns_false_when_stuck() {
        let solver = singles_solver();
        let mut grid = TechniqueGrid::new(Dimension::Three);
        let mut stats = solver.new_stats();

        assert!(!solver.step(&mut grid, &mut stats).unwrap());
        assert_eq!(stats.total_steps(), 0);
        assert!(!stats.has_progress());
        assert_eq!(stats.hardest_tier(), None);
    }

    #[test]
    fn test_step_records_stats() {
        let solver = singles_solver();
        let mut grid = TechniqueGrid::new(Dimension::Three);
        let mut stats = solver.new_stats();

        // Create a naked single at (4, 4).
        for value in 1..=9 {
            if value != 5 {
                grid.remove_candidate(Position::new(4, 4), value);
            }
        }

        assert!(solver.step(&mut grid, &mut stats).unwrap());
        assert_eq!(stats.total_steps(), 1);
        assert_eq!(stats.applications()[0], 1);
        assert_eq!(stats.hardest_tier(), Some(crate::technique::Tier::Singles));
    }

    #[test]
    fn test_step_rejects_inconsistent_grid() {
        let solver = singles_solver();
        let mut values = vec![0; 81];
        values[0] = 5;
        values[8] = 5;
        let mut grid = TechniqueGrid::from_grid(&Grid::from_values(Dimension::Three, values));
        let mut stats = solver.new_stats();

        assert!(matches!(
            solver.step(&mut grid, &mut stats),
            Err(SolverError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_solve_full_puzzle_with_singles() {
        // The classic puzzle solves with singles alone.
        let grid: Grid = "\
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79"
            .parse()
            .unwrap();
        let solver = TechniqueSolver::with_full_ladder();
        let mut scratch = TechniqueGrid::from_grid(&grid);

        let (solved, stats) = solver.solve(&mut scratch).unwrap();
        assert!(solved);
        assert!(stats.has_progress());
        assert_eq!(scratch.empty_count(), 0);
        assert_eq!(scratch.value(Position::new(0, 2)), 4);
    }

    #[test]
    fn test_tier_steps_sums_by_tier() {
        let solver = TechniqueSolver::with_full_ladder();
        let mut stats = solver.new_stats();
        stats.applications[0] = 2; // Naked Single
        stats.applications[1] = 3; // Hidden Single
        stats.applications[2] = 1; // Locked Candidates
        stats.total_steps = 6;

        assert_eq!(stats.tier_steps(crate::technique::Tier::Singles), 5);
        assert_eq!(stats.tier_steps(crate::technique::Tier::Intersections), 1);
        assert_eq!(stats.tier_steps(crate::technique::Tier::Fish), 0);
        assert_eq!(
            stats.hardest_tier(),
            Some(crate::technique::Tier::Intersections)
        );
    }
}
