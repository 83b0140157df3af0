//! Difficulty grading via the technique ladder.

use sudogen_core::{Grading, Grid, Puzzle};

use crate::{TechniqueGrid, TechniqueSolver, TechniqueSolverStats, technique::Tier};

/// Tunable thresholds mapping ladder statistics to a [`Grading`].
///
/// The tier-to-grade mapping is fixed by the ladder ordering; the policy
/// parameters calibrate the boundary cases. The defaults were chosen
/// against generated sample puzzles and can be adjusted without touching
/// the grader.
#[derive(Debug, Clone, Copy)]
pub struct GradingPolicy {
    /// Number of fish applications at which a puzzle grades as
    /// [`Grading::Diabolic`] instead of [`Grading::Expert`].
    pub diabolic_fish_steps: usize,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            diabolic_fish_steps: 3,
        }
    }
}

impl GradingPolicy {
    fn grade_for(self, stats: &TechniqueSolverStats) -> Grading {
        match stats.hardest_tier() {
            None | Some(Tier::Singles) => Grading::Easy,
            Some(Tier::Intersections) => Grading::Moderate,
            Some(Tier::Subsets) => Grading::Hard,
            Some(Tier::Fish) => {
                if stats.tier_steps(Tier::Fish) >= self.diabolic_fish_steps {
                    Grading::Diabolic
                } else {
                    Grading::Expert
                }
            }
        }
    }
}

/// Grades puzzles by simulating a human solver.
///
/// The grader runs the technique ladder on a scratch copy of the puzzle
/// with candidates recomputed from the givens. The hardest tier required
/// to fully solve the puzzle, together with the application counts,
/// determines the grade through a [`GradingPolicy`].
///
/// A puzzle the ladder cannot finish (or one that turns out to be
/// contradictory) grades as [`Grading::Diabolic`]; grading never fails.
/// The generator only emits uniquely solvable puzzles, so the stalled
/// outcome is a defensive path there.
///
/// Grading is fully deterministic: the same puzzle always receives the
/// same grade.
///
/// # Examples
///
/// ```
/// use sudogen_core::{Dimension, Grading, Grid};
/// use sudogen_solver::PuzzleGrader;
///
/// let grader = PuzzleGrader::new();
///
/// // An empty board offers the ladder nothing to do.
/// let empty = Grid::new(Dimension::Three);
/// assert_eq!(grader.grade_grid(&empty), Grading::Diabolic);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGrader {
    solver: TechniqueSolver,
    policy: GradingPolicy,
}

impl Default for PuzzleGrader {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGrader {
    /// Creates a grader with the full technique ladder and default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(GradingPolicy::default())
    }

    /// Creates a grader with a custom grading policy.
    #[must_use]
    pub fn with_policy(policy: GradingPolicy) -> Self {
        Self {
            solver: TechniqueSolver::with_full_ladder(),
            policy,
        }
    }

    /// Grades a puzzle.
    #[must_use]
    pub fn grade(&self, puzzle: &Puzzle) -> Grading {
        self.grade_grid(&puzzle.to_grid())
    }

    /// Grades the puzzle formed by the filled cells of a grid.
    #[must_use]
    pub fn grade_grid(&self, grid: &Grid) -> Grading {
        let mut scratch = TechniqueGrid::from_grid(grid);
        match self.solver.solve(&mut scratch) {
            Ok((true, stats)) => self.policy.grade_for(&stats),
            // Stalled or contradictory: report the maximum grade rather
            // than failing.
            Ok((false, _)) | Err(_) => Grading::Diabolic,
        }
    }
}
