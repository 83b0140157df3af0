//! The puzzle generator.

use log::{debug, warn};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use sudogen_core::{Grading, Grid, Position, Puzzle};
use sudogen_solver::{BacktrackSolver, PuzzleGrader};

use crate::{GeneratorError, GeneratorRequest, GradingTarget, PuzzleSeed};

/// Number of fresh attempts before settling for the closest grading.
const DEFAULT_RETRY_BUDGET: u32 = 24;

/// The output of one generation request.
///
/// Bundles the immutable [`Puzzle`] snapshot with the solved grid the
/// removal started from and the seed that reproduces the run. The solution
/// is `None` for empty-grid requests, which involve no solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The generated puzzle.
    pub puzzle: Puzzle,
    /// The full solution the givens were carved from.
    pub solution: Option<Grid>,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates uniquely solvable puzzles, optionally constrained by symmetry
/// and a target grading.
///
/// One generation request runs to completion synchronously and owns its
/// working grid and solver state; concurrent requests must each use their
/// own generator (or at least never share grids).
///
/// # Algorithm
///
/// 1. Build a random fully solved grid with the backtracking solver.
/// 2. Visit all cell positions in random order. Tentatively clear each
///    position together with its symmetric partner and keep the removal
///    only while the puzzle still has exactly one solution and, when a
///    specific grading is requested, still grades at or below the target.
///    Rejected removals make the cells permanent givens for the attempt.
/// 3. Grade the carved puzzle. An exact match (or a
///    [`GradingTarget::Random`] request) finishes; otherwise retry from
///    step 1 with a fresh grid, remembering the attempt whose grade lands
///    closest to the request.
///
/// When the retry budget is exhausted the closest attempt is returned,
/// labeled with its *true* grading, never with the requested one.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use sudogen_core::{Dimension, SymbolType};
/// use sudogen_generator::{GeneratorRequest, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let request = GeneratorRequest::new(Dimension::Two, SymbolType::Digits);
/// let seed = PuzzleSeed::from_str(
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
/// )?;
///
/// let first = generator.generate_with_seed(&request, seed)?;
/// let second = generator.generate_with_seed(&request, seed)?;
/// assert_eq!(first.puzzle, second.puzzle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    solver: BacktrackSolver,
    grader: PuzzleGrader,
    retry_budget: u32,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator with the default retry budget.
    #[must_use]
    pub fn new() -> Self {
        Self::with_retry_budget(DEFAULT_RETRY_BUDGET)
    }

    /// Creates a generator that makes at most `retry_budget` attempts per
    /// request (a budget of 0 still runs one attempt).
    #[must_use]
    pub fn with_retry_budget(retry_budget: u32) -> Self {
        Self {
            solver: BacktrackSolver::new(),
            grader: PuzzleGrader::new(),
            retry_budget,
        }
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the request configuration is invalid.
    pub fn generate(&self, request: &GeneratorRequest) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(request, PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from a seed.
    ///
    /// The same request and seed always produce the same puzzle, including
    /// the full retry sequence behind it.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the request configuration is invalid.
    pub fn generate_with_seed(
        &self,
        request: &GeneratorRequest,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        request.validate()?;

        if request.empty_grid {
            let puzzle = Puzzle::empty(request.dimension, request.symbol_type, request.symmetry);
            return Ok(GeneratedPuzzle {
                puzzle,
                solution: None,
                seed,
            });
        }

        let attempts = self.retry_budget.max(1);
        let mut best: Option<(GeneratedPuzzle, u8)> = None;
        for attempt in 0..attempts {
            let mut rng = Pcg64::from_seed(seed.attempt_seed(attempt));
            let solution = self.solver.random_solution(request.dimension, &mut rng);
            let mut working = solution.clone();
            self.carve(&mut working, request, &mut rng);

            let grading = self.grader.grade_grid(&working);
            debug!(
                "attempt {attempt}: {} givens, graded {grading}",
                request.dimension.cell_count() - working.empty_count()
            );

            let generated = GeneratedPuzzle {
                puzzle: Puzzle::from_grid(&working, request.symbol_type, request.symmetry, grading),
                solution: Some(solution),
                seed,
            };
            let wanted = match request.target {
                GradingTarget::Random => return Ok(generated),
                GradingTarget::Graded(wanted) => wanted,
            };
            if grading == wanted {
                return Ok(generated);
            }
            let distance = wanted.rank().abs_diff(grading.rank());
            if best.as_ref().is_none_or(|&(_, d)| distance < d) {
                best = Some((generated, distance));
            }
        }

        let Some((generated, _)) = best else {
            unreachable!("at least one attempt always runs");
        };
        if let GradingTarget::Graded(wanted) = request.target {
            warn!(
                "grading {wanted} not reached within {attempts} attempts; returning {}",
                generated.puzzle.grading()
            );
        }
        Ok(generated)
    }

    /// Removes values from a solved grid while uniqueness (and the grading
    /// ceiling, if any) holds.
    fn carve(&self, grid: &mut Grid, request: &GeneratorRequest, rng: &mut Pcg64) {
        let dimension = grid.dimension();
        let unit = dimension.unit();
        // Below-maximum targets cap the intermediate grading so the target
        // is approached from below; a diabolic request carves freely.
        let ceiling = match request.target {
            GradingTarget::Graded(grading) if grading < Grading::Diabolic => Some(grading),
            _ => None,
        };

        let mut order: Vec<usize> = (0..dimension.cell_count()).collect();
        order.shuffle(rng);

        for index in order {
            let pos = Position::from_index(unit, index);
            if grid.value(pos) == 0 {
                continue;
            }
            let partner = request.symmetry.pair(pos, unit);
            let removed = grid.clear(pos);
            let partner_removed = if partner == pos {
                0
            } else {
                grid.clear(partner)
            };

            let keep = self.solver.count_solutions(grid, 2) == 1
                && ceiling.is_none_or(|ceiling| self.grader.grade_grid(grid) <= ceiling);
            if !keep {
                let _restored = grid.place(pos, removed);
                debug_assert!(_restored);
                if partner_removed != 0 {
                    let _restored = grid.place(partner, partner_removed);
                    debug_assert!(_restored);
                }
            }
        }
    }
}
