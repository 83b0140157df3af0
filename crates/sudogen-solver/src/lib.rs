//! Solvers and difficulty grading for Sudoku-family puzzles.
//!
//! This crate provides the two solving engines of the system:
//!
//! 1. **Constraint solver** - [`BacktrackSolver`], an exhaustive
//!    backtracking search with minimum-remaining-candidates ordering and an
//!    index-based undo trail. It finds solutions, counts them up to a cap
//!    (the uniqueness check used during generation), and builds random full
//!    grids.
//! 2. **Technique ladder** - the [`technique`] module implements human-style
//!    logical techniques behind the [`Technique`](technique::Technique)
//!    trait; [`TechniqueSolver`] drives them from weakest to strongest tier
//!    and records per-technique statistics.
//!
//! [`PuzzleGrader`] combines the two: it runs the ladder on a scratch copy
//! of a puzzle and maps the hardest tier required (plus application counts)
//! to a [`Grading`](sudogen_core::Grading) through a tunable
//! [`GradingPolicy`].
//!
//! # Examples
//!
//! ```
//! use sudogen_core::Grid;
//! use sudogen_solver::BacktrackSolver;
//!
//! let grid: Grid = "\
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79"
//!     .parse()?;
//!
//! let solver = BacktrackSolver::new();
//! assert_eq!(solver.count_solutions(&grid, 2), 1);
//! # Ok::<(), sudogen_core::GridParseError>(())
//! ```

pub use self::{
    backtrack::BacktrackSolver,
    error::SolverError,
    grader::{GradingPolicy, PuzzleGrader},
    technique_grid::TechniqueGrid,
    technique_solver::{TechniqueSolver, TechniqueSolverStats},
};

mod backtrack;
mod error;
mod grader;
pub mod technique;
mod technique_grid;
mod technique_solver;

#[cfg(test)]
mod testing;
