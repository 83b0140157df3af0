//! Puzzle generation for Sudoku-family boards.
//!
//! The generator builds a random fully solved grid, removes values
//! cell-by-cell under an optional symmetry pairing while the backtracking
//! solver confirms each step keeps the puzzle uniquely solvable, and grades
//! the result with the technique ladder. When a specific grading is
//! requested, it retries with fresh grids until the grade matches or the
//! retry budget runs out.
//!
//! Generation is deterministic per [`PuzzleSeed`]: the seed drives the full
//! retry sequence, so a single 64-character hex string reproduces a puzzle
//! exactly.
//!
//! # Examples
//!
//! ```
//! use sudogen_core::{Dimension, SymbolType, Symmetry};
//! use sudogen_generator::{GeneratorRequest, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let mut request = GeneratorRequest::new(Dimension::Two, SymbolType::Digits);
//! request.symmetry = Symmetry::Rotational180;
//!
//! let generated = generator.generate(&request)?;
//! assert!(generated.puzzle.given_count() > 0);
//! # Ok::<(), sudogen_generator::GeneratorError>(())
//! ```

pub use self::{
    error::GeneratorError,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    request::{GeneratorRequest, GradingTarget},
    seed::{ParseSeedError, PuzzleSeed},
};

mod error;
mod generator;
mod request;
mod seed;
