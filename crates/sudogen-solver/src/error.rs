use sudogen_core::ConsistencyError;

/// Errors surfaced by the technique solver.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The grid violates the Sudoku constraint or a cell ran out of
    /// candidates.
    #[display("inconsistency detected: {_0}")]
    Inconsistent(#[from] ConsistencyError),
}
