use sudogen_core::{Dimension, SymbolType};

/// Errors rejected at the generation boundary.
///
/// Configuration problems are detected before any solver work starts and
/// are never discovered mid-algorithm. An unreachable grading target is
/// *not* an error: the generator recovers by returning the closest
/// achievable puzzle labeled with its true grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The requested symbol set cannot represent every symbol of the board.
    #[display("{symbol_type} symbols cannot represent a {dimension} board")]
    IncompatibleSymbols {
        /// The requested symbol set.
        symbol_type: SymbolType,
        /// The requested board dimension.
        dimension: Dimension,
    },
}
