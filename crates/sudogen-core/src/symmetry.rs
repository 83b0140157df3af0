//! Geometric symmetry patterns for givens removal.

use std::fmt::{self, Display};

use crate::{Position, error::ParseError};

/// A geometric symmetry over the set of given cells.
///
/// Each variant defines a position-pairing function [`pair`](Self::pair)
/// used by the generator to remove givens in matched sets, producing
/// visually symmetric puzzles. Every pairing is an involution:
/// `sym.pair(sym.pair(p)) == p` (for [`Symmetry::None`] the pairing is the
/// identity).
///
/// Variants are keyed by a stable machine identifier for persistence and
/// export naming; display strings are a presentation concern handled
/// outside the core.
///
/// # Examples
///
/// ```
/// use sudogen_core::{Position, Symmetry};
///
/// let sym = Symmetry::Rotational180;
/// assert_eq!(sym.pair(Position::new(0, 0), 9), Position::new(8, 8));
/// assert_eq!(Symmetry::from_identifier("rotational-180"), Ok(sym));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// No symmetry; the pairing is the identity.
    None,
    /// 180° rotation about the board center.
    Rotational180,
    /// Mirroring across the vertical center axis.
    VerticalMirror,
    /// Mirroring across the horizontal center axis.
    HorizontalMirror,
    /// Reflection across the main diagonal.
    Diagonal,
    /// Reflection across the anti-diagonal.
    AntiDiagonal,
}

impl Symmetry {
    /// All symmetry variants.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Rotational180,
        Self::VerticalMirror,
        Self::HorizontalMirror,
        Self::Diagonal,
        Self::AntiDiagonal,
    ];

    /// Returns the stable machine identifier of this variant.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rotational180 => "rotational-180",
            Self::VerticalMirror => "vertical-mirror",
            Self::HorizontalMirror => "horizontal-mirror",
            Self::Diagonal => "diagonal",
            Self::AntiDiagonal => "anti-diagonal",
        }
    }

    /// Looks up a variant by its stable identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `identifier` names no variant. Unknown
    /// identifiers are never mapped to a default.
    pub fn from_identifier(identifier: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|sym| sym.identifier() == identifier)
            .ok_or_else(|| ParseError::new("symmetry", identifier))
    }

    /// Returns the position paired with `pos` on a board with line length
    /// `unit`.
    ///
    /// Cells on the symmetry axis (or the identity pairing of
    /// [`Symmetry::None`]) map to themselves.
    #[must_use]
    pub const fn pair(self, pos: Position, unit: u8) -> Position {
        let (row, col) = (pos.row(), pos.col());
        let last = unit - 1;
        match self {
            Self::None => pos,
            Self::Rotational180 => Position::new(last - row, last - col),
            Self::VerticalMirror => Position::new(row, last - col),
            Self::HorizontalMirror => Position::new(last - row, col),
            Self::Diagonal => Position::new(col, row),
            Self::AntiDiagonal => Position::new(last - col, last - row),
        }
    }
}

impl Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Dimension;

    #[test]
    fn test_identifier_round_trip() {
        for sym in Symmetry::ALL {
            assert_eq!(Symmetry::from_identifier(sym.identifier()), Ok(sym));
        }
    }

    #[test]
    fn test_unknown_identifier_fails_loudly() {
        let err = Symmetry::from_identifier("spiral").unwrap_err();
        assert_eq!(err.kind(), "symmetry");
        assert_eq!(err.identifier(), "spiral");
    }

    #[test]
    fn test_pairings() {
        let unit = 9;
        assert_eq!(
            Symmetry::None.pair(Position::new(2, 5), unit),
            Position::new(2, 5)
        );
        assert_eq!(
            Symmetry::Rotational180.pair(Position::new(2, 5), unit),
            Position::new(6, 3)
        );
        assert_eq!(
            Symmetry::VerticalMirror.pair(Position::new(2, 5), unit),
            Position::new(2, 3)
        );
        assert_eq!(
            Symmetry::HorizontalMirror.pair(Position::new(2, 5), unit),
            Position::new(6, 5)
        );
        assert_eq!(
            Symmetry::Diagonal.pair(Position::new(2, 5), unit),
            Position::new(5, 2)
        );
        assert_eq!(
            Symmetry::AntiDiagonal.pair(Position::new(2, 5), unit),
            Position::new(3, 6)
        );
    }

    #[test]
    fn test_diagonal_fixes_main_diagonal() {
        for i in 0..9 {
            let pos = Position::new(i, i);
            assert_eq!(Symmetry::Diagonal.pair(pos, 9), pos);
        }
    }

    proptest! {
        #[test]
        fn prop_pair_is_involution(
            dim_index in 0usize..3,
            row in 0u8..16,
            col in 0u8..16,
            sym_index in 0usize..6,
        ) {
            let dim = Dimension::ALL[dim_index];
            let unit = dim.unit();
            let pos = Position::new(row % unit, col % unit);
            let sym = Symmetry::ALL[sym_index];
            prop_assert_eq!(sym.pair(sym.pair(pos, unit), unit), pos);
        }
    }
}
