//! Board dimension.

use std::fmt::{self, Display};

use crate::{Position, error::ParseError};

/// The size class of a board.
///
/// A dimension `d` defines a `(d²)×(d²)` board partitioned into `d×d` boxes
/// of `d×d` cells each. Three dimensions are supported: 4×4, 9×9, and 16×16
/// boards. The symbol count and line length is `unit = d²`.
///
/// # Examples
///
/// ```
/// use sudogen_core::Dimension;
///
/// let dim = Dimension::Three;
/// assert_eq!(dim.box_size(), 3);
/// assert_eq!(dim.unit(), 9);
/// assert_eq!(dim.cell_count(), 81);
/// assert_eq!(dim.to_string(), "9x9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// A 4×4 board of 2×2 boxes.
    Two,
    /// A 9×9 board of 3×3 boxes.
    Three,
    /// A 16×16 board of 4×4 boxes.
    Four,
}

impl Dimension {
    /// All supported dimensions, smallest first.
    pub const ALL: [Self; 3] = [Self::Two, Self::Three, Self::Four];

    /// Returns the box side length (2, 3, or 4).
    #[must_use]
    pub const fn box_size(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Returns the line length and symbol count (`box_size²`).
    #[must_use]
    pub const fn unit(self) -> u8 {
        self.box_size() * self.box_size()
    }

    /// Returns the number of cells on the board (`unit²`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let unit = self.unit() as usize;
        unit * unit
    }

    /// Looks up a dimension by its box side length.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `box_size` is not 2, 3, or 4.
    pub fn from_box_size(box_size: u8) -> Result<Self, ParseError> {
        match box_size {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(ParseError::new("dimension", box_size.to_string())),
        }
    }

    /// Iterates over all positions of a board of this dimension, row-major.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let unit = self.unit();
        (0..unit).flat_map(move |row| (0..unit).map(move |col| Position::new(row, col)))
    }

    /// Iterates over the cell indices sharing a row, column, or box with the
    /// cell at `index`, excluding `index` itself.
    ///
    /// Each peer is yielded exactly once, even when it shares more than one
    /// house with the cell.
    pub fn peer_indices(self, index: usize) -> impl Iterator<Item = usize> {
        let unit = usize::from(self.unit());
        let b = usize::from(self.box_size());
        let row = index / unit;
        let col = index % unit;
        let box_row = row - row % b;
        let box_col = col - col % b;
        let row_peers = (0..unit).map(move |c| row * unit + c);
        let col_peers = (0..unit).map(move |r| r * unit + col);
        let box_peers = (0..b * b)
            .map(move |i| (box_row + i / b) * unit + (box_col + i % b))
            .filter(move |&i| i / unit != row && i % unit != col);
        row_peers
            .chain(col_peers)
            .chain(box_peers)
            .filter(move |&i| i != index)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        write!(f, "{unit}x{unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(Dimension::Two.unit(), 4);
        assert_eq!(Dimension::Two.cell_count(), 16);
        assert_eq!(Dimension::Three.unit(), 9);
        assert_eq!(Dimension::Three.cell_count(), 81);
        assert_eq!(Dimension::Four.unit(), 16);
        assert_eq!(Dimension::Four.cell_count(), 256);
    }

    #[test]
    fn test_from_box_size_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::from_box_size(dim.box_size()), Ok(dim));
        }
        assert!(Dimension::from_box_size(0).is_err());
        assert!(Dimension::from_box_size(5).is_err());
    }

    #[test]
    fn test_positions_cover_board() {
        for dim in Dimension::ALL {
            assert_eq!(dim.positions().count(), dim.cell_count());
        }
    }

    #[test]
    fn test_peer_count() {
        // unit-1 row peers, unit-1 column peers, (box_size-1)^2 box peers
        // outside the cell's row and column.
        for dim in Dimension::ALL {
            let unit = usize::from(dim.unit());
            let b = usize::from(dim.box_size());
            let expected = 2 * (unit - 1) + (b - 1) * (b - 1);
            for index in 0..dim.cell_count() {
                assert_eq!(dim.peer_indices(index).count(), expected);
            }
        }
    }

    #[test]
    fn test_peers_are_unique_and_exclude_self() {
        let dim = Dimension::Three;
        for index in 0..dim.cell_count() {
            let peers: Vec<_> = dim.peer_indices(index).collect();
            let mut deduped = peers.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(peers.len(), deduped.len());
            assert!(!peers.contains(&index));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::Two.to_string(), "4x4");
        assert_eq!(Dimension::Three.to_string(), "9x9");
        assert_eq!(Dimension::Four.to_string(), "16x16");
    }
}
