//! Board coordinates.
//!
//! ## Position
//!
//! A `Position<W>` addresses one cell of a `W`×`W` grid. It converts
//! between `(row, col)` and the linear row-major index
//! `row * W + col`. Both constructors validate their bounds, so every
//! `Position` value in circulation is valid for its board width.
//!
//! The width is a const parameter: the line-game uses `Position<3>` and the
//! capture-game `Position<4>`. Positions of different widths are different
//! types and cannot be mixed up.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cell coordinate on a `W`×`W` board.
///
/// Equality and ordering follow the linear index, so sorting positions
/// yields row-major order.
///
/// ```
/// use grid_games::core::Position;
///
/// let pos = Position::<3>::new(1, 2).unwrap();
/// assert_eq!(pos.index(), 5);
/// assert_eq!(pos.to_array(), [1, 2]);
/// assert_eq!(Position::<3>::from_index(5).unwrap(), pos);
///
/// assert!(Position::<3>::new(3, 0).is_err());
/// assert!(Position::<3>::from_index(9).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Position<const W: usize> {
    index: usize,
}

/// Checkerboard colour of a cell: `Even` when `row + col` is even.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl<const W: usize> Position<W> {
    /// Number of cells on a board of this width.
    pub const CELLS: usize = W * W;

    /// Create a position from a row and column.
    ///
    /// Fails with `OutOfRange` if either coordinate is not in `0..W`.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= W {
            return Err(Error::OutOfRange {
                what: "row",
                value: row,
                limit: W,
            });
        }
        if col >= W {
            return Err(Error::OutOfRange {
                what: "col",
                value: col,
                limit: W,
            });
        }
        Ok(Self::at(row, col))
    }

    /// Create a position from its row-major index.
    ///
    /// Fails with `OutOfRange` if `index` is not in `0..W*W`.
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= Self::CELLS {
            return Err(Error::OutOfRange {
                what: "index",
                value: index,
                limit: Self::CELLS,
            });
        }
        Ok(Self { index })
    }

    /// Unchecked constructor for coordinates already known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { index: row * W + col }
    }

    /// Row-major index in `0..W*W`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index / W
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index % W
    }

    /// The coordinates as `[row, col]`.
    #[must_use]
    pub const fn to_array(self) -> [usize; 2] {
        [self.row(), self.col()]
    }

    /// Checkerboard colour of this cell.
    #[must_use]
    pub const fn parity(self) -> Parity {
        if (self.row() + self.col()) % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Iterate over every position of the board, row by row.
    ///
    /// Each call starts a fresh iterator.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..Self::CELLS).map(|index| Self { index })
    }
}

impl<const W: usize> TryFrom<usize> for Position<W> {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::from_index(index)
    }
}

impl<const W: usize> From<Position<W>> for usize {
    fn from(pos: Position<W>) -> usize {
        pos.index()
    }
}

impl<const W: usize> std::fmt::Display for Position<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
