//! Immutable board state.
//!
//! ## BoardState
//!
//! A fixed grid of `W*W` cells, each either empty (`None`) or holding an
//! occupant (`Some(T)`). The occupant is a `Player` in the line-game and a
//! `Piece` in the capture-game.
//!
//! Boards are values: `set` returns a new board and leaves the receiver
//! untouched. Cells live in an `im::Vector`, so the new board shares all
//! unchanged storage with the old one and cloning a board is O(1).
//!
//! ## Text form
//!
//! Boards whose occupant implements `CellSymbol` print as one character per
//! cell in row-major order, `.` for empty (`"XO......."` style). The same
//! form parses back with `str::parse`; whitespace and `/` are ignored so
//! rows may be separated for readability.

use im::Vector;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::position::Position;
use crate::error::{Error, Result};

/// Character used for an empty cell in the board text form.
pub const EMPTY_SYMBOL: char = '.';

/// Single-character representation of a cell occupant.
pub trait CellSymbol: Sized {
    /// The character written for this occupant.
    fn symbol(&self) -> char;

    /// Parse an occupant from its character, `None` if unknown.
    fn from_symbol(symbol: char) -> Option<Self>;
}

/// Immutable `W`×`W` grid of optional occupants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardState<T: Clone, const W: usize> {
    cells: Vector<Option<T>>,
}

impl<T: Clone, const W: usize> BoardState<T, W> {
    /// Number of cells on the board.
    pub const CELLS: usize = W * W;

    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: std::iter::repeat(None).take(Self::CELLS).collect(),
        }
    }

    /// Build a board from exactly `W*W` cells in row-major order.
    ///
    /// Fails with `InvalidLength` for any other number of cells. The board
    /// keeps its own copy of the cells.
    pub fn from_cells(cells: impl IntoIterator<Item = Option<T>>) -> Result<Self> {
        let cells: Vector<Option<T>> = cells.into_iter().collect();
        if cells.len() != Self::CELLS {
            return Err(Error::InvalidLength {
                expected: Self::CELLS,
                got: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// Copy the cells out in row-major order.
    ///
    /// Index `i` of the result is the cell at `Position::from_index(i)`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Option<T>> {
        self.cells.iter().cloned().collect()
    }

    /// The cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position<W>) -> Option<T> {
        self.cells[pos.index()].clone()
    }

    /// Borrow the occupant at `pos`, if any.
    #[must_use]
    pub fn cell(&self, pos: Position<W>) -> Option<&T> {
        self.cells[pos.index()].as_ref()
    }

    /// A new board with the cell at `pos` replaced by `value`.
    ///
    /// Every other cell is unchanged and `self` is left as it was.
    #[must_use]
    pub fn set(&self, pos: Position<W>, value: Option<T>) -> Self {
        Self {
            cells: self.cells.update(pos.index(), value),
        }
    }

    /// Shorthand for `set(pos, Some(occupant))`.
    #[must_use]
    pub fn place(&self, pos: Position<W>, occupant: T) -> Self {
        self.set(pos, Some(occupant))
    }

    #[must_use]
    pub fn is_empty_at(&self, pos: Position<W>) -> bool {
        self.cells[pos.index()].is_none()
    }

    /// All empty positions, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position<W>> {
        Position::all().filter(|&pos| self.is_empty_at(pos)).collect()
    }

    /// True iff no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over `(position, occupant)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position<W>, Option<&T>)> + '_ {
        Position::all().zip(self.cells.iter().map(Option::as_ref))
    }
}

impl<T: Clone, const W: usize> Default for BoardState<T, W> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + CellSymbol, const W: usize> std::fmt::Display for BoardState<T, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in self.cells.iter() {
            let symbol = cell.as_ref().map_or(EMPTY_SYMBOL, CellSymbol::symbol);
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl<T: Clone + CellSymbol, const W: usize> std::str::FromStr for BoardState<T, W> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .enumerate()
            .map(|(index, character)| {
                if character == EMPTY_SYMBOL {
                    Ok(None)
                } else {
                    T::from_symbol(character)
                        .map(Some)
                        .ok_or(Error::InvalidCell { character, index })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(cells)
    }
}

impl<T: Clone + Serialize, const W: usize> Serialize for BoardState<T, W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter())
    }
}

impl<'de, T: Clone + Deserialize<'de>, const W: usize> Deserialize<'de> for BoardState<T, W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let cells = Vec::<Option<T>>::deserialize(deserializer)?;
        Self::from_cells(cells).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    type Board = BoardState<Player, 3>;
    type Pos = Position<3>;

    #[test]
    fn test_empty() {
        let board = Board::empty();
        assert_eq!(board.to_vec(), vec![None; 9]);
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_from_cells_length() {
        assert!(Board::from_cells(vec![None; 9]).is_ok());
        assert_eq!(
            Board::from_cells(vec![None; 8]),
            Err(Error::InvalidLength { expected: 9, got: 8 })
        );
        assert_eq!(
            Board::from_cells(vec![None; 10]),
            Err(Error::InvalidLength { expected: 9, got: 10 })
        );
        assert!(BoardState::<Player, 4>::from_cells(vec![None; 16]).is_ok());
    }

    #[test]
    fn test_to_vec_is_a_copy() {
        let board = Board::empty();
        let mut cells = board.to_vec();
        cells[0] = Some(Player::X);
        assert_eq!(board.get(Pos::at(0, 0)), None);
    }

    #[test]
    fn test_set_leaves_receiver_unchanged() {
        let board = Board::empty();
        let before = board.to_vec();

        let next = board.place(Pos::at(1, 1), Player::O);

        assert_eq!(board.to_vec(), before);
        assert_eq!(next.get(Pos::at(1, 1)), Some(Player::O));
        for pos in Pos::all().filter(|&p| p != Pos::at(1, 1)) {
            assert_eq!(next.get(pos), board.get(pos));
        }
    }

    #[test]
    fn test_set_can_clear_a_cell() {
        let board = Board::empty().place(Pos::at(0, 2), Player::X);
        let cleared = board.set(Pos::at(0, 2), None);

        assert_eq!(cleared, Board::empty());
        assert_eq!(board.cell(Pos::at(0, 2)), Some(&Player::X));
    }

    #[test]
    fn test_empty_cells_and_is_full() {
        let board: Board = "XOX/OXO/XO.".parse().unwrap();
        assert_eq!(board.empty_cells(), vec![Pos::at(2, 2)]);
        assert!(!board.is_full());

        let full = board.place(Pos::at(2, 2), Player::X);
        assert!(full.empty_cells().is_empty());
        assert!(full.is_full());
    }

    #[test]
    fn test_iter_is_row_major() {
        let board = Board::empty().place(Pos::at(0, 1), Player::X);
        let cells: Vec<_> = board.iter().collect();

        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], (Pos::at(0, 0), None));
        assert_eq!(cells[1], (Pos::at(0, 1), Some(&Player::X)));
    }

    #[test]
    fn test_text_form() {
        let board = Board::empty()
            .place(Pos::at(0, 0), Player::X)
            .place(Pos::at(2, 1), Player::O);
        assert_eq!(board.to_string(), "X......O.");
        assert_eq!("X.. ... .O.".parse::<Board>().unwrap(), board);

        assert_eq!(
            "X.Z......".parse::<Board>(),
            Err(Error::InvalidCell { character: 'Z', index: 2 })
        );
        assert_eq!(
            "XO".parse::<Board>(),
            Err(Error::InvalidLength { expected: 9, got: 2 })
        );
    }

    #[test]
    fn test_serialization() {
        let board = Board::empty().place(Pos::at(1, 0), Player::O);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);

        assert!(serde_json::from_str::<Board>("[null, null]").is_err());
    }
}
