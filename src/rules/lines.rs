//! Line-based win detection.
//!
//! A `W`×`W` board has `2W + 2` lines: `W` rows, `W` columns and the two
//! diagonals. A line is *winning* when every cell on it holds the same
//! occupant.
//!
//! ## Winner policy
//!
//! A board has a winner only when it has **exactly one** winning line. A
//! board with two or more winning lines has no winner, whether those lines
//! belong to one player or to both (an over-determined board). This is the
//! rule the line-game plays by; it is not "first winning line wins".
//!
//! Everything here is a pure query over a `BoardState`.

use tracing::trace;

use crate::core::{BoardState, Position};

/// Which row, column or diagonal a `Line` is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// `W` positions forming a row, column or diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line<const W: usize> {
    kind: LineKind,
    positions: [Position<W>; W],
}

impl<const W: usize> Line<W> {
    fn row(row: usize) -> Self {
        Self {
            kind: LineKind::Row(row),
            positions: std::array::from_fn(|col| Position::at(row, col)),
        }
    }

    fn column(col: usize) -> Self {
        Self {
            kind: LineKind::Column(col),
            positions: std::array::from_fn(|row| Position::at(row, col)),
        }
    }

    fn diagonal() -> Self {
        Self {
            kind: LineKind::Diagonal,
            positions: std::array::from_fn(|i| Position::at(i, i)),
        }
    }

    fn anti_diagonal() -> Self {
        Self {
            kind: LineKind::AntiDiagonal,
            positions: std::array::from_fn(|i| Position::at(i, W - 1 - i)),
        }
    }

    /// Every line of the board: rows, then columns, then the two diagonals.
    ///
    /// ```
    /// use grid_games::rules::Line;
    ///
    /// assert_eq!(Line::<3>::all().len(), 8);
    /// assert_eq!(Line::<4>::all().len(), 10);
    /// ```
    #[must_use]
    pub fn all() -> Vec<Self> {
        (0..W)
            .map(Self::row)
            .chain((0..W).map(Self::column))
            .chain([Self::diagonal(), Self::anti_diagonal()])
            .collect()
    }

    #[must_use]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The positions on this line, in order of increasing row (columns for
    /// a row line).
    #[must_use]
    pub fn positions(&self) -> &[Position<W>; W] {
        &self.positions
    }

    #[must_use]
    pub fn contains(&self, pos: Position<W>) -> bool {
        self.positions.contains(&pos)
    }

    /// The occupant holding every cell of this line, if there is one.
    #[must_use]
    pub fn occupant<'a, T>(&self, board: &'a BoardState<T, W>) -> Option<&'a T>
    where
        T: Clone + PartialEq,
    {
        let (first, rest) = self.positions.split_first()?;
        let occupant = board.cell(*first)?;
        rest.iter()
            .all(|&pos| board.cell(pos) == Some(occupant))
            .then_some(occupant)
    }
}

/// All lines fully held by a single occupant, in `Line::all` order.
#[must_use]
pub fn winning_lines<T, const W: usize>(board: &BoardState<T, W>) -> Vec<Line<W>>
where
    T: Clone + PartialEq,
{
    Line::all()
        .into_iter()
        .filter(|line| line.occupant(board).is_some())
        .collect()
}

/// The winner, present only when exactly one line is winning.
#[must_use]
pub fn winner<T, const W: usize>(board: &BoardState<T, W>) -> Option<T>
where
    T: Clone + PartialEq,
{
    match winning_lines(board).as_slice() {
        [line] => line.occupant(board).cloned(),
        [] => None,
        lines => {
            trace!(lines = lines.len(), "several winning lines, no winner");
            None
        }
    }
}

#[must_use]
pub fn has_winner<T, const W: usize>(board: &BoardState<T, W>) -> bool
where
    T: Clone + PartialEq,
{
    winner(board).is_some()
}

/// Full board without a winner.
#[must_use]
pub fn is_tie<T, const W: usize>(board: &BoardState<T, W>) -> bool
where
    T: Clone + PartialEq,
{
    board.is_full() && !has_winner(board)
}

/// Full board, or a board with a winner.
#[must_use]
pub fn has_ended<T, const W: usize>(board: &BoardState<T, W>) -> bool
where
    T: Clone + PartialEq,
{
    board.is_full() || has_winner(board)
}
