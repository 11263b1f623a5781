//! Shared proptest strategies and test setup.

#![allow(dead_code)]

use grid_games::core::{Participant, Position};
use grid_games::games::{checkers, tictactoe};
use grid_games::rules::Line;
use proptest::collection::vec;
use proptest::prelude::*;

/// Route `tracing` output through the test harness (`RUST_LOG=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn position<const W: usize>() -> impl Strategy<Value = Position<W>> {
    (0..Position::<W>::CELLS).prop_map(|index| Position::<W>::from_index(index).unwrap())
}

// === Tic-tac-toe ===

pub fn player() -> impl Strategy<Value = tictactoe::Player> {
    prop::sample::select(tictactoe::Player::ALL.to_vec())
}

pub fn mark() -> impl Strategy<Value = tictactoe::Mark> {
    prop_oneof![Just(None), player().prop_map(Some)]
}

pub fn board() -> impl Strategy<Value = tictactoe::Board> {
    vec(mark(), 9).prop_map(|cells| tictactoe::Board::from_cells(cells).unwrap())
}

/// Boards holding only empty cells and `player`'s opponent.
pub fn board_without(player: tictactoe::Player) -> impl Strategy<Value = tictactoe::Board> {
    let cell = prop_oneof![2 => Just(None), 1 => Just(Some(player.opponent()))];
    vec(cell, 9).prop_map(|cells| tictactoe::Board::from_cells(cells).unwrap())
}

pub fn line() -> impl Strategy<Value = Line<3>> {
    prop::sample::select(Line::<3>::all())
}

/// Two different lines.
pub fn two_lines() -> impl Strategy<Value = (Line<3>, Line<3>)> {
    prop::sample::subsequence(Line::<3>::all(), 2)
        .prop_shuffle()
        .prop_map(|lines| (lines[0], lines[1]))
}

/// Two lines sharing no position.
pub fn disjoint_lines() -> impl Strategy<Value = (Line<3>, Line<3>)> {
    let lines = Line::<3>::all();
    let pairs: Vec<_> = lines
        .iter()
        .flat_map(|a| lines.iter().map(move |b| (*a, *b)))
        .filter(|(a, b)| !a.positions().iter().any(|&p| b.contains(p)))
        .collect();
    prop::sample::select(pairs)
}

pub fn fill_line(
    board: &tictactoe::Board,
    player: tictactoe::Player,
    line: &Line<3>,
) -> tictactoe::Board {
    line.positions()
        .iter()
        .fold(board.clone(), |board, &pos| board.place(pos, player))
}

// === Checkers ===

pub fn checkers_player() -> impl Strategy<Value = checkers::Player> {
    prop::sample::select(checkers::Player::ALL.to_vec())
}

pub fn piece() -> impl Strategy<Value = checkers::Piece> {
    let kind = prop_oneof![Just(checkers::PieceKind::Man), Just(checkers::PieceKind::King)];
    (kind, checkers_player()).prop_map(|(kind, owner)| checkers::Piece::new(kind, owner))
}

pub fn cell_state() -> impl Strategy<Value = checkers::CellState> {
    prop_oneof![Just(None), piece().prop_map(Some)]
}

pub fn checkers_board() -> impl Strategy<Value = checkers::Board> {
    vec(cell_state(), 16).prop_map(|cells| checkers::Board::from_cells(cells).unwrap())
}
