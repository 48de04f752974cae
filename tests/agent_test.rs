//! Tests for the heuristic opponent.

use mancala::{Agent, Board, Game, Side};

#[test]
fn test_prefers_extra_turn_over_capture() {
    let mut board = Board::new(6, 6);
    // Pit 0 would capture (lands in empty pit 2, opposite full);
    // pit 4 lands exactly in the store.
    board.set_stones(0, 2);
    board.set_stones(2, 0);
    board.set_stones(4, 2);
    let game = Game::from_board(board, Side::South);

    assert_eq!(Agent.choose_move(&game), Some(4));
}

#[test]
fn test_takes_capture_when_no_extra_turn() {
    let mut board = Board::new(6, 6);
    board.set_stones(0, 2);
    board.set_stones(2, 0);
    let game = Game::from_board(board, Side::South);

    assert_eq!(Agent.choose_move(&game), Some(0));
}

#[test]
fn test_capture_estimate_ignores_wraparound() {
    let mut board = Board::new(6, 6);
    // (0 + 16) mod 14 lands on pit 2 by the agent's estimate, though an
    // actual sow refills pit 2 on the way round and ends elsewhere. The
    // estimate decides.
    board.set_stones(0, 16);
    board.set_stones(2, 0);
    let game = Game::from_board(board, Side::South);

    assert_eq!(Agent.choose_move(&game), Some(0));
}

#[test]
fn test_falls_back_to_fullest_pit() {
    let mut board = Board::new(6, 6);
    for pit in 0..6 {
        board.set_stones(pit, 0);
    }
    board.set_stones(1, 2);
    board.set_stones(3, 5);
    board.set_stones(5, 4);
    let game = Game::from_board(board, Side::South);

    assert_eq!(Agent.choose_move(&game), Some(3));
}

#[test]
fn test_fullest_pit_ties_break_low() {
    let mut board = Board::new(6, 6);
    // Uniform 7s: no store landing, no capture, all tied
    for pit in 0..6 {
        board.set_stones(pit, 7);
    }
    let game = Game::from_board(board, Side::South);

    assert_eq!(Agent.choose_move(&game), Some(0));
}

#[test]
fn test_none_when_nothing_playable() {
    let mut board = Board::new(6, 6);
    for pit in 0..6 {
        board.set_stones(pit, 0);
    }
    let game = Game::from_board(board, Side::South);

    assert_eq!(Agent.choose_move(&game), None);
}

#[test]
fn test_chooses_for_north_side() {
    // On a fresh board north's pit 7 holds six stones and lands exactly
    // in the north store.
    let game = Game::from_board(Board::new(6, 6), Side::North);

    assert_eq!(Agent.choose_move(&game), Some(7));
}
