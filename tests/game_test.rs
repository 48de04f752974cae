//! Tests for mancala move execution.

use mancala::{Board, Game, Side, Winner};

fn stone_total(game: &Game) -> u32 {
    game.board().slots().iter().sum()
}

#[test]
fn test_opening_pit_one_earns_extra_turn() {
    let mut game = Game::new(6, 6);

    let outcome = game.make_move(0);

    assert!(outcome.success);
    assert!(outcome.extra_turn);
    assert!(!outcome.game_over);
    // Six stones reach pits 1-5 and the store; the turn repeats
    assert_eq!(
        game.board().slots(),
        &[0, 7, 7, 7, 7, 7, 1, 6, 6, 6, 6, 6, 6, 0]
    );
    assert_eq!(game.current_side(), Side::South);
}

#[test]
fn test_empty_pit_rejected() {
    let mut board = Board::new(6, 6);
    board.set_stones(0, 0);
    let mut game = Game::from_board(board, Side::South);
    let before = game.board().slots().to_vec();

    let outcome = game.make_move(0);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Selected pit is empty.");
    assert_eq!(game.board().slots(), before.as_slice());
    assert_eq!(game.current_side(), Side::South);
}

#[test]
fn test_foreign_pit_rejected() {
    let mut game = Game::new(6, 6);

    let outcome = game.make_move(7);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Invalid pit selected.");
}

#[test]
fn test_store_is_not_a_playable_pit() {
    let mut game = Game::new(6, 6);
    assert!(!game.make_move(6).success);
}

#[test]
fn test_plain_move_switches_sides() {
    let mut game = Game::new(6, 6);

    let outcome = game.make_move(1);

    assert!(outcome.success);
    assert!(!outcome.extra_turn);
    assert_eq!(game.current_side(), Side::North);
}

#[test]
fn test_capture_takes_opposite_pit() {
    let mut board = Board::new(6, 6);
    board.set_stones(0, 2);
    board.set_stones(2, 0);
    let mut game = Game::from_board(board, Side::South);

    let outcome = game.make_move(0);

    assert!(outcome.success);
    assert!(!outcome.extra_turn);
    // Landing stone plus the six opposite stones all reach the store
    assert_eq!(game.board().stones_at(6), 7);
    assert_eq!(game.board().stones_at(2), 0);
    assert_eq!(game.board().stones_at(10), 0);
    assert_eq!(game.current_side(), Side::North);
}

#[test]
fn test_no_capture_when_opposite_empty() {
    let mut board = Board::new(6, 6);
    board.set_stones(0, 2);
    board.set_stones(2, 0);
    board.set_stones(10, 0);
    let mut game = Game::from_board(board, Side::South);

    let outcome = game.make_move(0);

    assert!(outcome.success);
    // The single stone stays put
    assert_eq!(game.board().stones_at(2), 1);
    assert_eq!(game.board().stones_at(6), 0);
    assert_eq!(game.current_side(), Side::North);
}

#[test]
fn test_emptying_a_side_ends_the_game() {
    let mut board = Board::new(6, 6);
    for pit in 0..6 {
        board.set_stones(pit, 0);
    }
    board.set_stones(5, 1);
    let mut game = Game::from_board(board, Side::South);

    let outcome = game.make_move(5);

    assert!(outcome.success);
    assert!(outcome.game_over);
    assert!(!outcome.extra_turn);
    assert!(game.is_over());
    // Side does not switch on the terminating move
    assert_eq!(game.current_side(), Side::South);

    // Winner is settled only after sweeping north's row into its store
    assert_eq!(game.winner(), Some(Winner::Side(Side::North)));
    assert_eq!(game.board().stones_at(13), 36);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut board = Board::new(6, 6);
    for pit in 0..6 {
        board.set_stones(pit, 0);
    }
    board.set_stones(5, 1);
    let mut game = Game::from_board(board, Side::South);
    assert!(game.make_move(5).game_over);

    let outcome = game.make_move(5);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Game is already over.");
}

#[test]
fn test_sowing_skips_opponent_store() {
    let mut board = Board::new(6, 6);
    board.set_stones(5, 20);
    let mut game = Game::from_board(board, Side::South);
    let total = stone_total(&game);

    let outcome = game.make_move(5);

    assert!(outcome.success);
    // 20 stones wrap the whole board without ever feeding slot 13
    assert_eq!(game.board().stones_at(13), 0);
    assert_eq!(stone_total(&game), total);
    assert_eq!(game.current_side(), Side::North);
}

#[test]
fn test_stone_conservation_through_play() {
    let mut game = Game::new(6, 6);
    let total = stone_total(&game);

    // Always play the first non-empty pit of the side to move
    for _ in 0..20 {
        if game.is_over() {
            break;
        }
        let side = game.current_side();
        let pit = game
            .board()
            .side_pits(side)
            .find(|&pit| game.board().stones_at(pit) > 0)
            .unwrap();

        assert!(game.make_move(pit).success);
        assert_eq!(stone_total(&game), total);
    }
}
