//! Tests for board geometry and end-of-game collection.

use mancala::{Board, Side, Winner};

#[test]
fn test_initial_layout() {
    let board = Board::new(6, 6);
    assert_eq!(board.slot_count(), 14);
    assert_eq!(board.slots(), &[6, 6, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0]);
}

#[test]
fn test_side_pits() {
    let board = Board::new(6, 6);
    assert_eq!(
        board.side_pits(Side::South).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4, 5]
    );
    assert_eq!(
        board.side_pits(Side::North).collect::<Vec<_>>(),
        vec![7, 8, 9, 10, 11, 12]
    );
}

#[test]
fn test_store_indices() {
    let board = Board::new(6, 6);
    assert_eq!(board.store_index(Side::South), 6);
    assert_eq!(board.store_index(Side::North), 13);
}

#[test]
fn test_opposite_mapping() {
    let board = Board::new(6, 6);
    assert_eq!(board.opposite_index(0), Some(12));
    assert_eq!(board.opposite_index(5), Some(7));
    assert_eq!(board.opposite_index(7), Some(5));
    assert_eq!(board.opposite_index(12), Some(0));
    // Stores have no opposite
    assert_eq!(board.opposite_index(6), None);
    assert_eq!(board.opposite_index(13), None);
}

#[test]
fn test_is_over_when_one_side_empty() {
    let mut board = Board::new(6, 6);
    assert!(!board.is_over());

    for pit in board.side_pits(Side::South) {
        board.set_stones(pit, 0);
    }
    assert!(board.is_over());
}

#[test]
fn test_collect_remaining_noop_while_live() {
    let mut board = Board::new(6, 6);
    let before = board.slots().to_vec();
    board.collect_remaining();
    assert_eq!(board.slots(), before.as_slice());
}

#[test]
fn test_collect_remaining_stays_on_side() {
    let mut board = Board::new(6, 6);
    for pit in board.side_pits(Side::South) {
        board.set_stones(pit, 0);
    }

    board.collect_remaining();

    // South had nothing left; north swept its own row only
    assert_eq!(board.stones_at(6), 0);
    assert_eq!(board.stones_at(13), 36);
    for pit in board.side_pits(Side::North) {
        assert_eq!(board.stones_at(pit), 0);
    }
}

#[test]
fn test_collect_remaining_idempotent() {
    let mut board = Board::new(6, 6);
    for pit in board.side_pits(Side::North) {
        board.set_stones(pit, 0);
    }

    board.collect_remaining();
    let once = board.slots().to_vec();
    board.collect_remaining();
    assert_eq!(board.slots(), once.as_slice());
}

#[test]
fn test_winner_none_while_live() {
    let mut board = Board::new(6, 6);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_winner_collects_then_compares() {
    let mut board = Board::new(6, 6);
    for pit in 0..6 {
        board.set_stones(pit, 0);
    }
    for pit in 7..13 {
        board.set_stones(pit, 0);
    }
    board.set_stones(6, 30);
    board.set_stones(7, 8);
    board.set_stones(13, 10);

    assert_eq!(board.winner(), Some(Winner::Side(Side::South)));
    // North's 8 remaining stones were swept before comparing
    assert_eq!(board.stones_at(13), 18);
}

#[test]
fn test_winner_draw() {
    let mut board = Board::new(6, 6);
    for pit in 0..6 {
        board.set_stones(pit, 0);
    }
    for pit in 7..13 {
        board.set_stones(pit, 0);
    }
    board.set_stones(6, 36);
    board.set_stones(13, 36);

    assert_eq!(board.winner(), Some(Winner::Draw));
}
