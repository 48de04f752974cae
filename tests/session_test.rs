//! Tests for the session registry and turn orchestration.

use mancala::{GameStatus, Player, PlayerType, SessionManager, Side};
use uuid::Uuid;

#[test]
fn test_create_and_snapshot() {
    let sessions = SessionManager::new(6, 6);
    let id = sessions.create_game(Player::human("Ada"), None);

    let snapshot = sessions.snapshot(id).unwrap();

    assert_eq!(
        snapshot.board,
        vec![6, 6, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0]
    );
    assert_eq!(snapshot.current_side, Side::South);
    assert_eq!(snapshot.status, GameStatus::Active);
    assert!(snapshot.winner.is_none());
    assert_eq!(snapshot.players[0].name, "Ada");
    // Second seat defaults to the built-in agent
    assert_eq!(snapshot.players[1].player_type, PlayerType::Agent);
}

#[test]
fn test_unknown_game_is_not_found() {
    let sessions = SessionManager::new(6, 6);
    let err = sessions.snapshot(Uuid::new_v4()).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_south_pit_numbering() {
    let sessions = SessionManager::new(6, 6);
    let id = sessions.create_game(Player::human("Ada"), Some(Player::human("Bo")));

    // Pit 1 holds six stones and ends in the store: extra turn
    let outcome = sessions.make_move(id, 1).unwrap();

    assert!(outcome.success);
    assert!(outcome.extra_turn);
    let snapshot = sessions.snapshot(id).unwrap();
    assert_eq!(snapshot.board[0], 0);
    assert_eq!(snapshot.board[6], 1);
    assert_eq!(snapshot.current_side, Side::South);
}

#[test]
fn test_north_pit_numbering() {
    let sessions = SessionManager::new(6, 6);
    let id = sessions.create_game(Player::human("Ada"), Some(Player::human("Bo")));
    assert!(sessions.make_move(id, 2).unwrap().success);

    // North's pit 1 is slot 7
    let outcome = sessions.make_move(id, 1).unwrap();

    assert!(outcome.success);
    let snapshot = sessions.snapshot(id).unwrap();
    assert_eq!(snapshot.board[7], 0);
}

#[test]
fn test_out_of_range_pit_is_rule_violation() {
    let sessions = SessionManager::new(6, 6);
    let id = sessions.create_game(Player::human("Ada"), None);

    assert!(!sessions.make_move(id, 0).unwrap().success);

    let outcome = sessions.make_move(id, 7).unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Invalid pit selected.");
}

#[test]
fn test_agent_turns_wait_for_agent_seat() {
    let sessions = SessionManager::new(6, 6);
    let id = sessions.create_game(Player::human("Ada"), None);

    // South (human) to move: nothing for the agent to do
    assert!(sessions.run_agent_turns(id).unwrap().is_empty());
}

#[test]
fn test_agent_turns_run_until_turn_passes() {
    let sessions = SessionManager::new(6, 6);
    let id = sessions.create_game(Player::human("Ada"), None);

    // Hand the turn to the agent with a plain move
    let outcome = sessions.make_move(id, 2).unwrap();
    assert!(outcome.success && !outcome.extra_turn);

    let outcomes = sessions.run_agent_turns(id).unwrap();

    assert!(!outcomes.is_empty());
    let last = outcomes.last().unwrap();
    assert!(last.game_over || !last.extra_turn);
    // Every outcome before the last kept the turn
    for outcome in &outcomes[..outcomes.len() - 1] {
        assert!(outcome.extra_turn);
    }

    // Turn is back with the human unless the game ended
    let snapshot = sessions.snapshot(id).unwrap();
    if snapshot.status == GameStatus::Active {
        assert_eq!(snapshot.current_side, Side::South);
    }
}

#[test]
fn test_agent_move_none_for_human_seat() {
    let sessions = SessionManager::new(6, 6);
    let id = sessions.create_game(Player::human("Ada"), Some(Player::human("Bo")));

    assert_eq!(sessions.agent_move(id).unwrap(), None);
}

#[test]
fn test_custom_board_dimensions() {
    let sessions = SessionManager::new(4, 3);
    let id = sessions.create_game(Player::human("Ada"), None);

    let snapshot = sessions.snapshot(id).unwrap();

    assert_eq!(snapshot.board, vec![3, 3, 3, 3, 0, 3, 3, 3, 3, 0]);
    assert_eq!(snapshot.pits_per_side(), 4);
    // Pit 5 does not exist on a 4-pit board
    assert!(!sessions.make_move(id, 5).unwrap().success);
}
