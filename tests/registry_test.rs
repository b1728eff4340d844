//! Tests for the in-memory game registry.

use std::thread;

use tictactoe_backend::{GameId, GameRegistry, GameStatus, MoveError, Player, RegistryError};

#[test]
fn test_create_stores_fresh_game() {
    let registry = GameRegistry::new();
    assert!(registry.is_empty());

    let id = registry.create();
    let game = registry.get(&id).expect("Game exists");
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board().occupied(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_get_unknown_is_not_found() {
    let registry = GameRegistry::new();
    registry.create();

    let missing = GameId::new();
    assert_eq!(registry.get(&missing), Err(RegistryError::NotFound(missing)));
    assert_eq!(
        registry.make_move(&missing, 0),
        Err(RegistryError::NotFound(missing))
    );
}

#[test]
fn test_move_persists() {
    let registry = GameRegistry::new();
    let id = registry.create();

    let returned = registry.make_move(&id, 4).expect("Valid move");
    let stored = registry.get(&id).expect("Game exists");
    assert_eq!(returned, stored);
    assert_eq!(stored.next_player(), Player::O);
}

#[test]
fn test_invalid_move_leaves_game_unchanged() {
    let registry = GameRegistry::new();
    let id = registry.create();
    registry.make_move(&id, 4).expect("Valid move");
    let before = registry.get(&id).expect("Game exists");

    assert_eq!(
        registry.make_move(&id, 9),
        Err(RegistryError::InvalidMove(MoveError::OutOfRange(9)))
    );
    assert!(matches!(
        registry.make_move(&id, 4),
        Err(RegistryError::InvalidMove(MoveError::CellOccupied(_)))
    ));
    assert_eq!(registry.get(&id).expect("Game exists"), before);
}

#[test]
fn test_games_are_independent() {
    let registry = GameRegistry::new();
    let first = registry.create();
    let second = registry.create();

    registry.make_move(&first, 0).expect("Valid move");
    assert_eq!(registry.get(&second).expect("Game exists").board().occupied(), 0);
}

#[test]
fn test_clones_share_games() {
    let registry = GameRegistry::new();
    let handle = registry.clone();
    let id = handle.create();
    assert!(registry.get(&id).is_ok());
}

#[test]
fn test_concurrent_moves_on_same_cell() {
    let registry = GameRegistry::new();
    let id = registry.create();

    let results: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || registry.make_move(&id, 4))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let game = registry.get(&id).expect("Game exists");
    assert_eq!(game.board().occupied(), 1);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_game_id_parses_from_display() {
    let id = GameId::new();
    let parsed: GameId = id.to_string().parse().expect("Round trip");
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<GameId>().is_err());
}
