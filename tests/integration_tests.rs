//! Integration tests for the game loop state machine

use tui_2048::core::{Board, GameSettings, GameState, GameStatus, RenderGate, SpawnTable};
use tui_2048::types::Direction;

fn settings(rows: usize, cols: usize) -> GameSettings {
    GameSettings::new(rows, cols, SpawnTable::default()).unwrap()
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(GameSettings::default(), 12345).unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.board().empty_count(), 16);

    game.start();
    assert_eq!(game.board().empty_count(), 14);
    assert!(!game.is_game_over());
}

#[test]
fn test_full_board_without_pairs_is_terminal() {
    let board = Board::from_rows(vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ])
    .unwrap();
    let mut game = GameState::from_board(board, SpawnTable::default(), 1);
    assert!(game.is_game_over());

    for dir in Direction::ALL {
        let outcome = game.apply_move(dir);
        assert!(!outcome.changed);
        assert_eq!(outcome.spawned, None);
    }
    assert_eq!(game.status(), GameStatus::GameOver);
}

#[test]
fn test_no_change_means_no_spawn_and_no_render() {
    let board = Board::from_rows(vec![vec![4, 0, 0, 0], vec![2, 0, 0, 0]]).unwrap();
    let mut game = GameState::from_board(board, SpawnTable::default(), 8);
    let mut gate = RenderGate::new();
    assert!(gate.should_render(&game.signature()));

    let outcome = game.apply_move(Direction::Left);
    assert!(!outcome.changed);
    assert_eq!(outcome.spawned, None);
    assert_eq!(game.board().empty_count(), 6);
    assert!(!gate.should_render(&game.signature()));
}

#[test]
fn test_changing_move_spawns_exactly_one_tile() {
    let board = Board::from_rows(vec![vec![2, 2, 0, 0], vec![0, 0, 0, 0]]).unwrap();
    let mut game = GameState::from_board(board, SpawnTable::default(), 8);
    let mut gate = RenderGate::new();
    gate.should_render(&game.signature());

    let outcome = game.apply_move(Direction::Left);
    assert!(outcome.changed);
    assert_eq!(outcome.points, 4);
    assert_eq!(game.score(), 4);

    let spawned = outcome.spawned.expect("a changing move spawns");
    assert_eq!(game.board().get(spawned.row, spawned.col), Some(spawned.tile));
    assert_eq!(game.board().tile_sum(), 4 + spawned.tile);
    assert!(gate.should_render(&game.signature()));
}

#[test]
fn test_seeded_game_runs_to_completion() {
    let mut game = GameState::new(settings(3, 3), 777).unwrap();
    game.start();

    let mut total_points = 0u64;
    let mut last_score = 0u64;
    let mut turns = 0usize;

    while !game.is_game_over() {
        let dir = Direction::ALL[turns % 4];
        let sum_before = game.board().tile_sum();
        let outcome = game.apply_move(dir);

        total_points += outcome.points;
        assert!(game.score() >= last_score);
        last_score = game.score();

        let spawned = outcome.spawned.map(|s| s.tile).unwrap_or(0);
        assert_eq!(game.board().tile_sum(), sum_before + spawned);
        assert_eq!(outcome.spawned.is_some(), outcome.changed);

        turns += 1;
        assert!(turns < 100_000, "game did not terminate");
    }

    assert_eq!(game.score(), total_points);
    assert!(game.board().is_full());
    assert!(game.board().is_game_over());
}

#[test]
fn test_degenerate_settings_rejected() {
    assert!(GameState::new(
        GameSettings {
            rows: 0,
            cols: 4,
            spawn_table: SpawnTable::default(),
        },
        1
    )
    .is_err());
}
