//! Game state - owns the board, score and RNG for one game.
//!
//! A game is a two-state machine: [`GameStatus::Playing`] until the board is full with no
//! adjacent equal tiles, then [`GameStatus::GameOver`] for good. Each
//! [`GameState::apply_move`] call runs one iteration of the game loop minus I/O:
//!
//! 1. slide/merge the board in the given direction and add the points to the score
//! 2. if anything moved, spawn one tile from the spawn table
//! 3. re-evaluate the game-over condition
//!
//! Rendering and input stay with the caller. Randomness comes from a seeded [`StdRng`],
//! so two games created with the same settings and seed play out identically.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::ConfigError;
use crate::moves::apply_move;
use crate::settings::GameSettings;
use crate::spawn::{add_random_tile, SpawnTable, SpawnedTile};
use crate::types::{Direction, INITIAL_TILES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// What happened during one call to [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    /// Points earned by merges in this move.
    pub points: u64,
    /// Whether the move itself changed the board.
    pub changed: bool,
    /// Tile placed after a changing move.
    pub spawned: Option<SpawnedTile>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    spawn_table: SpawnTable,
    score: u64,
    moves: u32,
    status: GameStatus,
    rng: StdRng,
}

impl GameState {
    /// Create an empty game. Call [`GameState::start`] to place the opening tiles.
    pub fn new(settings: GameSettings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let board = Board::new(settings.rows, settings.cols)?;
        Ok(Self::from_board(board, settings.spawn_table, seed))
    }

    /// Resume from an existing board (score starts at zero).
    pub fn from_board(board: Board, spawn_table: SpawnTable, seed: u64) -> Self {
        let status = if board.is_game_over() {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
        Self {
            board,
            spawn_table,
            score: 0,
            moves: 0,
            status,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Place the opening tiles.
    pub fn start(&mut self) {
        for _ in 0..INITIAL_TILES {
            add_random_tile(&mut self.board, &self.spawn_table, &mut self.rng);
        }
        self.update_status();
    }

    /// Run one move: collapse, score, spawn on change, check for game over.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let result = apply_move(&mut self.board, direction);
        self.score += result.points;
        self.moves += 1;

        let spawned = if result.changed {
            add_random_tile(&mut self.board, &self.spawn_table, &mut self.rng)
        } else {
            None
        };

        debug!(
            %direction,
            points = result.points,
            changed = result.changed,
            score = self.score,
            "move"
        );

        self.update_status();

        MoveOutcome {
            direction,
            points: result.points,
            changed: result.changed,
            spawned,
        }
    }

    fn update_status(&mut self) {
        if self.status == GameStatus::Playing && self.board.is_game_over() {
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                moves = self.moves,
                highest = self.board.highest_tile(),
                "game over"
            );
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves applied, including ones that changed nothing.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Change-detection signature of the current board.
    pub fn signature(&self) -> String {
        self.board.stringify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_places_opening_tiles() {
        let mut game = GameState::new(GameSettings::default(), 1).unwrap();
        assert_eq!(game.board().empty_count(), 16);

        game.start();
        assert_eq!(game.board().empty_count(), 16 - INITIAL_TILES);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameState::new(GameSettings::default(), 42).unwrap();
        let mut b = GameState::new(GameSettings::default(), 42).unwrap();
        a.start();
        b.start();

        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply_move(dir), b.apply_move(dir));
        }
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_unchanged_move_does_not_spawn() {
        let board = Board::from_rows(vec![vec![2, 0], vec![4, 0]]).unwrap();
        let mut game = GameState::from_board(board, SpawnTable::default(), 3);

        let outcome = game.apply_move(Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(outcome.spawned, None);
        assert_eq!(game.board().empty_count(), 2);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_one_by_one_board_ends_at_start() {
        let settings = GameSettings::new(1, 1, SpawnTable::default()).unwrap();
        let mut game = GameState::new(settings, 9).unwrap();
        game.start();
        assert!(game.is_game_over());
    }
}
