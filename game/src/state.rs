use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::Board;
use crate::piece::{ActivePiece, Vec2i};

pub const BASE_DROP_INTERVAL_SECS: f64 = 0.5;
pub const LEVEL_SPEEDUP_SECS: f64 = 0.03;
pub const MIN_DROP_INTERVAL_SECS: f64 = 0.1;
pub const POINTS_PER_LINE: u32 = 100;
pub const POINTS_PER_LEVEL: u32 = 500;

pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Gravity period for `level`: 0.5s, 0.03s faster per level, never below 0.1s.
pub fn drop_interval_for_level(level: u32) -> Duration {
    let secs = BASE_DROP_INTERVAL_SECS - f64::from(level) * LEVEL_SPEEDUP_SECS;
    Duration::from_secs_f64(secs.max(MIN_DROP_INTERVAL_SECS))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What a call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not time to drop yet (or the game is already over).
    Idle,
    /// The piece moved down one row.
    Fell,
    /// The piece locked and a fresh one spawned.
    Locked { cleared: usize },
    /// The piece locked and its replacement had no room: the game is over.
    ToppedOut { cleared: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    piece: ActivePiece,
    score: u32,
    level: u32,
    #[serde(with = "crate::serde_duration")]
    last_drop: Duration,
    status: GameStatus,
    lines_cleared: u32,
    pieces_locked: u32,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, now: Duration) -> Self {
        Self::with_board(Board::new(), rng, now)
    }

    /// Starts a game on a pre-filled board. If the first piece has no room the game
    /// starts (and stays) over.
    pub fn with_board<R: Rng + ?Sized>(board: Board, rng: &mut R, now: Duration) -> Self {
        let piece = ActivePiece::spawn(rng);
        let status = if board.collides(&piece.shape, piece.origin) {
            GameStatus::GameOver
        } else {
            GameStatus::Running
        };
        Self {
            board,
            piece,
            score: 0,
            level: level_for_score(0),
            last_drop: now,
            status,
            lines_cleared: 0,
            pieces_locked: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &ActivePiece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn last_drop(&self) -> Duration {
        self.last_drop
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn drop_interval(&self) -> Duration {
        drop_interval_for_level(self.level)
    }

    /// Replaces the active piece, bypassing the collision check.
    pub fn set_piece_for_test(&mut self, piece: ActivePiece) {
        self.piece = piece;
    }

    /// Advances gravity. Once more than one drop interval has passed since the last drop
    /// the piece falls a row, or locks if it can't.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }
        if now.saturating_sub(self.last_drop) <= self.drop_interval() {
            return TickOutcome::Idle;
        }

        let outcome = if self.try_shift(Vec2i::new(0, 1)) {
            TickOutcome::Fell
        } else {
            self.lock_and_spawn(rng)
        };
        self.last_drop = now;
        outcome
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(Vec2i::new(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(Vec2i::new(1, 0))
    }

    /// Rotates in place. No kicks: if the turned shape doesn't fit at the same origin the
    /// piece is left as it was.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let rotated = self.piece.shape.rotated();
        if self.board.collides(&rotated, self.piece.origin) {
            return false;
        }
        self.piece.shape = rotated;
        true
    }

    fn try_shift(&mut self, delta: Vec2i) -> bool {
        if self.is_game_over() {
            return false;
        }
        let target = self.piece.origin + delta;
        if self.board.collides(&self.piece.shape, target) {
            return false;
        }
        self.piece.origin = target;
        true
    }

    fn lock_and_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        self.board
            .lock(&self.piece.shape, self.piece.origin, self.piece.color);
        self.pieces_locked += 1;

        let cleared = self.board.clear_full_rows();
        self.award_lines(cleared);

        self.piece = ActivePiece::spawn(rng);
        if self.board.collides(&self.piece.shape, self.piece.origin) {
            self.status = GameStatus::GameOver;
            return TickOutcome::ToppedOut { cleared };
        }
        TickOutcome::Locked { cleared }
    }

    fn award_lines(&mut self, cleared: usize) {
        let cleared = u32::try_from(cleared).unwrap_or(u32::MAX);
        self.lines_cleared = self.lines_cleared.saturating_add(cleared);
        self.score = self
            .score
            .saturating_add(cleared.saturating_mul(POINTS_PER_LINE));
        self.level = level_for_score(self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_interval_shrinks_then_floors() {
        assert!((drop_interval_for_level(1).as_secs_f64() - 0.47).abs() < 1e-6);
        assert!(drop_interval_for_level(5) < drop_interval_for_level(4));
        assert_eq!(drop_interval_for_level(14), Duration::from_secs_f64(0.1));
        assert_eq!(drop_interval_for_level(100), Duration::from_secs_f64(0.1));
    }

    #[test]
    fn level_tracks_score_thresholds() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(499), 1);
        assert_eq!(level_for_score(500), 2);
        assert_eq!(level_for_score(1299), 3);
    }
}
