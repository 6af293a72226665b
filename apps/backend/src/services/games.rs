//! Game lifecycle service - creation and read-side projections.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use tracing::info;

use crate::domain::game_state::{frame_complete, game_complete, total_rolls, valid_game_state};
use crate::domain::model::Roll;
use crate::domain::rules::BowlingRules;
use crate::domain::scoring::{calculate_score, GameScore};
use crate::errors::domain::DomainError;
use crate::repos::frames::{self, to_frames};
use crate::repos::games;

/// Result of creating a game: the id plus its pre-allocated frame count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedGame {
    pub game_id: i64,
}

/// Per-frame projection for the game info view. Rolls keep their
/// roll_number so clients can tell a 7-then-2 frame from a 2-then-7.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameInfo {
    pub number: i32,
    pub rolls: Vec<Roll>,
    pub is_complete: bool,
}

/// Read-side snapshot of a game's progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameInfo {
    pub game_id: i64,
    pub total_frames: i32,
    pub total_rolls: i32,
    pub is_complete: bool,
    pub frames: Vec<FrameInfo>,
}

/// Game lifecycle service.
pub struct GameService {
    rules: BowlingRules,
}

impl GameService {
    pub fn new() -> Self {
        Self {
            rules: BowlingRules::STANDARD,
        }
    }

    /// Create a game with its full set of empty frames.
    ///
    /// Frames are pre-allocated up front so every later read sees a
    /// structurally valid game.
    pub async fn create_game(&self, txn: &DatabaseTransaction) -> Result<CreatedGame, DomainError> {
        let game = games::create_game(txn).await?;
        frames::create_frames(txn, game.id, &self.rules).await?;

        info!(game_id = game.id, "created game");
        Ok(CreatedGame { game_id: game.id })
    }

    /// Load a game's current progress.
    pub async fn game_info<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<GameInfo, DomainError> {
        let game = games::require_game(conn, game_id).await?;
        let rows = frames::frames_with_rolls(conn, game.id).await?;
        let snapshot = to_frames(&rows);

        if !valid_game_state(&self.rules, &snapshot) {
            return Err(DomainError::invalid_state("Game is in an invalid state"));
        }

        let frames = snapshot
            .iter()
            .map(|frame| FrameInfo {
                number: frame.number,
                rolls: frame.rolls.clone(),
                is_complete: frame_complete(&self.rules, frame),
            })
            .collect();

        Ok(GameInfo {
            game_id: game.id,
            total_frames: self.rules.max_frames,
            total_rolls: total_rolls(&snapshot),
            is_complete: game_complete(&self.rules, &snapshot),
            frames,
        })
    }

    /// Score a game as it stands.
    ///
    /// Works on in-progress games too: frames whose bonus rolls have not
    /// happened yet score with the rolls known so far.
    pub async fn score<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<GameScore, DomainError> {
        let game = games::require_game(conn, game_id).await?;
        let rows = frames::frames_with_rolls(conn, game.id).await?;
        let snapshot = to_frames(&rows);

        if !valid_game_state(&self.rules, &snapshot) {
            return Err(DomainError::invalid_state("Game is in an invalid state"));
        }

        Ok(calculate_score(&self.rules, &snapshot))
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
