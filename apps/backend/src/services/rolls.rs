//! Roll submission orchestration - bridges the pure rule logic with
//! persistence.
//!
//! The whole submit path runs inside one transaction: load the snapshot,
//! run the state machine and validator against it, append the roll. The
//! unique (frame_id, roll_number) index turns a lost race into a conflict
//! instead of a duplicate slot.

use sea_orm::DatabaseTransaction;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::game_state::{find_available_frame, next_roll_number, valid_game_state};
use crate::domain::roll_validator::validate_roll;
use crate::domain::rules::BowlingRules;
use crate::errors::domain::DomainError;
use crate::repos::frames::{self, to_frames};
use crate::repos::{games, rolls};

/// Outcome of an accepted roll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollOutcome {
    /// Frame number the roll landed in.
    pub frame: i32,
    /// Roll number within that frame.
    pub roll: i32,
    pub pins: i32,
    pub message: String,
}

/// Roll submission service.
pub struct RollService {
    rules: BowlingRules,
}

impl RollService {
    pub fn new() -> Self {
        Self {
            rules: BowlingRules::STANDARD,
        }
    }

    /// Submit one roll for a game.
    ///
    /// Fails with `InvalidState` when the frame set is malformed,
    /// `GameComplete` when no frame can accept a roll, and
    /// `RuleViolation` (all reasons, in check order) when the roll is
    /// illegal for the target frame.
    pub async fn submit_roll(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        pins: i32,
    ) -> Result<RollOutcome, DomainError> {
        let game = games::require_game(txn, game_id).await?;
        let rows = frames::frames_with_rolls(txn, game.id).await?;
        let snapshot = to_frames(&rows);

        if !valid_game_state(&self.rules, &snapshot) {
            return Err(DomainError::invalid_state("Game is in an invalid state"));
        }

        let frame = find_available_frame(&self.rules, &snapshot)
            .ok_or(DomainError::GameComplete)?;
        let roll_number = next_roll_number(frame);

        debug!(
            game_id,
            frame = frame.number,
            roll_number,
            pins,
            "validating roll"
        );

        let verdict = validate_roll(&self.rules, frame.number, &frame.rolls, roll_number, pins);
        if !verdict.is_valid() {
            return Err(DomainError::rule_violation(verdict.into_violations()));
        }

        let row = rows
            .iter()
            .find(|r| r.number() == frame.number)
            .ok_or_else(|| DomainError::invalid_state("Game is in an invalid state"))?;
        rolls::create_roll(txn, row.id, roll_number, pins).await?;

        let strike = pins == self.rules.max_pins && roll_number == 1;
        let message = if strike {
            "Strike! Frame complete."
        } else {
            "Roll recorded successfully"
        };

        info!(
            game_id,
            frame = frame.number,
            roll_number,
            pins,
            strike,
            "roll recorded"
        );

        Ok(RollOutcome {
            frame: frame.number,
            roll: roll_number,
            pins,
            message: message.to_string(),
        })
    }
}

impl Default for RollService {
    fn default() -> Self {
        Self::new()
    }
}
