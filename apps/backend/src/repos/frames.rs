//! Frame repository functions for the domain layer.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::{frames_sea, rolls_sea};
use crate::domain::model::{Frame, Roll};
use crate::domain::rules::BowlingRules;
use crate::errors::domain::DomainError;

/// A frame as stored, paired with its pure domain view.
///
/// The `frame` field is what the rule logic consumes; `id` is what the
/// rolls table needs for appends.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRow {
    pub id: i64,
    pub game_id: i64,
    pub frame: Frame,
}

impl FrameRow {
    pub fn number(&self) -> i32 {
        self.frame.number
    }
}

/// Pre-allocate the full set of empty frames for a new game.
pub async fn create_frames(
    txn: &DatabaseTransaction,
    game_id: i64,
    rules: &BowlingRules,
) -> Result<Vec<FrameRow>, DomainError> {
    let mut rows = Vec::with_capacity(rules.max_frames as usize);
    for number in 1..=rules.max_frames {
        let model = frames_sea::create_frame(txn, game_id, number).await?;
        rows.push(FrameRow {
            id: model.id,
            game_id: model.game_id,
            frame: Frame::empty(model.number),
        });
    }
    Ok(rows)
}

/// Load a game's frames with their rolls, frames ordered by number and
/// rolls ordered by roll number. This is the snapshot every state/score
/// query operates on.
pub async fn frames_with_rolls<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<FrameRow>, DomainError> {
    let frame_models = frames_sea::by_game_ordered(conn, game_id).await?;
    let frame_ids: Vec<i64> = frame_models.iter().map(|f| f.id).collect();
    let roll_models = rolls_sea::by_frame_ids_ordered(conn, frame_ids).await?;

    let mut rolls_by_frame: HashMap<i64, Vec<Roll>> = HashMap::new();
    for roll in roll_models {
        rolls_by_frame
            .entry(roll.frame_id)
            .or_default()
            .push(Roll::new(roll.roll_number, roll.pins));
    }

    Ok(frame_models
        .into_iter()
        .map(|model| {
            let rolls = rolls_by_frame.remove(&model.id).unwrap_or_default();
            FrameRow {
                id: model.id,
                game_id: model.game_id,
                frame: Frame {
                    number: model.number,
                    rolls,
                },
            }
        })
        .collect())
}

/// Project repo rows into the pure domain snapshot.
pub fn to_frames(rows: &[FrameRow]) -> Vec<Frame> {
    rows.iter().map(|row| row.frame.clone()).collect()
}
