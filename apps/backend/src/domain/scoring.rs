//! Score calculation with strike/spare lookahead.
//!
//! A pure, read-only projection over the full roll sequence: it may be
//! recomputed from scratch on every request and carries no incremental
//! state. Bonus rolls that have not been recorded yet count as 0, so
//! mid-game scores are provisional and rise as later rolls land.

use serde::Serialize;

use crate::domain::model::Frame;
use crate::domain::rules::BowlingRules;

/// Per-frame scores (always exactly `max_frames` entries) and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameScore {
    pub frame_scores: Vec<i32>,
    pub total_score: i32,
}

/// Compute the frame-by-frame breakdown and total for a game.
///
/// Flattens all recorded rolls in frame order then roll order, then walks
/// ten virtual frames with a single cursor: a strike consumes one roll and
/// adds the next two as bonus, a spare consumes two and adds the next one,
/// an open frame consumes two. A cursor past the end of the sequence
/// scores 0 and stays put.
pub fn calculate_score(rules: &BowlingRules, frames: &[Frame]) -> GameScore {
    let pins: Vec<i32> = frames
        .iter()
        .flat_map(|frame| frame.rolls.iter().map(|roll| roll.pins))
        .collect();

    let mut frame_scores = Vec::with_capacity(rules.max_frames as usize);
    let mut cursor = 0usize;

    for _ in 0..rules.max_frames {
        if cursor >= pins.len() {
            // Frame not played yet.
            frame_scores.push(0);
            continue;
        }

        if pins[cursor] == rules.max_pins {
            // Strike: 10 plus the next two rolls.
            frame_scores.push(rules.max_pins + at(&pins, cursor + 1) + at(&pins, cursor + 2));
            cursor += 1;
        } else if cursor + 1 < pins.len()
            && pins[cursor] + pins[cursor + 1] == rules.max_pins
        {
            // Spare: 10 plus the next roll.
            frame_scores.push(rules.max_pins + at(&pins, cursor + 2));
            cursor += 2;
        } else {
            // Open frame: sum of up to two rolls.
            frame_scores.push(pins[cursor] + at(&pins, cursor + 1));
            cursor += 2;
        }
    }

    let total_score = frame_scores.iter().sum();
    GameScore {
        frame_scores,
        total_score,
    }
}

fn at(pins: &[i32], index: usize) -> i32 {
    pins.get(index).copied().unwrap_or(0)
}
