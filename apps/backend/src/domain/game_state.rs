//! Frame/game state machine.
//!
//! Derives, from a game's frames and their rolls, which frame can accept
//! a roll, the next roll number, and whether the game is complete. All
//! functions are pure reads over an ordered `&[Frame]` snapshot (sorted by
//! frame number, rolls sorted by roll number).

use crate::domain::model::Frame;
use crate::domain::rules::BowlingRules;

/// True iff the frame set is structurally sound: exactly `max_frames`
/// frames, none numbered beyond the last frame.
///
/// Queries against a game that fails this must be rejected as an
/// invalid-state error, never silently scored.
pub fn valid_game_state(rules: &BowlingRules, frames: &[Frame]) -> bool {
    frames.len() as i32 == rules.max_frames && frames.iter().all(|f| f.number <= rules.max_frames)
}

/// Whether a frame can no longer accept rolls.
///
/// Regular frame: a strike on the first roll, or two recorded rolls.
/// Tenth frame: a strike or spare earns a third roll, so completion needs
/// three rolls; an open tenth frame completes after two. An empty frame is
/// never complete.
pub fn frame_complete(rules: &BowlingRules, frame: &Frame) -> bool {
    if rules.is_tenth(frame.number) {
        tenth_frame_complete(rules, frame)
    } else {
        regular_frame_complete(rules, frame)
    }
}

fn regular_frame_complete(rules: &BowlingRules, frame: &Frame) -> bool {
    match frame.first_roll_pins() {
        None => false,
        Some(first) => {
            first == rules.max_pins
                || frame.rolls.len() as i32 >= rules.rolls_per_regular_frame
        }
    }
}

fn tenth_frame_complete(rules: &BowlingRules, frame: &Frame) -> bool {
    if frame.rolls.is_empty() {
        return false;
    }
    let first = frame.rolls[0].pins;
    let second = frame.rolls.get(1).map_or(0, |r| r.pins);

    if first == rules.max_pins || first + second == rules.max_pins {
        frame.rolls.len() as i32 >= rules.rolls_tenth_frame
    } else {
        frame.rolls.len() as i32 >= rules.rolls_per_regular_frame
    }
}

/// The first frame, in number order, that can still accept a roll.
/// `None` means the game is finished and no further rolls are accepted.
pub fn find_available_frame<'a>(rules: &BowlingRules, frames: &'a [Frame]) -> Option<&'a Frame> {
    frames.iter().find(|frame| !frame_complete(rules, frame))
}

/// Roll number the next delivery in this frame would get.
pub fn next_roll_number(frame: &Frame) -> i32 {
    frame.rolls.len() as i32 + 1
}

/// True iff the game is structurally valid and every frame is complete.
pub fn game_complete(rules: &BowlingRules, frames: &[Frame]) -> bool {
    valid_game_state(rules, frames) && frames.iter().all(|frame| frame_complete(rules, frame))
}

/// Total recorded rolls across all frames.
pub fn total_rolls(frames: &[Frame]) -> i32 {
    frames.iter().map(|frame| frame.rolls.len() as i32).sum()
}
