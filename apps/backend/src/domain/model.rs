//! Pure value types for a bowling game.
//!
//! These are storage-agnostic: the repos layer converts database rows into
//! them before any rule logic runs, and nothing here knows about HTTP or
//! persistence.

use serde::Serialize;

/// A single delivery of the ball within a frame.
///
/// Rolls are immutable once accepted: they are only ever appended to a
/// frame, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Roll {
    pub roll_number: i32,
    pub pins: i32,
}

impl Roll {
    pub fn new(roll_number: i32, pins: i32) -> Self {
        Self { roll_number, pins }
    }
}

/// One of the ten ordered scoring units of a game.
///
/// Rolls are ordered by `roll_number` starting at 1 with no gaps. Regular
/// frames hold at most 2 rolls, the tenth at most 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub number: i32,
    pub rolls: Vec<Roll>,
}

impl Frame {
    /// An empty frame with the given number.
    pub fn empty(number: i32) -> Self {
        Self {
            number,
            rolls: Vec::new(),
        }
    }

    /// Test fixture: a frame with rolls numbered 1.. from raw pin counts.
    #[cfg(test)]
    pub fn with_rolls(number: i32, pins: &[i32]) -> Self {
        Self {
            number,
            rolls: pins
                .iter()
                .enumerate()
                .map(|(i, &p)| Roll::new(i as i32 + 1, p))
                .collect(),
        }
    }

    pub fn first_roll_pins(&self) -> Option<i32> {
        self.rolls.first().map(|r| r.pins)
    }
}
