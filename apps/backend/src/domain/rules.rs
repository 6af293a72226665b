//! Fixed rule constants for ten-pin bowling.
//!
//! All three domain components (validator, state machine, score calculator)
//! read their limits from one [`BowlingRules`] value instead of scattered
//! literals.

/// Immutable rule configuration for a bowling game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BowlingRules {
    pub min_pins: i32,
    pub max_pins: i32,
    pub max_frames: i32,
    pub rolls_per_regular_frame: i32,
    pub rolls_tenth_frame: i32,
}

impl BowlingRules {
    /// Standard ten-pin rules: 10 pins, 10 frames, 2 rolls per frame,
    /// 3 rolls in the tenth.
    pub const STANDARD: Self = Self {
        min_pins: 0,
        max_pins: 10,
        max_frames: 10,
        rolls_per_regular_frame: 2,
        rolls_tenth_frame: 3,
    };

    /// Whether `frame_number` is the bonus-roll frame.
    pub fn is_tenth(&self, frame_number: i32) -> bool {
        frame_number == self.max_frames
    }

    /// Maximum roll number that can ever be recorded in a frame.
    pub fn max_rolls_for_frame(&self, frame_number: i32) -> i32 {
        if self.is_tenth(frame_number) {
            self.rolls_tenth_frame
        } else {
            self.rolls_per_regular_frame
        }
    }
}

impl Default for BowlingRules {
    fn default() -> Self {
        Self::STANDARD
    }
}
