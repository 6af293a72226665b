//! Roll legality checks.
//!
//! Pure decision logic: given a frame's recorded rolls and a candidate
//! roll, report every applicable violation (not just the first). The
//! caller decides whether to persist the roll.

use crate::domain::model::Roll;
use crate::domain::rules::BowlingRules;

/// Outcome of validating a candidate roll.
///
/// Legal iff the violation list is empty. Violation messages are ordered
/// and user-facing; callers surface them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollVerdict {
    violations: Vec<String>,
}

impl RollVerdict {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }
}

/// Validate a candidate roll against a frame's existing rolls.
///
/// `existing_rolls` must be ordered by roll number. All three checks run
/// independently; each failing check contributes its own message.
pub fn validate_roll(
    rules: &BowlingRules,
    frame_number: i32,
    existing_rolls: &[Roll],
    roll_number: i32,
    pins: i32,
) -> RollVerdict {
    let mut violations = Vec::new();

    if pins < rules.min_pins || pins > rules.max_pins {
        violations.push(format!(
            "Pins must be between {} and {}",
            rules.min_pins, rules.max_pins
        ));
    }

    let max_roll = rules.max_rolls_for_frame(frame_number);
    if roll_number < 1 || roll_number > max_roll {
        violations.push(format!("Roll number must be between 1 and {max_roll}"));
    }

    if let Some(message) =
        frame_rule_violation(rules, frame_number, existing_rolls, roll_number, pins)
    {
        violations.push(message);
    }

    RollVerdict { violations }
}

fn frame_rule_violation(
    rules: &BowlingRules,
    frame_number: i32,
    existing_rolls: &[Roll],
    roll_number: i32,
    pins: i32,
) -> Option<String> {
    if rules.is_tenth(frame_number) {
        tenth_frame_violation(rules, existing_rolls, roll_number)
    } else {
        regular_frame_violation(rules, existing_rolls, roll_number, pins)
    }
}

fn regular_frame_violation(
    rules: &BowlingRules,
    existing_rolls: &[Roll],
    roll_number: i32,
    pins: i32,
) -> Option<String> {
    match roll_number {
        1 => None,
        2 => match existing_rolls.first() {
            Some(first) if first.pins == rules.max_pins => {
                Some("Second roll not allowed after strike in regular frames".to_string())
            }
            Some(first) if first.pins + pins > rules.max_pins => Some(format!(
                "Second roll cannot exceed {} pins",
                rules.max_pins - first.pins
            )),
            Some(_) => None,
            // Unreachable through the state machine (roll 2 implies a
            // recorded roll 1) but reported rather than panicking.
            None => Some(format!("Second roll cannot exceed {} pins", rules.max_pins)),
        },
        3 => Some("Third roll not allowed in regular frames".to_string()),
        _ => Some("Invalid roll number".to_string()),
    }
}

fn tenth_frame_violation(
    rules: &BowlingRules,
    existing_rolls: &[Roll],
    roll_number: i32,
) -> Option<String> {
    match roll_number {
        // First and second rolls are always allowed in the tenth frame.
        // Deliberately no combined-pins cap for an open tenth frame.
        1 | 2 => None,
        3 => {
            if existing_rolls.len() < 2 {
                return Some("Third roll requires two previous rolls".to_string());
            }
            let first = existing_rolls[0].pins;
            let second = existing_rolls[1].pins;
            let strike = first == rules.max_pins;
            let spare = first + second == rules.max_pins;
            if strike || spare {
                None
            } else {
                Some("Third roll not allowed in open frame".to_string())
            }
        }
        _ => Some("Invalid roll number for 10th frame".to_string()),
    }
}
