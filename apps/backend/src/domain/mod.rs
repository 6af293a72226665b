//! Domain layer: pure bowling logic, no HTTP or persistence.

pub mod game_state;
pub mod model;
pub mod roll_validator;
pub mod rules;
pub mod scoring;

#[cfg(test)]
mod tests_game_state;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_validator;

// Re-exports for ergonomics
pub use model::{Frame, Roll};
pub use roll_validator::{validate_roll, RollVerdict};
pub use rules::BowlingRules;
pub use scoring::{calculate_score, GameScore};
