use proptest::prelude::*;

use crate::domain::game_state::{
    find_available_frame, game_complete, total_rolls, valid_game_state,
};
use crate::domain::model::Roll;
use crate::domain::roll_validator::validate_roll;
use crate::domain::rules::BowlingRules;
use crate::domain::scoring::calculate_score;
use crate::domain::test_helpers::play_lenient;

const RULES: BowlingRules = BowlingRules::STANDARD;

proptest! {
    // Feeding any candidate sequence through the state machine yields a
    // legal snapshot whose score keeps its structural invariants.
    #[test]
    fn score_invariants_hold_for_any_roll_sequence(
        pins in proptest::collection::vec(0..=10i32, 0..40)
    ) {
        let frames = play_lenient(&pins);

        prop_assert!(valid_game_state(&RULES, &frames));
        prop_assert!((0..=21).contains(&total_rolls(&frames)));

        let score = calculate_score(&RULES, &frames);
        prop_assert_eq!(score.frame_scores.len(), 10);
        prop_assert_eq!(score.total_score, score.frame_scores.iter().sum::<i32>());
        prop_assert!((0..=300).contains(&score.total_score));
        for &frame_score in &score.frame_scores {
            prop_assert!((0..=30).contains(&frame_score));
        }

        // Pure projection: recomputing changes nothing.
        prop_assert_eq!(score, calculate_score(&RULES, &frames));

        if game_complete(&RULES, &frames) {
            prop_assert!(find_available_frame(&RULES, &frames).is_none());
        }
    }

    // In frames 1-9 a second roll is legal exactly when it fits the rack.
    #[test]
    fn second_roll_legality_matches_remaining_pins(
        frame_number in 1..=9i32,
        first in 0..=9i32,
        second in 0..=10i32,
    ) {
        let existing = vec![Roll::new(1, first)];
        let verdict = validate_roll(&RULES, frame_number, &existing, 2, second);
        prop_assert_eq!(verdict.is_valid(), first + second <= RULES.max_pins);
    }

    // Recording more rolls never lowers the running total.
    #[test]
    fn running_total_is_monotonic(
        pins in proptest::collection::vec(0..=10i32, 1..25)
    ) {
        let mut previous = 0;
        for cut in 1..=pins.len() {
            let frames = play_lenient(&pins[..cut]);
            let score = calculate_score(&RULES, &frames);
            prop_assert!(score.total_score >= previous);
            previous = score.total_score;
        }
    }
}
