use crate::domain::model::Roll;
use crate::domain::roll_validator::validate_roll;
use crate::domain::rules::BowlingRules;

const RULES: BowlingRules = BowlingRules::STANDARD;

fn rolls(pins: &[i32]) -> Vec<Roll> {
    pins.iter()
        .enumerate()
        .map(|(i, &p)| Roll::new(i as i32 + 1, p))
        .collect()
}

#[test]
fn first_roll_in_regular_frame_is_legal() {
    for pins in 0..=10 {
        let verdict = validate_roll(&RULES, 1, &[], 1, pins);
        assert!(verdict.is_valid(), "roll of {pins} should be legal");
    }
}

#[test]
fn pins_out_of_range_are_rejected() {
    for pins in [-1, 11, 42] {
        let verdict = validate_roll(&RULES, 1, &[], 1, pins);
        assert!(!verdict.is_valid());
        assert!(verdict
            .violations()
            .contains(&"Pins must be between 0 and 10".to_string()));
    }
}

#[test]
fn roll_number_bound_depends_on_frame() {
    let verdict = validate_roll(&RULES, 3, &rolls(&[2, 3]), 4, 5);
    assert!(verdict
        .violations()
        .contains(&"Roll number must be between 1 and 2".to_string()));

    let verdict = validate_roll(&RULES, 10, &rolls(&[10, 10, 10]), 4, 5);
    assert!(verdict
        .violations()
        .contains(&"Roll number must be between 1 and 3".to_string()));
}

#[test]
fn all_violations_are_reported_in_order() {
    // Out-of-range pins AND an illegal third roll in a regular frame.
    let verdict = validate_roll(&RULES, 2, &rolls(&[4, 5]), 3, 11);
    assert_eq!(
        verdict.violations(),
        [
            "Pins must be between 0 and 10".to_string(),
            "Roll number must be between 1 and 2".to_string(),
            "Third roll not allowed in regular frames".to_string(),
        ]
    );
}

#[test]
fn second_roll_cannot_exceed_remaining_pins() {
    let existing = rolls(&[8]);

    let verdict = validate_roll(&RULES, 1, &existing, 2, 3);
    assert!(!verdict.is_valid());
    assert_eq!(
        verdict.violations(),
        ["Second roll cannot exceed 2 pins".to_string()]
    );

    let verdict = validate_roll(&RULES, 1, &existing, 2, 2);
    assert!(verdict.is_valid());
}

#[test]
fn no_second_roll_after_strike_in_regular_frame() {
    let verdict = validate_roll(&RULES, 4, &rolls(&[10]), 2, 0);
    assert!(!verdict.is_valid());
    assert_eq!(
        verdict.violations(),
        ["Second roll not allowed after strike in regular frames".to_string()]
    );
}

#[test]
fn no_third_roll_in_regular_frames() {
    let verdict = validate_roll(&RULES, 9, &rolls(&[4, 5]), 3, 1);
    assert!(!verdict.is_valid());
    assert!(verdict
        .violations()
        .contains(&"Third roll not allowed in regular frames".to_string()));
}

#[test]
fn tenth_frame_second_roll_is_unconstrained() {
    // Documented permissive behavior: the tenth frame does not cap
    // roll1 + roll2 at 10 when roll 1 was not a strike.
    let verdict = validate_roll(&RULES, 10, &rolls(&[5]), 2, 8);
    assert!(verdict.is_valid());

    // And after a strike the second roll is a fresh rack anyway.
    let verdict = validate_roll(&RULES, 10, &rolls(&[10]), 2, 10);
    assert!(verdict.is_valid());
}

#[test]
fn tenth_frame_third_roll_requires_strike_or_spare() {
    // Strike on roll 1 earns the bonus roll.
    let verdict = validate_roll(&RULES, 10, &rolls(&[10, 4]), 3, 5);
    assert!(verdict.is_valid());

    // So does a spare.
    let verdict = validate_roll(&RULES, 10, &rolls(&[6, 4]), 3, 5);
    assert!(verdict.is_valid());

    // An open tenth frame does not.
    let verdict = validate_roll(&RULES, 10, &rolls(&[7, 2]), 3, 5);
    assert!(!verdict.is_valid());
    assert_eq!(
        verdict.violations(),
        ["Third roll not allowed in open frame".to_string()]
    );
}

#[test]
fn tenth_frame_third_roll_needs_two_previous_rolls() {
    let verdict = validate_roll(&RULES, 10, &rolls(&[10]), 3, 5);
    assert!(!verdict.is_valid());
    assert_eq!(
        verdict.violations(),
        ["Third roll requires two previous rolls".to_string()]
    );
}
