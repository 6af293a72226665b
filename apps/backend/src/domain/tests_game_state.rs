use crate::domain::game_state::{
    find_available_frame, frame_complete, game_complete, next_roll_number, total_rolls,
    valid_game_state,
};
use crate::domain::model::Frame;
use crate::domain::rules::BowlingRules;
use crate::domain::test_helpers::{fresh_frames, play};

const RULES: BowlingRules = BowlingRules::STANDARD;

#[test]
fn regular_frame_completion() {
    assert!(!frame_complete(&RULES, &Frame::empty(1)));
    assert!(!frame_complete(&RULES, &Frame::with_rolls(1, &[3])));
    assert!(frame_complete(&RULES, &Frame::with_rolls(1, &[3, 5])));
    // A strike ends the frame after one roll.
    assert!(frame_complete(&RULES, &Frame::with_rolls(1, &[10])));
}

#[test]
fn tenth_frame_completion() {
    assert!(!frame_complete(&RULES, &Frame::empty(10)));

    // Strike or spare earns a third roll.
    assert!(!frame_complete(&RULES, &Frame::with_rolls(10, &[10])));
    assert!(!frame_complete(&RULES, &Frame::with_rolls(10, &[10, 10])));
    assert!(frame_complete(&RULES, &Frame::with_rolls(10, &[10, 10, 10])));
    assert!(!frame_complete(&RULES, &Frame::with_rolls(10, &[5, 5])));
    assert!(frame_complete(&RULES, &Frame::with_rolls(10, &[5, 5, 5])));

    // An open tenth frame ends after two rolls.
    assert!(frame_complete(&RULES, &Frame::with_rolls(10, &[3, 4])));
}

#[test]
fn fresh_game_opens_at_frame_one() {
    let frames = fresh_frames();
    let available = find_available_frame(&RULES, &frames).expect("fresh game has an open frame");
    assert_eq!(available.number, 1);
    assert_eq!(next_roll_number(available), 1);
}

#[test]
fn strike_advances_to_next_frame() {
    let frames = play(&[10]);
    let available = find_available_frame(&RULES, &frames).expect("frame 2 should be open");
    assert_eq!(available.number, 2);
}

#[test]
fn partial_frame_reports_second_roll_next() {
    let frames = play(&[4]);
    let available = find_available_frame(&RULES, &frames).expect("frame 1 still open");
    assert_eq!(available.number, 1);
    assert_eq!(next_roll_number(available), 2);
}

#[test]
fn finished_game_has_no_available_frame() {
    let frames = play(&[10; 12]);
    assert!(find_available_frame(&RULES, &frames).is_none());
    assert!(game_complete(&RULES, &frames));
}

#[test]
fn open_tenth_frame_finishes_after_two_rolls() {
    let mut pins = vec![0; 18];
    pins.extend([7, 2]);
    let frames = play(&pins);
    assert!(find_available_frame(&RULES, &frames).is_none());
    assert!(game_complete(&RULES, &frames));
}

#[test]
fn in_progress_game_is_not_complete() {
    assert!(!game_complete(&RULES, &fresh_frames()));
    assert!(!game_complete(&RULES, &play(&[10, 3])));
}

#[test]
fn game_state_validity() {
    assert!(valid_game_state(&RULES, &fresh_frames()));

    // Wrong frame count
    let nine: Vec<Frame> = (1..=9).map(Frame::empty).collect();
    assert!(!valid_game_state(&RULES, &nine));

    // Frame numbered beyond the last frame
    let mut frames = fresh_frames();
    frames[9].number = 11;
    assert!(!valid_game_state(&RULES, &frames));
    // An invalid game is never complete, regardless of its rolls.
    assert!(!game_complete(&RULES, &frames));
}

#[test]
fn total_rolls_counts_across_frames() {
    assert_eq!(total_rolls(&fresh_frames()), 0);
    assert_eq!(total_rolls(&play(&[10, 3, 4])), 3);
    // Perfect game compresses to 12 recorded rolls.
    assert_eq!(total_rolls(&play(&[10; 12])), 12);
    // Gutter game records the full 20.
    assert_eq!(total_rolls(&play(&[0; 20])), 20);
    // All spares records 21.
    assert_eq!(total_rolls(&play(&[5; 21])), 21);
}
