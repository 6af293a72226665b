use crate::domain::rules::BowlingRules;
use crate::domain::scoring::calculate_score;
use crate::domain::test_helpers::{fresh_frames, play};

const RULES: BowlingRules = BowlingRules::STANDARD;

#[test]
fn unplayed_game_scores_zero() {
    let frames = fresh_frames();
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores, vec![0; 10]);
    assert_eq!(score.total_score, 0);
}

#[test]
fn perfect_game_scores_300() {
    let frames = play(&[10; 12]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores, vec![30; 10]);
    assert_eq!(score.total_score, 300);
}

#[test]
fn gutter_game_scores_zero() {
    let frames = play(&[0; 20]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores, vec![0; 10]);
    assert_eq!(score.total_score, 0);
}

#[test]
fn all_spares_scores_150() {
    // 9 frames of (5,5) plus (5,5,5) in the tenth.
    let frames = play(&[5; 21]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores, vec![15; 10]);
    assert_eq!(score.total_score, 150);
}

#[test]
fn strike_counts_next_two_rolls_as_bonus() {
    let frames = play(&[10, 3, 4]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores[0], 17);
    assert_eq!(score.frame_scores[1], 7);
    assert_eq!(score.total_score, 24);
}

#[test]
fn spare_counts_next_roll_as_bonus() {
    let frames = play(&[7, 3, 4]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores[0], 14);
    assert_eq!(score.frame_scores[1], 4);
    assert_eq!(score.total_score, 18);
}

#[test]
fn open_frame_scores_its_own_pins() {
    let frames = play(&[3, 5]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores[0], 8);
    assert_eq!(score.total_score, 8);
}

#[test]
fn pending_strike_bonus_counts_as_zero_mid_game() {
    // Scores are provisional: a lone strike is worth 10 until its bonus
    // rolls are recorded.
    let frames = play(&[10]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores[0], 10);
    assert_eq!(score.total_score, 10);

    let frames = play(&[10, 4]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores[0], 14);
}

#[test]
fn tenth_frame_strike_with_bonus_rolls() {
    let mut pins = vec![0; 18];
    pins.extend([10, 7, 3]);
    let frames = play(&pins);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores[9], 20);
    assert_eq!(score.total_score, 20);
}

#[test]
fn tenth_frame_spare_with_bonus_roll() {
    let mut pins = vec![0; 18];
    pins.extend([7, 3, 5]);
    let frames = play(&pins);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores[9], 15);
    assert_eq!(score.total_score, 15);
}

#[test]
fn tenth_frame_open_scores_two_rolls() {
    let mut pins = vec![0; 18];
    pins.extend([7, 2]);
    let frames = play(&pins);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores[9], 9);
    assert_eq!(score.total_score, 9);
}

#[test]
fn consecutive_strikes_chain_bonuses() {
    // Frames so far: [10], [10], [10], [4, 2] -> 30, 24, 16, 6.
    let frames = play(&[10, 10, 10, 4, 2]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(&score.frame_scores[..4], &[30, 24, 16, 6]);
    assert_eq!(score.total_score, 76);
}

#[test]
fn total_is_sum_of_frame_scores() {
    // Classic worked example that exercises strikes, spares and opens.
    let frames = play(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]);
    let score = calculate_score(&RULES, &frames);
    assert_eq!(score.frame_scores.len(), 10);
    assert_eq!(score.total_score, score.frame_scores.iter().sum::<i32>());
    assert_eq!(score.total_score, 167);
}

#[test]
fn recomputation_is_idempotent() {
    let frames = play(&[10, 7, 3, 4]);
    let first = calculate_score(&RULES, &frames);
    let second = calculate_score(&RULES, &frames);
    assert_eq!(first, second);
}
