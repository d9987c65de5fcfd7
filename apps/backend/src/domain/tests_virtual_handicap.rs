//! Virtual Handicap of single rounds.

use std::collections::BTreeMap;

use crate::domain::course::CourseLength;
use crate::domain::fixtures::{finished_round, net_par_scores, owner, par_72_course, PARS};
use crate::domain::round::{GameMode, HandicapPercentage, RoundPlayer, Score};
use crate::domain::virtual_handicap::{
    effective_playing_handicap, normalized_points, virtual_handicap,
    virtual_handicap_from_points,
};

#[test]
fn index_14_2_with_40_points_is_10_2() {
    assert_eq!(virtual_handicap_from_points(14.2, 40), 10.2);
}

#[test]
fn net_par_round_keeps_the_index() {
    let course = par_72_course();
    let round = finished_round(
        "2025-06-01",
        CourseLength::Full,
        GameMode::Stableford,
        vec![owner(Some(18.0), 18, net_par_scores(1..=18))],
    );
    assert_eq!(virtual_handicap(&round, &course), Some(18.0));
}

#[test]
fn nine_holes_double_their_points() {
    let course = par_72_course();
    let front = finished_round(
        "2025-06-01",
        CourseLength::Front9,
        GameMode::Stableford,
        vec![owner(Some(18.0), 18, net_par_scores(1..=9))],
    );
    // 18 points doubled to 36
    assert_eq!(virtual_handicap(&front, &course), Some(18.0));
    assert_eq!(normalized_points(20, CourseLength::Back9), 40);
    assert_eq!(normalized_points(20, CourseLength::Full), 20);
}

#[test]
fn front_nine_only_counts_front_holes() {
    let course = par_72_course();
    let round = finished_round(
        "2025-06-01",
        CourseLength::Front9,
        GameMode::Stableford,
        // back-nine scores are ignored for a front9 round
        vec![owner(Some(18.0), 18, net_par_scores(1..=18))],
    );
    assert_eq!(virtual_handicap(&round, &course), Some(18.0));
}

#[test]
fn not_computable_cases() {
    let course = par_72_course();
    let no_players = finished_round("2025-06-01", CourseLength::Full, GameMode::Stroke, vec![]);
    assert_eq!(virtual_handicap(&no_players, &course), None);

    let no_index = finished_round(
        "2025-06-01",
        CourseLength::Full,
        GameMode::Stroke,
        vec![owner(None, 18, net_par_scores(1..=18))],
    );
    assert_eq!(virtual_handicap(&no_index, &course), None);

    let no_scores = finished_round(
        "2025-06-01",
        CourseLength::Full,
        GameMode::Stroke,
        vec![owner(Some(10.0), 10, BTreeMap::new())],
    );
    assert_eq!(virtual_handicap(&no_scores, &course), None);

    let back_scores_on_front = finished_round(
        "2025-06-01",
        CourseLength::Front9,
        GameMode::Stroke,
        vec![owner(Some(10.0), 10, net_par_scores(10..=18))],
    );
    assert_eq!(virtual_handicap(&back_scores_on_front, &course), None);
}

#[test]
fn legacy_zero_playing_handicap_is_recomputed() {
    let course = par_72_course();
    // stored 0 but index 18 on slope 113 -> plays off 18
    let legacy = owner(Some(18.0), 0, net_par_scores(1..=18));
    let round = finished_round(
        "2025-06-01",
        CourseLength::Full,
        GameMode::Stableford,
        vec![legacy.clone()],
    );
    assert_eq!(effective_playing_handicap(&legacy, &round, &course), 18);
    assert_eq!(virtual_handicap(&round, &course), Some(18.0));
}

#[test]
fn legacy_compensation_uses_round_percentage() {
    let course = par_72_course();
    let legacy = owner(Some(20.0), 0, BTreeMap::new());
    let mut round = finished_round(
        "2025-06-01",
        CourseLength::Full,
        GameMode::Stableford,
        vec![legacy.clone()],
    );
    round.handicap_percentage = HandicapPercentage::ThreeQuarters;
    assert_eq!(effective_playing_handicap(&legacy, &round, &course), 15);
}

#[test]
fn legacy_compensation_needs_index_and_known_tee() {
    let course = par_72_course();
    let round = finished_round("2025-06-01", CourseLength::Full, GameMode::Stroke, vec![]);

    let scratch = owner(Some(0.0), 0, BTreeMap::new());
    assert_eq!(effective_playing_handicap(&scratch, &round, &course), 0);

    let unknown_tee = RoundPlayer {
        tee_box: "Negras".into(),
        ..owner(Some(18.0), 0, BTreeMap::new())
    };
    assert_eq!(effective_playing_handicap(&unknown_tee, &round, &course), 0);

    let stored = owner(Some(18.0), 12, BTreeMap::new());
    assert_eq!(effective_playing_handicap(&stored, &round, &course), 12);
}

#[test]
fn uses_the_marked_owner() {
    let course = par_72_course();
    let guest = RoundPlayer {
        id: Some("guest".into()),
        name: "Guest".into(),
        is_owner: false,
        ..owner(Some(5.0), 5, net_par_scores(1..=18))
    };
    // owner plays one over net par on every hole: 18 points
    let owner_scores = (1u8..=18)
        .map(|n| (n, Score::new(i32::from(PARS[usize::from(n - 1)]) + 2, 2)))
        .collect();
    let round = finished_round(
        "2025-06-01",
        CourseLength::Full,
        GameMode::Stableford,
        vec![guest, owner(Some(18.0), 18, owner_scores)],
    );
    // 18 - (18 - 36) = 36
    assert_eq!(virtual_handicap(&round, &course), Some(36.0));
}
