//! Shared course and round fixtures for engine tests.

use std::collections::BTreeMap;

use crate::domain::course::{Course, CourseLength, HoleInfo, Tee};
use crate::domain::round::{GameMode, HandicapPercentage, Round, RoundPlayer, Score};
use crate::domain::round_setup::{PlayerCreate, RoundCreate};

/// Par per hole: four par 3s, ten par 4s, four par 5s; 36 out, 36 in.
pub const PARS: [u8; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5];

/// 18 holes, par 72, stroke index equal to the hole number.
/// Tees: Amarillas (132 / 71.5) and Rojas (113 / 70.0).
pub fn par_72_course() -> Course {
    Course {
        id: Some("course-1".into()),
        name: "Test Golf".into(),
        holes: 18,
        par: 72,
        tees: vec![
            Tee {
                name: "Amarillas".into(),
                slope: 132,
                rating: 71.5,
            },
            Tee {
                name: "Rojas".into(),
                slope: 113,
                rating: 70.0,
            },
        ],
        holes_data: PARS
            .iter()
            .zip(1u8..)
            .map(|(&par, number)| HoleInfo::new(number, par, number, 350))
            .collect(),
    }
}

pub fn round_request(players: &[(&str, f64, &str)]) -> RoundCreate {
    RoundCreate {
        course_id: None,
        course_name: None,
        round_date: "2025-06-15".into(),
        course_length: CourseLength::Full,
        game_mode: GameMode::Stableford,
        use_handicap: true,
        handicap_percentage: HandicapPercentage::Full,
        sindicato_points: None,
        team_mode: None,
        best_ball_points: None,
        worst_ball_points: None,
        players: players
            .iter()
            .map(|&(name, index, tee)| PlayerCreate {
                name: name.into(),
                handicap_index: index,
                tee_box: tee.into(),
                team: None,
                playing_handicap: None,
            })
            .collect(),
    }
}

/// Owner player on the Rojas tee (slope 113).
pub fn owner(index: Option<f64>, playing_handicap: i32, scores: BTreeMap<u8, Score>) -> RoundPlayer {
    RoundPlayer {
        id: Some("p-owner".into()),
        name: "Owner".into(),
        handicap_index: index,
        tee_box: "Rojas".into(),
        team: None,
        playing_handicap,
        scores,
        is_owner: true,
    }
}

/// Strokes that score net par on every hole of `holes` for a playing handicap
/// of 18 on the fixture course (one stroke per hole).
pub fn net_par_scores(holes: impl IntoIterator<Item = u8>) -> BTreeMap<u8, Score> {
    holes
        .into_iter()
        .map(|n| (n, Score::new(i32::from(PARS[usize::from(n - 1)]) + 1, 2)))
        .collect()
}

/// Gross scores relative to par for holes 1.. in order.
pub fn scores_vs_par(deltas: &[i32], putts: i32) -> BTreeMap<u8, Score> {
    deltas
        .iter()
        .zip(1u8..)
        .map(|(&delta, n)| {
            let par = i32::from(PARS[usize::from(n - 1)]);
            (n, Score::new(par + delta, putts))
        })
        .collect()
}

pub fn finished_round(
    date: &str,
    length: CourseLength,
    game_mode: GameMode,
    players: Vec<RoundPlayer>,
) -> Round {
    Round {
        id: None,
        course_id: Some("course-1".into()),
        course_name: Some("Test Golf".into()),
        round_date: date.into(),
        course_length: length,
        game_mode,
        use_handicap: true,
        handicap_percentage: HandicapPercentage::Full,
        sindicato_points: None,
        team_mode: None,
        best_ball_points: None,
        worst_ball_points: None,
        current_hole: 18,
        completed_holes: Vec::new(),
        players,
        is_finished: true,
        is_imported: false,
        virtual_handicap: None,
    }
}
