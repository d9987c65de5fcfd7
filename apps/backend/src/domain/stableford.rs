//! Stroke allocation and Stableford scoring.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::course::Course;
use crate::domain::round::Score;

/// Strokes are always allocated over an 18-hole stroke-index scale, also for
/// nine-hole rounds.
pub const ALLOCATION_HOLES: i32 = 18;

/// Stableford points a scratch player scores over 18 holes playing to par.
pub const PAR_POINTS_18: i32 = 36;

/// Handicap strokes received on a hole with the given stroke index.
///
/// Euclidean division keeps plus handicaps correct: a playing handicap of -2
/// gives a stroke back on stroke indexes 17 and 18.
pub fn strokes_received(playing_handicap: i32, stroke_index: u8) -> i32 {
    let base = playing_handicap.div_euclid(ALLOCATION_HOLES);
    let remainder = playing_handicap.rem_euclid(ALLOCATION_HOLES);
    if i32::from(stroke_index) <= remainder {
        base + 1
    } else {
        base
    }
}

/// Points for a net score relative to par.
pub fn stableford_points(net_score: i32, par: u8) -> u8 {
    match net_score - i32::from(par) {
        i32::MIN..=-3 => 5,
        -2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StablefordResult {
    pub points: BTreeMap<u8, u8>,
    pub strokes_received: BTreeMap<u8, i32>,
    pub total_points: i32,
    pub holes_played: u32,
}

impl StablefordResult {
    pub fn is_empty(&self) -> bool {
        self.holes_played == 0
    }
}

/// Stableford for one player's scores over `holes`.
///
/// Holes without a score, with non-positive strokes, or missing from the
/// course metadata are skipped.
pub fn score_holes(
    playing_handicap: i32,
    scores: &BTreeMap<u8, Score>,
    course: &Course,
    holes: RangeInclusive<u8>,
) -> StablefordResult {
    let mut result = StablefordResult::default();
    for number in holes {
        let Some(score) = scores.get(&number) else {
            continue;
        };
        if score.strokes <= 0 {
            continue;
        }
        let Some(hole) = course.hole(number) else {
            continue;
        };
        let received = strokes_received(playing_handicap, hole.handicap);
        let points = stableford_points(score.strokes - received, hole.par);
        result.points.insert(number, points);
        result.strokes_received.insert(number, received);
        result.total_points += i32::from(points);
        result.holes_played += 1;
    }
    result
}
