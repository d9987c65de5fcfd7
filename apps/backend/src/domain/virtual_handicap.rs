//! Virtual Handicap: the handicap index a single round implies.

use crate::domain::course::{Course, CourseLength};
use crate::domain::handicap::{playing_handicap, round_to};
use crate::domain::round::{Round, RoundPlayer};
use crate::domain::stableford::{score_holes, StablefordResult, PAR_POINTS_18};

/// Playing handicap to score a player with.
///
/// Older rounds stored a playing handicap of 0 for players who do have an
/// index; when the tee is known the value is derived again from the index.
pub fn effective_playing_handicap(player: &RoundPlayer, round: &Round, course: &Course) -> i32 {
    if player.playing_handicap != 0 {
        return player.playing_handicap;
    }
    match (player.handicap_index, course.tee(&player.tee_box)) {
        (Some(index), Some(tee)) if index > 0.0 => {
            playing_handicap(index, tee.slope, round.handicap_percentage)
        }
        _ => player.playing_handicap,
    }
}

/// Stableford result for one player of the round over its in-scope holes.
pub fn player_stableford(player: &RoundPlayer, round: &Round, course: &Course) -> StablefordResult {
    let handicap = effective_playing_handicap(player, round, course);
    score_holes(
        handicap,
        &player.scores,
        course,
        round.course_length.hole_range(),
    )
}

/// Stableford points scaled to an 18-hole equivalent.
pub fn normalized_points(total_points: i32, length: CourseLength) -> i32 {
    if length.is_nine_holes() {
        total_points * 2
    } else {
        total_points
    }
}

/// `index - (points - 36)` on 18-hole-equivalent points, one decimal.
pub fn virtual_handicap_from_points(handicap_index: f64, normalized_points: i32) -> f64 {
    round_to(
        handicap_index - f64::from(normalized_points - PAR_POINTS_18),
        1,
    )
}

/// Virtual Handicap of the round owner, or `None` while it cannot be computed
/// (no owner, no index, or no playable hole scored yet).
pub fn virtual_handicap(round: &Round, course: &Course) -> Option<f64> {
    let owner = round.owner()?;
    let index = owner.handicap_index?;
    let result = player_stableford(owner, round, course);
    if result.is_empty() {
        return None;
    }
    let points = normalized_points(result.total_points, round.course_length);
    Some(virtual_handicap_from_points(index, points))
}
